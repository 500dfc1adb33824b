//! Identity provider boundary
//!
//! This module defines the authentication boundary the guards consult:
//! who is the current principal, and a change stream for reacting to
//! sign-in and sign-out without polling.

use std::sync::RwLock;

use async_trait::async_trait;
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::error::GuardResult;

/// Authentication state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthEvent {
    /// A principal signed in
    SignedIn(Uuid),

    /// The session signed out
    SignedOut,
}

/// The identity provider boundary.
///
/// Backed by the managed auth service in production; `StaticIdentity`
/// provides a memory-backed implementation for single-process use and
/// testing.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// The currently authenticated principal, if any.
    async fn current_principal(&self) -> GuardResult<Option<Uuid>>;

    /// Subscribe to authentication state changes.
    fn subscribe(&self) -> broadcast::Receiver<AuthEvent>;
}

/// In-memory identity provider.
///
/// Suitable for single-process applications and testing.
pub struct StaticIdentity {
    principal: RwLock<Option<Uuid>>,
    events: broadcast::Sender<AuthEvent>,
}

impl std::fmt::Debug for StaticIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticIdentity").finish()
    }
}

impl StaticIdentity {
    /// Create a provider with no signed-in principal.
    pub fn signed_out() -> Self {
        let (events, _) = broadcast::channel(16);
        Self {
            principal: RwLock::new(None),
            events,
        }
    }

    /// Create a provider with a principal already signed in.
    pub fn signed_in(principal_id: Uuid) -> Self {
        let provider = Self::signed_out();
        *provider.principal.write().expect("identity lock poisoned") = Some(principal_id);
        provider
    }

    /// Sign a principal in and notify subscribers.
    pub fn sign_in(&self, principal_id: Uuid) {
        *self.principal.write().expect("identity lock poisoned") = Some(principal_id);
        // No subscribers is fine
        let _ = self.events.send(AuthEvent::SignedIn(principal_id));
    }

    /// Sign out and notify subscribers.
    pub fn sign_out(&self) {
        *self.principal.write().expect("identity lock poisoned") = None;
        let _ = self.events.send(AuthEvent::SignedOut);
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentity {
    async fn current_principal(&self) -> GuardResult<Option<Uuid>> {
        Ok(*self.principal.read().expect("identity lock poisoned"))
    }

    fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
        self.events.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_current_principal() {
        let identity = StaticIdentity::signed_out();
        assert!(identity.current_principal().await.unwrap().is_none());

        let principal_id = Uuid::now_v7();
        identity.sign_in(principal_id);
        assert_eq!(
            identity.current_principal().await.unwrap(),
            Some(principal_id)
        );

        identity.sign_out();
        assert!(identity.current_principal().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_change_stream() {
        let identity = StaticIdentity::signed_out();
        let mut events = identity.subscribe();

        let principal_id = Uuid::now_v7();
        identity.sign_in(principal_id);
        identity.sign_out();

        assert_eq!(events.recv().await.unwrap(), AuthEvent::SignedIn(principal_id));
        assert_eq!(events.recv().await.unwrap(), AuthEvent::SignedOut);
    }
}
