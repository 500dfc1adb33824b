//! Subscription status boundary
//!
//! The guards only ever see the billing provider as a status string per
//! workspace; everything else about billing is owned elsewhere.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use atelier_tenancy::SubscriptionStatus;
use uuid::Uuid;

use crate::error::GuardResult;

/// The per-workspace subscription status lookup boundary.
#[async_trait]
pub trait SubscriptionLookup: Send + Sync {
    /// The workspace's subscription status, or `None` when no
    /// subscription row exists. A missing row never counts as active.
    async fn status(&self, workspace_id: Uuid) -> GuardResult<Option<SubscriptionStatus>>;
}

/// In-memory subscription status lookup.
///
/// Suitable for single-process applications and testing.
#[derive(Debug, Default)]
pub struct StaticSubscriptions {
    statuses: RwLock<HashMap<Uuid, SubscriptionStatus>>,
}

impl StaticSubscriptions {
    /// Create an empty lookup: every workspace reads as unsubscribed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the status reported for a workspace.
    pub fn set_status(&self, workspace_id: Uuid, status: SubscriptionStatus) {
        self.statuses
            .write()
            .expect("subscriptions lock poisoned")
            .insert(workspace_id, status);
    }
}

#[async_trait]
impl SubscriptionLookup for StaticSubscriptions {
    async fn status(&self, workspace_id: Uuid) -> GuardResult<Option<SubscriptionStatus>> {
        Ok(self
            .statuses
            .read()
            .expect("subscriptions lock poisoned")
            .get(&workspace_id)
            .copied())
    }
}
