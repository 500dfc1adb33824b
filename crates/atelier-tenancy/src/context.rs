//! Tenant context: the active-workspace pointer
//!
//! This module provides the `TenantContext`, the single owner of the
//! active-workspace selection. The pointer is mutated only through
//! `load` and `switch`; the remembered id in client-local storage is a
//! cache written as a side effect of those mutations, never a source of
//! truth.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::roles::WorkspaceRole;
use crate::workspace::WorkspaceSummary;

/// Tenant context error types.
#[derive(Debug, Error)]
pub enum ContextError {
    /// Failure reaching the membership directory
    #[error("Membership lookup failed: {0}")]
    Transport(String),
}

/// Result type for tenant context operations.
pub type ContextResult<T> = Result<T, ContextError>;

/// Membership lookup boundary.
///
/// Backed by the relational store in production; `StaticDirectory`
/// provides a memory-backed implementation for single-process use and
/// testing.
#[async_trait]
pub trait MembershipDirectory: Send + Sync {
    /// Fetch the workspaces a principal belongs to, with the principal's
    /// role in each. Returned order is the directory's display order;
    /// the first entry is the fallback active workspace.
    async fn workspaces_for(&self, principal_id: Uuid) -> ContextResult<Vec<WorkspaceSummary>>;
}

/// Client-local storage of the remembered active-workspace id.
///
/// Implementations must tolerate absent or stale values; the context
/// validates every remembered id against the fresh membership list.
pub trait ActiveWorkspaceStore: Send + Sync {
    /// Read the remembered workspace id, if any.
    fn get(&self) -> Option<Uuid>;

    /// Remember a workspace id.
    fn set(&self, workspace_id: Uuid);

    /// Forget the remembered id.
    fn clear(&self);
}

/// In-memory active-workspace store.
///
/// Suitable for single-process applications and testing; browser hosts
/// implement [`ActiveWorkspaceStore`] over their local key-value storage.
#[derive(Debug, Default)]
pub struct MemoryWorkspaceStore {
    remembered: RwLock<Option<Uuid>>,
}

impl MemoryWorkspaceStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with a pre-remembered id.
    pub fn remembering(workspace_id: Uuid) -> Self {
        Self {
            remembered: RwLock::new(Some(workspace_id)),
        }
    }
}

impl ActiveWorkspaceStore for MemoryWorkspaceStore {
    fn get(&self) -> Option<Uuid> {
        *self.remembered.read().expect("store lock poisoned")
    }

    fn set(&self, workspace_id: Uuid) {
        *self.remembered.write().expect("store lock poisoned") = Some(workspace_id);
    }

    fn clear(&self) {
        *self.remembered.write().expect("store lock poisoned") = None;
    }
}

/// In-memory membership directory.
///
/// Suitable for single-process applications and testing.
#[derive(Debug, Default)]
pub struct StaticDirectory {
    memberships: RwLock<HashMap<Uuid, Vec<WorkspaceSummary>>>,
}

impl StaticDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the workspace list returned for a principal.
    pub fn set_workspaces(&self, principal_id: Uuid, workspaces: Vec<WorkspaceSummary>) {
        self.memberships
            .write()
            .expect("directory lock poisoned")
            .insert(principal_id, workspaces);
    }
}

#[async_trait]
impl MembershipDirectory for StaticDirectory {
    async fn workspaces_for(&self, principal_id: Uuid) -> ContextResult<Vec<WorkspaceSummary>> {
        Ok(self
            .memberships
            .read()
            .expect("directory lock poisoned")
            .get(&principal_id)
            .cloned()
            .unwrap_or_default())
    }
}

/// A principal's tenant context: membership list plus active workspace.
///
/// The context is the only writer of the active-workspace pointer.
/// Views read it; mutations go through [`TenantContext::load`] and
/// [`TenantContext::switch`], which also own the persistence side effect.
///
/// Invariant: `active_workspace()` is always an element of the current
/// membership list, or `None` when the list is empty.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use uuid::Uuid;
/// use atelier_tenancy::{MemoryWorkspaceStore, StaticDirectory, TenantContext};
///
/// # async fn example() -> atelier_tenancy::ContextResult<()> {
/// let principal_id = Uuid::now_v7();
/// let directory = Arc::new(StaticDirectory::new());
/// let store = Arc::new(MemoryWorkspaceStore::new());
///
/// let mut ctx = TenantContext::new(principal_id, directory, store);
/// ctx.load().await?;
/// assert!(!ctx.has_any_workspace());
/// # Ok(())
/// # }
/// ```
pub struct TenantContext {
    /// The authenticated principal this context belongs to
    principal_id: Uuid,

    /// Fetched membership list
    workspaces: Vec<WorkspaceSummary>,

    /// Active workspace; always a member of `workspaces`
    active: Option<Uuid>,

    /// Whether a load is pending (true until the first load completes)
    loading: bool,

    /// Membership lookup boundary
    directory: Arc<dyn MembershipDirectory>,

    /// Remembered-id persistence boundary
    store: Arc<dyn ActiveWorkspaceStore>,
}

impl TenantContext {
    /// Create a context for a principal.
    ///
    /// The context starts in the loading state; call
    /// [`TenantContext::load`] before reading memberships.
    ///
    /// # Arguments
    ///
    /// * `principal_id` - The authenticated principal
    /// * `directory` - Membership lookup boundary
    /// * `store` - Client-local remembered-id store
    pub fn new(
        principal_id: Uuid,
        directory: Arc<dyn MembershipDirectory>,
        store: Arc<dyn ActiveWorkspaceStore>,
    ) -> Self {
        Self {
            principal_id,
            workspaces: Vec::new(),
            active: None,
            loading: true,
            directory,
            store,
        }
    }

    /// Load (or reload) the membership list and reconcile the active
    /// workspace.
    ///
    /// On success:
    /// - a remembered id still present in the fresh list stays active;
    /// - a stale or foreign remembered id is discarded and the first
    ///   workspace in directory order becomes active (and is persisted);
    /// - an empty list clears both the pointer and the remembered id.
    ///
    /// On transport error the prior membership list and pointer are left
    /// untouched, the loading flag is cleared, and the error is returned
    /// for the caller to surface as a transient notice.
    pub async fn load(&mut self) -> ContextResult<()> {
        self.loading = true;
        let workspaces = match self.directory.workspaces_for(self.principal_id).await {
            Ok(workspaces) => workspaces,
            Err(err) => {
                warn!(principal_id = %self.principal_id, error = %err,
                    "membership load failed, keeping prior context");
                self.loading = false;
                return Err(err);
            }
        };

        let remembered = self.store.get();
        let active = match remembered {
            Some(id) if workspaces.iter().any(|w| w.id == id) => Some(id),
            _ => workspaces.first().map(|w| w.id),
        };
        match active {
            Some(id) => self.store.set(id),
            None => self.store.clear(),
        }

        debug!(principal_id = %self.principal_id, count = workspaces.len(),
            active = ?active, "tenant context loaded");
        self.workspaces = workspaces;
        self.active = active;
        self.loading = false;
        Ok(())
    }

    /// Switch the active workspace.
    ///
    /// Ids outside the current membership list are ignored: stale UI
    /// state (a workspace picker rendered before a reload) may legally
    /// ask for a workspace the principal no longer belongs to, and that
    /// must not tear down the session.
    ///
    /// # Arguments
    ///
    /// * `workspace_id` - The workspace to activate
    ///
    /// # Returns
    ///
    /// `true` if the switch took effect, `false` if the id was ignored
    pub fn switch(&mut self, workspace_id: Uuid) -> bool {
        if self.workspaces.iter().any(|w| w.id == workspace_id) {
            self.active = Some(workspace_id);
            self.store.set(workspace_id);
            debug!(%workspace_id, "switched active workspace");
            true
        } else {
            debug!(%workspace_id, "ignored switch to workspace outside membership list");
            false
        }
    }

    /// Check whether the principal may create another workspace.
    ///
    /// Counts the workspaces the principal owns against the active
    /// workspace's plan limit. With no active workspace the answer is
    /// always yes (the onboarding bootstrap case).
    pub fn can_create_workspace(&self) -> bool {
        let Some(summary) = self.active_summary() else {
            return true;
        };
        let owned = self
            .workspaces
            .iter()
            .filter(|w| w.user_role == WorkspaceRole::Owner)
            .count();
        summary.plan.limits().allows_another_workspace(owned)
    }

    /// Check whether the principal belongs to any workspace.
    pub fn has_any_workspace(&self) -> bool {
        !self.workspaces.is_empty()
    }

    /// The active workspace id, if any.
    pub fn active_workspace(&self) -> Option<Uuid> {
        self.active
    }

    /// The active workspace's summary, if any.
    pub fn active_summary(&self) -> Option<&WorkspaceSummary> {
        self.active
            .and_then(|id| self.workspaces.iter().find(|w| w.id == id))
    }

    /// The full membership list, in directory order.
    pub fn workspaces(&self) -> &[WorkspaceSummary] {
        &self.workspaces
    }

    /// The principal this context belongs to.
    pub fn principal_id(&self) -> Uuid {
        self.principal_id
    }

    /// Whether a load is pending.
    pub fn is_loading(&self) -> bool {
        self.loading
    }
}
