//! Scoped query gateway
//!
//! This module provides the filter-injecting factory that turns a store
//! handle plus a workspace id into typed, tenant-scoped collections.
//! Application code reads and writes tenant data only through here.

use std::marker::PhantomData;
use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use crate::error::{ScopeError, ScopeResult};
use crate::records::TenantRecord;
use crate::store::{Filter, StoreClient};

/// Factory for workspace-scoped collections.
///
/// The gateway holds no state beyond the store handle; it is safe to
/// clone and call from any number of tasks.
///
/// Building a collection fails fast when no workspace id is available.
/// That is deliberate: silently omitting the workspace filter would leak
/// data across tenants, so the absence of a scope is treated as a defect
/// in the calling code path, not a recoverable condition.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use uuid::Uuid;
/// use atelier_scope::{MemoryStore, Project, ScopeGateway, ScopeError};
///
/// let gateway = ScopeGateway::new(Arc::new(MemoryStore::new()));
///
/// // No active workspace: hard error, not an empty result set
/// let err = gateway.scoped::<Project>(None).unwrap_err();
/// assert!(matches!(err, ScopeError::MissingWorkspace));
/// ```
#[derive(Clone)]
pub struct ScopeGateway {
    store: Arc<dyn StoreClient>,
}

impl std::fmt::Debug for ScopeGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScopeGateway").finish()
    }
}

impl ScopeGateway {
    /// Create a gateway over a store client.
    pub fn new(store: Arc<dyn StoreClient>) -> Self {
        Self { store }
    }

    /// Build a collection scoped to a workspace.
    ///
    /// # Arguments
    ///
    /// * `workspace` - The active workspace id; `None` (or the nil UUID,
    ///   which some host storages use for "unset") raises
    ///   [`ScopeError::MissingWorkspace`]
    ///
    /// # Returns
    ///
    /// A [`ScopedCollection`] whose every operation carries the
    /// workspace equality filter
    pub fn scoped<T: TenantRecord>(&self, workspace: Option<Uuid>) -> ScopeResult<ScopedCollection<T>> {
        match workspace {
            Some(id) if !id.is_nil() => Ok(ScopedCollection {
                store: Arc::clone(&self.store),
                workspace_id: id,
                _record: PhantomData,
            }),
            _ => Err(ScopeError::MissingWorkspace),
        }
    }
}

/// A typed collection bound to one workspace.
///
/// Every operation injects `workspace_id = <scope>`; the collection
/// offers no operation that can remove or widen that filter. Writes
/// additionally require the record itself to carry the scope's
/// workspace id.
pub struct ScopedCollection<T: TenantRecord> {
    store: Arc<dyn StoreClient>,
    workspace_id: Uuid,
    _record: PhantomData<T>,
}

impl<T: TenantRecord> std::fmt::Debug for ScopedCollection<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScopedCollection")
            .field("kind", &T::KIND)
            .field("workspace_id", &self.workspace_id)
            .finish()
    }
}

impl<T: TenantRecord> ScopedCollection<T> {
    /// The workspace this collection is bound to.
    pub fn workspace_id(&self) -> Uuid {
        self.workspace_id
    }

    fn scope_filter(&self) -> Filter {
        Filter::eq_id("workspace_id", self.workspace_id)
    }

    fn check_scope(&self, record: &T) -> ScopeResult<()> {
        if record.workspace_id() != self.workspace_id {
            return Err(ScopeError::WorkspaceMismatch {
                expected: self.workspace_id,
                found: record.workspace_id(),
            });
        }
        Ok(())
    }

    /// List all records in the scope.
    pub async fn list(&self) -> ScopeResult<Vec<T>> {
        let rows = self.store.select(T::KIND, &[self.scope_filter()]).await?;
        rows.into_iter()
            .map(|row| serde_json::from_value(row).map_err(ScopeError::from))
            .collect()
    }

    /// Fetch one record by id.
    ///
    /// # Returns
    ///
    /// `None` when no record with that id exists inside the scope,
    /// including when the id exists but belongs to another workspace.
    pub async fn get(&self, id: Uuid) -> ScopeResult<Option<T>> {
        let rows = self
            .store
            .select(T::KIND, &[self.scope_filter(), Filter::eq_id("id", id)])
            .await?;
        rows.into_iter()
            .next()
            .map(|row| serde_json::from_value(row).map_err(ScopeError::from))
            .transpose()
    }

    /// Insert a record.
    ///
    /// The record must carry this collection's workspace id.
    pub async fn insert(&self, record: &T) -> ScopeResult<()> {
        self.check_scope(record)?;
        let row = serde_json::to_value(record)?;
        debug!(kind = T::KIND.as_str(), workspace_id = %self.workspace_id, "insert");
        self.store.insert(T::KIND, row).await
    }

    /// Replace a record in place.
    ///
    /// The record must carry this collection's workspace id.
    ///
    /// # Errors
    ///
    /// [`ScopeError::NotFound`] when no record with that id exists
    /// inside the scope
    pub async fn update(&self, record: &T) -> ScopeResult<()> {
        self.check_scope(record)?;
        let row = serde_json::to_value(record)?;
        let affected = self
            .store
            .update(
                T::KIND,
                &[self.scope_filter(), Filter::eq_id("id", record.id())],
                row,
            )
            .await?;
        if affected == 0 {
            return Err(ScopeError::NotFound(record.id()));
        }
        debug!(kind = T::KIND.as_str(), workspace_id = %self.workspace_id, "update");
        Ok(())
    }

    /// Delete a record by id.
    ///
    /// # Errors
    ///
    /// [`ScopeError::NotFound`] when no record with that id exists
    /// inside the scope
    pub async fn remove(&self, id: Uuid) -> ScopeResult<()> {
        let affected = self
            .store
            .delete(T::KIND, &[self.scope_filter(), Filter::eq_id("id", id)])
            .await?;
        if affected == 0 {
            return Err(ScopeError::NotFound(id));
        }
        debug!(kind = T::KIND.as_str(), workspace_id = %self.workspace_id, "delete");
        Ok(())
    }
}
