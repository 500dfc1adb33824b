//! Store client boundary
//!
//! This module defines the query interface the platform expects from the
//! backend-as-a-service relational store, plus an in-memory
//! implementation for single-process applications and testing.
//!
//! The store itself is unscoped; tenant isolation is the gateway's job
//! (see [`crate::gateway`]). Application code never holds a
//! `StoreClient` directly.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{ScopeError, ScopeResult};
use crate::records::EntityKind;

/// An equality filter on a row column.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    /// Column name
    pub column: String,

    /// Value the column must equal
    pub value: Value,
}

impl Filter {
    /// Create an equality filter.
    ///
    /// # Arguments
    ///
    /// * `column` - Column name
    /// * `value` - Value the column must equal
    pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            column: column.into(),
            value: value.into(),
        }
    }

    /// Create an equality filter on a UUID column.
    pub fn eq_id(column: impl Into<String>, id: Uuid) -> Self {
        Self::eq(column, id.to_string())
    }

    /// Check whether a row satisfies this filter.
    pub fn matches(&self, row: &Value) -> bool {
        row.get(&self.column) == Some(&self.value)
    }
}

/// The relational store query boundary.
///
/// Rows are JSON objects as the backend-as-a-service client returns
/// them; typed decoding happens at the gateway. All operations apply
/// every given filter conjunctively.
#[async_trait]
pub trait StoreClient: Send + Sync {
    /// Select all rows of a kind matching the filters.
    async fn select(&self, kind: EntityKind, filters: &[Filter]) -> ScopeResult<Vec<Value>>;

    /// Insert a row.
    async fn insert(&self, kind: EntityKind, row: Value) -> ScopeResult<()>;

    /// Replace rows matching the filters.
    ///
    /// # Returns
    ///
    /// The number of rows affected
    async fn update(&self, kind: EntityKind, filters: &[Filter], row: Value) -> ScopeResult<u64>;

    /// Delete rows matching the filters.
    ///
    /// # Returns
    ///
    /// The number of rows affected
    async fn delete(&self, kind: EntityKind, filters: &[Filter]) -> ScopeResult<u64>;
}

/// In-memory store implementation.
///
/// Suitable for single-process applications and testing. Rows live in a
/// map keyed by kind; filters are applied linearly.
#[derive(Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<HashMap<EntityKind, Vec<Value>>>>,
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStore").finish()
    }
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of rows of a kind, across all workspaces.
    ///
    /// Test helper for isolation assertions; not part of the
    /// [`StoreClient`] surface.
    pub async fn row_count(&self, kind: EntityKind) -> usize {
        self.tables
            .read()
            .await
            .get(&kind)
            .map(Vec::len)
            .unwrap_or(0)
    }
}

#[async_trait]
impl StoreClient for MemoryStore {
    async fn select(&self, kind: EntityKind, filters: &[Filter]) -> ScopeResult<Vec<Value>> {
        let tables = self.tables.read().await;
        let rows = tables.get(&kind).map(|r| r.as_slice()).unwrap_or(&[]);
        Ok(rows
            .iter()
            .filter(|row| filters.iter().all(|f| f.matches(row)))
            .cloned()
            .collect())
    }

    async fn insert(&self, kind: EntityKind, row: Value) -> ScopeResult<()> {
        if !row.is_object() {
            return Err(ScopeError::Transport(format!(
                "refused non-object row for {}",
                kind.as_str()
            )));
        }
        self.tables.write().await.entry(kind).or_default().push(row);
        Ok(())
    }

    async fn update(&self, kind: EntityKind, filters: &[Filter], row: Value) -> ScopeResult<u64> {
        let mut tables = self.tables.write().await;
        let rows = tables.entry(kind).or_default();
        let mut affected = 0;
        for existing in rows.iter_mut() {
            if filters.iter().all(|f| f.matches(existing)) {
                *existing = row.clone();
                affected += 1;
            }
        }
        Ok(affected)
    }

    async fn delete(&self, kind: EntityKind, filters: &[Filter]) -> ScopeResult<u64> {
        let mut tables = self.tables.write().await;
        let rows = tables.entry(kind).or_default();
        let before = rows.len();
        rows.retain(|row| !filters.iter().all(|f| f.matches(row)));
        Ok((before - rows.len()) as u64)
    }
}
