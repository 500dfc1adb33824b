//! Error types for scoped data access
//!
//! This module defines all error types that can occur when building and
//! using workspace-scoped collections.

use thiserror::Error;
use uuid::Uuid;

/// Scoped data access error types.
#[derive(Debug, Error)]
pub enum ScopeError {
    /// A scoped query was requested without a workspace id.
    ///
    /// Raised synchronously by the gateway. This is a programming defect
    /// in the calling code path, not a recoverable condition: correctly
    /// guarded views always hold an active workspace before querying.
    #[error("Scoped query requested without a workspace id")]
    MissingWorkspace,

    /// A write carried a record belonging to a different workspace.
    #[error("Record belongs to workspace {found}, expected {expected}")]
    WorkspaceMismatch {
        /// The collection's scope
        expected: Uuid,
        /// The workspace id carried by the record
        found: Uuid,
    },

    /// No record with the given id exists inside the scope.
    #[error("Record not found: {0}")]
    NotFound(Uuid),

    /// Failure reaching the underlying store.
    #[error("Store request failed: {0}")]
    Transport(String),

    /// Row (de)serialization failed.
    #[error("Row serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for scoped data access operations.
pub type ScopeResult<T> = Result<T, ScopeError>;

impl ScopeError {
    /// Check if this error is a defect in calling code rather than a
    /// runtime condition.
    ///
    /// Defects should fail loudly in development; transport errors are
    /// surfaced to the user as transient notices.
    pub fn is_defect(&self) -> bool {
        matches!(
            self,
            ScopeError::MissingWorkspace | ScopeError::WorkspaceMismatch { .. }
        )
    }
}
