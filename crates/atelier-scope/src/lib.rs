//! # Platform Scoped Data Access
//!
//! This crate provides workspace-scoped data access for the Atelier
//! platform: the single sanctioned path for reading and writing
//! tenant-scoped records, shared across the Studio and ClientDesk
//! applications.
//!
//! ## Overview
//!
//! The atelier-scope crate handles:
//! - **Records**: The closed set of tenant-scoped record kinds
//! - **Store client**: The backend-as-a-service query boundary
//! - **Gateway**: The filter-injecting factory for scoped collections
//!
//! Cross-tenant access is not a convention here; it is unrepresentable.
//! The only way to touch a tenant-scoped record is through a
//! [`ScopedCollection`], and every collection operation carries the
//! workspace equality filter with no way to omit or widen it.
//!
//! ## Architecture
//!
//! ```text
//! ScopeGateway::scoped::<Project>(workspace_id)
//!       │                    │
//!       │                    └─ None / nil: ScopeError::MissingWorkspace
//!       ▼
//! ScopedCollection<Project>
//!       │  list / get / insert / update / remove
//!       ▼
//! dyn StoreClient          (workspace_id = <scope> injected on every op)
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use uuid::Uuid;
//! use atelier_scope::{MemoryStore, Project, ScopeGateway};
//!
//! # async fn example() -> atelier_scope::ScopeResult<()> {
//! let gateway = ScopeGateway::new(Arc::new(MemoryStore::new()));
//! let workspace_id = Uuid::now_v7();
//!
//! let projects = gateway.scoped::<Project>(Some(workspace_id))?;
//! projects.insert(&Project::new(workspace_id, "Penthouse refit")).await?;
//! assert_eq!(projects.list().await?.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod gateway;
pub mod records;
pub mod store;

// Re-export main types for convenience
pub use error::{ScopeError, ScopeResult};
pub use gateway::{ScopeGateway, ScopedCollection};
pub use records::{BudgetLine, Client, DocTemplate, EntityKind, Project, ProjectStatus, Task, TenantRecord};
pub use store::{Filter, MemoryStore, StoreClient};
