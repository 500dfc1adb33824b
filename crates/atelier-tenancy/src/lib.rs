//! # Platform Workspace Tenancy
//!
//! This crate provides multi-tenant workspace management for the Atelier
//! platform, shared across the Studio and ClientDesk applications.
//!
//! ## Overview
//!
//! The atelier-tenancy crate handles:
//! - **Workspaces**: Top-level tenant entities with a subscription plan
//! - **Memberships**: User-workspace relationships with roles
//! - **Roles**: Workspace role hierarchy (Member < Admin < Owner)
//! - **Subscriptions**: Billing status per workspace (opaque provider refs)
//! - **Tenant context**: The single owner of the active-workspace pointer
//!
//! ## Architecture
//!
//! ```text
//! User
//!   ├─ Membership ─→ Workspace
//!   │                   ├─ PlanTier (limits, features)
//!   │                   └─ Subscription (status)
//!   └─ TenantContext (membership list + active workspace)
//!         ├─ MembershipDirectory (relational store lookup)
//!         └─ ActiveWorkspaceStore (client-local remembered id)
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use atelier_tenancy::{Membership, Workspace, WorkspaceRole};
//! use uuid::Uuid;
//!
//! // Create a workspace at onboarding
//! let owner_id = Uuid::now_v7();
//! let workspace = Workspace::new("Meridian Interiors", owner_id);
//!
//! // Add a member
//! let user_id = Uuid::now_v7();
//! let membership = Membership::new(workspace.id, user_id, WorkspaceRole::Member);
//! ```
//!
//! ## Cross-Crate Integration
//!
//! This crate is designed to work with:
//! - `atelier-plans`: Plan limits consulted for workspace creation caps
//! - `atelier-scope`: Scoped data access keyed by the active workspace
//! - `atelier-guard`: Navigation guards reading the tenant context

pub mod context;
pub mod membership;
pub mod roles;
pub mod subscription;
pub mod workspace;

// Re-export main types for convenience
pub use context::{
    ActiveWorkspaceStore, ContextError, ContextResult, MembershipDirectory, MemoryWorkspaceStore,
    StaticDirectory, TenantContext,
};
pub use membership::Membership;
pub use roles::WorkspaceRole;
pub use subscription::{has_active_subscription, Subscription, SubscriptionStatus};
pub use workspace::{Workspace, WorkspaceSummary};
