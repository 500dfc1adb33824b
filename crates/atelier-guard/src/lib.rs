//! # Platform Access Guards
//!
//! This crate provides the navigation access guards for the Atelier
//! platform, shared across the Studio and ClientDesk applications.
//!
//! ## Overview
//!
//! The atelier-guard crate handles:
//! - **Access guard**: The auth, onboarding, subscription precedence
//!   state machine evaluated on every navigation
//! - **Feature guard**: Plan-gated capabilities rendered as locked views
//! - **Admin guard**: The platform-staff gate for the operator console
//! - **Boundaries**: Identity provider, subscription status, and
//!   platform role lookups, each an async trait with a memory-backed
//!   implementation
//!
//! ## Architecture
//!
//! ```text
//! navigation(path)
//!   │
//!   ├─ context loading?  ──→ Loading (placeholder, no redirect)
//!   ├─ no principal?     ──→ RedirectAuth
//!   ├─ no workspace?     ──→ RedirectOnboarding   (unless bootstrap path)
//!   ├─ lapsed billing?   ──→ RedirectPendingPayment (unless exempt path)
//!   └─ otherwise         ──→ Allowed
//!                              │
//!                              └─ FeatureGuard ──→ Allowed | Locked
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use atelier_guard::{AccessGuard, RoutePolicy, StaticIdentity, StaticSubscriptions};
//!
//! let identity = Arc::new(StaticIdentity::signed_out());
//! let subscriptions = Arc::new(StaticSubscriptions::new());
//! let guard = AccessGuard::new(identity, subscriptions, RoutePolicy::default());
//! ```
//!
//! ## Cross-Crate Integration
//!
//! This crate is designed to work with:
//! - `atelier-tenancy`: Guards read the `TenantContext`
//! - `atelier-plans`: The feature guard consults `Entitlements`

pub mod admin;
pub mod billing;
pub mod error;
pub mod guard;
pub mod identity;
pub mod routes;

// Re-export main types for convenience
pub use admin::{PlatformRole, PlatformRoles, StaticPlatformRoles};
pub use billing::{StaticSubscriptions, SubscriptionLookup};
pub use error::{GuardError, GuardResult};
pub use guard::{AccessDecision, AccessGuard, AdminDecision, AdminGuard, FeatureDecision, FeatureGuard};
pub use identity::{AuthEvent, IdentityProvider, StaticIdentity};
pub use routes::RoutePolicy;
