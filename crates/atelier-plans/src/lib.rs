//! # Platform Plan Catalog & Entitlements
//!
//! This crate provides the subscription plan catalog and feature
//! entitlement resolution for the Atelier platform, shared across the
//! Studio and ClientDesk applications.
//!
//! ## Overview
//!
//! The atelier-plans crate handles:
//! - **Plans**: The closed set of subscription tiers with usage limits
//! - **Features**: The closed set of gated product features
//! - **Upgrade tiers**: Which plan unlocks which feature (upsell copy)
//! - **Entitlements**: "Is feature X usable right now?" resolution,
//!   including the platform-administrator override
//!
//! ## Architecture
//!
//! ```text
//! PlanTier ──→ PlanLimits   (usage caps, None = unbounded)
//!    │
//!    └──────→ PlanFeatures  (boolean feature flags)
//!                  │
//! Entitlements ←───┘        (active plan + admin override)
//!      │
//!      └─ allows(Feature)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use atelier_plans::{Entitlements, Feature, PlanTier};
//!
//! // A workspace on the Studio plan
//! let entitlements = Entitlements::resolve(Some(PlanTier::Studio), false);
//! assert!(entitlements.allows(Feature::Scheduling));
//! assert!(!entitlements.allows(Feature::AiAssist));
//!
//! // Which plan would unlock it?
//! assert_eq!(Feature::AiAssist.required_plan().plan(), PlanTier::Practice);
//! ```
//!
//! ## Cross-Crate Integration
//!
//! This crate is designed to work with:
//! - `atelier-tenancy`: Workspaces carry a `PlanTier`
//! - `atelier-guard`: The feature guard consults `Entitlements`

pub mod entitlements;
pub mod features;
pub mod tiers;

// Re-export main types for convenience
pub use entitlements::Entitlements;
pub use features::{Feature, PlanFeatures, UpgradeTier};
pub use tiers::{PlanLimits, PlanTier};
