//! Entitlement resolution
//!
//! This module answers "is feature X usable right now?" for the active
//! workspace, accounting for the platform-administrator override.

use serde::{Deserialize, Serialize};

use crate::features::{Feature, PlanFeatures};
use crate::tiers::PlanTier;

/// Resolved feature entitlements for a session.
///
/// An `Entitlements` value is computed once per guard evaluation from the
/// active workspace's plan and the principal's platform-admin status, and
/// then answers per-feature queries without further lookups.
///
/// Resolution rules:
/// 1. A platform administrator is entitled to every feature, regardless
///    of the active workspace or its plan.
/// 2. Otherwise the active plan's flag table decides; with no active
///    workspace the default plan's flags apply.
///
/// # Examples
///
/// ```
/// use atelier_plans::{Entitlements, Feature, PlanTier};
///
/// let ents = Entitlements::resolve(Some(PlanTier::Solo), false);
/// assert!(!ents.allows(Feature::Reporting));
///
/// // Platform admins bypass plan gating entirely
/// let ents = Entitlements::resolve(None, true);
/// assert!(ents.allows(Feature::Reporting));
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Entitlements {
    /// Flag record of the resolved plan
    features: PlanFeatures,

    /// Platform-administrator override
    admin_override: bool,
}

impl Entitlements {
    /// Resolve entitlements from an active plan and admin status.
    ///
    /// # Arguments
    ///
    /// * `plan` - The active workspace's plan, or `None` when the
    ///   principal has no active workspace
    /// * `platform_admin` - Whether the principal holds the platform
    ///   Admin role
    pub fn resolve(plan: Option<PlanTier>, platform_admin: bool) -> Self {
        Self {
            features: plan.unwrap_or_default().features(),
            admin_override: platform_admin,
        }
    }

    /// Check whether a feature is usable.
    pub fn allows(&self, feature: Feature) -> bool {
        self.admin_override || self.features.enabled(feature)
    }

    /// Whether these entitlements come from the admin override.
    pub fn is_admin_override(&self) -> bool {
        self.admin_override
    }

    /// Features not usable under these entitlements, in `Feature::ALL`
    /// order. Empty for platform admins.
    pub fn locked_features(&self) -> Vec<Feature> {
        Feature::ALL
            .into_iter()
            .filter(|f| !self.allows(*f))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_override_allows_everything() {
        let ents = Entitlements::resolve(Some(PlanTier::Solo), true);
        for feature in Feature::ALL {
            assert!(ents.allows(feature));
        }
        assert!(ents.locked_features().is_empty());
    }

    #[test]
    fn test_plan_flags_decide_without_override() {
        let ents = Entitlements::resolve(Some(PlanTier::Solo), false);
        assert!(!ents.allows(Feature::AiAssist));

        let ents = Entitlements::resolve(Some(PlanTier::Practice), false);
        assert!(ents.allows(Feature::AiAssist));
    }

    #[test]
    fn test_absent_workspace_resolves_as_default_plan() {
        let absent = Entitlements::resolve(None, false);
        let solo = Entitlements::resolve(Some(PlanTier::Solo), false);
        assert_eq!(absent, solo);
    }

    #[test]
    fn test_locked_features_for_studio() {
        let ents = Entitlements::resolve(Some(PlanTier::Studio), false);
        let locked = ents.locked_features();
        assert_eq!(
            locked,
            vec![Feature::AiAssist, Feature::ClientPortal, Feature::Customization]
        );
    }
}
