//! Gated product features and upgrade classification
//!
//! This module defines the closed set of plan-gated features, the
//! per-plan flag table, and the classification of each feature into the
//! upgrade tier that unlocks it.

use serde::{Deserialize, Serialize};

use crate::tiers::PlanTier;

/// A plan-gated product feature.
///
/// The set is closed: gating a new capability means adding a variant
/// here, which forces the flag table and the upgrade classification to
/// cover it (both match exhaustively).
///
/// # Examples
///
/// ```
/// use atelier_plans::{Feature, PlanTier};
///
/// assert!(PlanTier::Practice.features().enabled(Feature::AiAssist));
/// assert!(!PlanTier::Solo.features().enabled(Feature::AiAssist));
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    /// Project schedule (Gantt) chart
    Scheduling,

    /// Budget and time reporting
    Reporting,

    /// Member invitations
    Invitations,

    /// AI-assisted drafting and summaries
    AiAssist,

    /// Client-facing portal
    ClientPortal,

    /// Branding and template customization
    Customization,
}

impl Feature {
    /// All features, in a fixed order.
    ///
    /// Used by totality checks and by UI that enumerates locked features.
    pub const ALL: [Feature; 6] = [
        Feature::Scheduling,
        Feature::Reporting,
        Feature::Invitations,
        Feature::AiAssist,
        Feature::ClientPortal,
        Feature::Customization,
    ];

    /// The upgrade tier that unlocks this feature.
    ///
    /// Every feature is classified into exactly one upgrade tier. This
    /// drives upsell messaging only; access decisions go through
    /// [`crate::Entitlements`].
    ///
    /// # Examples
    ///
    /// ```
    /// use atelier_plans::{Feature, UpgradeTier};
    ///
    /// assert_eq!(Feature::Reporting.required_plan(), UpgradeTier::Studio);
    /// assert_eq!(Feature::ClientPortal.required_plan(), UpgradeTier::Practice);
    /// ```
    pub fn required_plan(&self) -> UpgradeTier {
        match self {
            Feature::Scheduling | Feature::Reporting | Feature::Invitations => UpgradeTier::Studio,
            Feature::AiAssist | Feature::ClientPortal | Feature::Customization => {
                UpgradeTier::Practice
            }
        }
    }

    /// Parse a feature from its string representation.
    ///
    /// # Arguments
    ///
    /// * `s` - String to parse (case-insensitive)
    ///
    /// # Returns
    ///
    /// `Some(Feature)` if valid, `None` otherwise
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['-', '_'], "").as_str() {
            "scheduling" => Some(Feature::Scheduling),
            "reporting" => Some(Feature::Reporting),
            "invitations" => Some(Feature::Invitations),
            "aiassist" => Some(Feature::AiAssist),
            "clientportal" => Some(Feature::ClientPortal),
            "customization" => Some(Feature::Customization),
            _ => None,
        }
    }

    /// Get string representation of the feature.
    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::Scheduling => "scheduling",
            Feature::Reporting => "reporting",
            Feature::Invitations => "invitations",
            Feature::AiAssist => "ai_assist",
            Feature::ClientPortal => "client_portal",
            Feature::Customization => "customization",
        }
    }

    /// Get a human-readable display name for the feature.
    pub fn display_name(&self) -> &'static str {
        match self {
            Feature::Scheduling => "Schedule chart",
            Feature::Reporting => "Reporting",
            Feature::Invitations => "Member invitations",
            Feature::AiAssist => "AI assist",
            Feature::ClientPortal => "Client portal",
            Feature::Customization => "Customization",
        }
    }
}

/// The plan tier a locked feature asks the user to upgrade to.
///
/// Solo never appears here: a feature that every plan carries would not
/// be gated in the first place.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UpgradeTier {
    /// Unlocked by the Studio plan (and above)
    Studio,

    /// Unlocked by the Practice plan only
    Practice,
}

impl UpgradeTier {
    /// The concrete plan this upgrade tier corresponds to.
    pub fn plan(&self) -> PlanTier {
        match self {
            UpgradeTier::Studio => PlanTier::Studio,
            UpgradeTier::Practice => PlanTier::Practice,
        }
    }

    /// Get a human-readable display name for the upgrade tier.
    pub fn display_name(&self) -> &'static str {
        self.plan().display_name()
    }
}

/// Feature flags for a subscription plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanFeatures {
    /// Project schedule chart
    pub scheduling: bool,

    /// Budget and time reporting
    pub reporting: bool,

    /// Member invitations
    pub invitations: bool,

    /// AI-assisted drafting
    pub ai_assist: bool,

    /// Client-facing portal
    pub client_portal: bool,

    /// Branding customization
    pub customization: bool,
}

impl PlanFeatures {
    /// Flag record with every feature disabled.
    pub const NONE: PlanFeatures = PlanFeatures {
        scheduling: false,
        reporting: false,
        invitations: false,
        ai_assist: false,
        client_portal: false,
        customization: false,
    };

    /// Flag record with every feature enabled.
    pub const ALL: PlanFeatures = PlanFeatures {
        scheduling: true,
        reporting: true,
        invitations: true,
        ai_assist: true,
        client_portal: true,
        customization: true,
    };

    /// Check whether a feature is enabled in this flag record.
    pub fn enabled(&self, feature: Feature) -> bool {
        match feature {
            Feature::Scheduling => self.scheduling,
            Feature::Reporting => self.reporting,
            Feature::Invitations => self.invitations,
            Feature::AiAssist => self.ai_assist,
            Feature::ClientPortal => self.client_portal,
            Feature::Customization => self.customization,
        }
    }
}

impl PlanTier {
    /// Get the feature flags for this plan.
    ///
    /// The table is total: every plan has a defined flag record.
    ///
    /// # Examples
    ///
    /// ```
    /// use atelier_plans::{Feature, PlanTier};
    ///
    /// let features = PlanTier::Studio.features();
    /// assert!(features.enabled(Feature::Invitations));
    /// assert!(!features.enabled(Feature::ClientPortal));
    /// ```
    pub fn features(&self) -> PlanFeatures {
        match self {
            PlanTier::Solo => PlanFeatures::NONE,
            PlanTier::Studio => PlanFeatures {
                scheduling: true,
                reporting: true,
                invitations: true,
                ..PlanFeatures::NONE
            },
            PlanTier::Practice => PlanFeatures::ALL,
        }
    }
}
