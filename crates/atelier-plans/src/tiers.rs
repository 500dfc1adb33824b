//! Subscription plan tiers and usage limits
//!
//! This module defines the subscription plans available on the platform
//! and the usage limits associated with each plan.

use serde::{Deserialize, Serialize};

/// Subscription plan for a workspace.
///
/// Plans determine feature access and usage limits.
///
/// # Plan Hierarchy
///
/// - **Solo**: Single designer, entry plan
/// - **Studio**: Small firms, unlocks collaboration features
/// - **Practice**: Full-featured plan for established practices
///
/// # Examples
///
/// ```
/// use atelier_plans::PlanTier;
///
/// let plan = PlanTier::Studio;
/// let limits = plan.limits();
/// assert_eq!(limits.members, Some(15));
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PlanTier {
    /// Entry plan for a single designer
    Solo,

    /// Small-firm plan with collaboration features
    Studio,

    /// Full-featured plan for established practices
    Practice,
}

impl PlanTier {
    /// Get the usage limits for this plan.
    ///
    /// The table is total: every plan has a defined limits record.
    ///
    /// # Returns
    ///
    /// A `PlanLimits` struct containing the limits for this plan
    ///
    /// # Examples
    ///
    /// ```
    /// use atelier_plans::PlanTier;
    ///
    /// let limits = PlanTier::Solo.limits();
    /// assert_eq!(limits.workspaces, Some(1));
    /// assert_eq!(limits.active_projects, Some(5));
    /// ```
    pub fn limits(&self) -> PlanLimits {
        match self {
            PlanTier::Solo => PlanLimits {
                workspaces: Some(1),
                members: Some(3),
                active_projects: Some(5),
                clients: Some(15),
            },
            PlanTier::Studio => PlanLimits {
                workspaces: Some(3),
                members: Some(15),
                active_projects: Some(40),
                clients: Some(200),
            },
            PlanTier::Practice => PlanLimits {
                workspaces: None,
                members: None,
                active_projects: None,
                clients: None,
            },
        }
    }

    /// Parse a plan from its string representation.
    ///
    /// # Arguments
    ///
    /// * `s` - String to parse (case-insensitive)
    ///
    /// # Returns
    ///
    /// `Some(PlanTier)` if valid, `None` otherwise
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['-', '_'], "").as_str() {
            "solo" => Some(PlanTier::Solo),
            "studio" => Some(PlanTier::Studio),
            "practice" => Some(PlanTier::Practice),
            _ => None,
        }
    }

    /// Get string representation of the plan.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanTier::Solo => "solo",
            PlanTier::Studio => "studio",
            PlanTier::Practice => "practice",
        }
    }

    /// Get a human-readable display name for the plan.
    pub fn display_name(&self) -> &'static str {
        match self {
            PlanTier::Solo => "Solo",
            PlanTier::Studio => "Studio",
            PlanTier::Practice => "Practice",
        }
    }

    /// Check if this is a paid plan.
    pub fn is_paid(&self) -> bool {
        !matches!(self, PlanTier::Solo)
    }
}

impl Default for PlanTier {
    fn default() -> Self {
        PlanTier::Solo
    }
}

/// Usage limits for a subscription plan.
///
/// Values of `None` indicate unbounded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanLimits {
    /// Maximum number of workspaces a principal may own (None = unbounded)
    pub workspaces: Option<u32>,

    /// Maximum number of members per workspace (None = unbounded)
    pub members: Option<u32>,

    /// Maximum number of active projects per workspace (None = unbounded)
    pub active_projects: Option<u32>,

    /// Maximum number of client records per workspace (None = unbounded)
    pub clients: Option<u32>,
}

impl PlanLimits {
    /// Check whether `current` owned workspaces leave room for one more.
    ///
    /// # Arguments
    ///
    /// * `current` - Number of workspaces the principal currently owns
    ///
    /// # Returns
    ///
    /// `true` if another workspace may be created under this plan
    pub fn allows_another_workspace(&self, current: usize) -> bool {
        match self.workspaces {
            Some(max) => current < max as usize,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_limits() {
        let solo_limits = PlanTier::Solo.limits();
        assert_eq!(solo_limits.workspaces, Some(1));
        assert_eq!(solo_limits.clients, Some(15));

        let practice_limits = PlanTier::Practice.limits();
        assert!(practice_limits.members.is_none()); // Unbounded
        assert!(practice_limits.active_projects.is_none());
    }

    #[test]
    fn test_plan_parsing() {
        assert_eq!(PlanTier::parse("solo"), Some(PlanTier::Solo));
        assert_eq!(PlanTier::parse("STUDIO"), Some(PlanTier::Studio));
        assert_eq!(PlanTier::parse("practice"), Some(PlanTier::Practice));
        assert_eq!(PlanTier::parse("invalid"), None);
    }

    #[test]
    fn test_plan_hierarchy() {
        assert!(PlanTier::Studio > PlanTier::Solo);
        assert!(PlanTier::Practice > PlanTier::Studio);
    }

    #[test]
    fn test_default_plan() {
        assert_eq!(PlanTier::default(), PlanTier::Solo);
    }

    #[test]
    fn test_allows_another_workspace() {
        assert!(!PlanTier::Solo.limits().allows_another_workspace(1));
        assert!(PlanTier::Studio.limits().allows_another_workspace(2));
        assert!(!PlanTier::Studio.limits().allows_another_workspace(3));
        assert!(PlanTier::Practice.limits().allows_another_workspace(500));
    }
}
