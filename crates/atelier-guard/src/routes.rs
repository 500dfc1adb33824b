//! Route exemption policy
//!
//! Two small path allow-lists feed the guard state machine: bootstrap
//! paths (where a principal with no workspace is sent to create one, so
//! the onboarding redirect must not loop) and payment-exempt paths
//! (where a workspace with a lapsed subscription can still reach billing
//! recovery and account surfaces).

/// Path exemptions consulted by the access guard.
///
/// Matching is exact or by path-segment prefix: the entry `/billing`
/// matches `/billing` and `/billing/update-card`, but not
/// `/billingology`.
///
/// # Examples
///
/// ```
/// use atelier_guard::RoutePolicy;
///
/// let policy = RoutePolicy::default();
/// assert!(policy.is_bootstrap("/onboarding"));
/// assert!(policy.is_payment_exempt("/billing/update-card"));
/// assert!(!policy.is_payment_exempt("/projects"));
/// ```
#[derive(Debug, Clone)]
pub struct RoutePolicy {
    /// Paths reachable with zero workspace memberships
    bootstrap: Vec<String>,

    /// Paths reachable with an inactive subscription
    payment_exempt: Vec<String>,
}

impl RoutePolicy {
    /// Create an empty policy with no exemptions.
    pub fn new() -> Self {
        Self {
            bootstrap: Vec::new(),
            payment_exempt: Vec::new(),
        }
    }

    /// Add a bootstrap path.
    pub fn with_bootstrap_path(mut self, path: impl Into<String>) -> Self {
        self.bootstrap.push(path.into());
        self
    }

    /// Add a payment-exempt path.
    pub fn with_payment_exempt_path(mut self, path: impl Into<String>) -> Self {
        self.payment_exempt.push(path.into());
        self
    }

    /// Check whether a path is reachable with zero memberships.
    pub fn is_bootstrap(&self, path: &str) -> bool {
        Self::matches(&self.bootstrap, path)
    }

    /// Check whether a path is reachable with an inactive subscription.
    pub fn is_payment_exempt(&self, path: &str) -> bool {
        Self::matches(&self.payment_exempt, path)
    }

    fn matches(entries: &[String], path: &str) -> bool {
        entries
            .iter()
            .any(|entry| path == entry || path.starts_with(&format!("{entry}/")))
    }
}

impl Default for RoutePolicy {
    /// The platform's standard exemptions.
    fn default() -> Self {
        Self::new()
            .with_bootstrap_path("/onboarding")
            .with_bootstrap_path("/workspaces/new")
            .with_payment_exempt_path("/billing")
            .with_payment_exempt_path("/account")
            .with_payment_exempt_path("/onboarding")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_and_prefix_matching() {
        let policy = RoutePolicy::default();

        assert!(policy.is_payment_exempt("/billing"));
        assert!(policy.is_payment_exempt("/billing/update-card"));
        assert!(!policy.is_payment_exempt("/billingology"));
        assert!(!policy.is_payment_exempt("/projects"));
    }

    #[test]
    fn test_custom_policy() {
        let policy = RoutePolicy::new().with_bootstrap_path("/welcome");

        assert!(policy.is_bootstrap("/welcome"));
        assert!(!policy.is_bootstrap("/onboarding"));
        assert!(!policy.is_payment_exempt("/billing"));
    }
}
