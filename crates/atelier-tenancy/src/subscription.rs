//! Subscription state per workspace
//!
//! This module models the billing subscription attached to a workspace.
//! The platform never talks to the payment provider directly; provider
//! identifiers are opaque pass-through strings and only the status string
//! is interpreted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a workspace subscription.
///
/// Mirrors the payment provider's status vocabulary. Only `Active` and
/// `Trialing` satisfy "has active subscription"; everything else,
/// including the absence of a subscription row, does not.
///
/// # Examples
///
/// ```
/// use atelier_tenancy::SubscriptionStatus;
///
/// assert!(SubscriptionStatus::Trialing.is_active());
/// assert!(!SubscriptionStatus::PastDue.is_active());
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    /// Checkout started but not completed
    Incomplete,

    /// Trial period in progress
    Trialing,

    /// Paid and in good standing
    Active,

    /// Payment failed, awaiting recovery
    PastDue,

    /// Subscription ended
    Canceled,
}

impl SubscriptionStatus {
    /// Check whether this status grants access to the workspace.
    ///
    /// # Returns
    ///
    /// `true` only for `Active` and `Trialing`
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active | Self::Trialing)
    }

    /// Parse status from string representation.
    ///
    /// # Arguments
    ///
    /// * `s` - String to parse (case-insensitive)
    ///
    /// # Returns
    ///
    /// `Some(SubscriptionStatus)` if valid, `None` otherwise
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "incomplete" => Some(Self::Incomplete),
            "trialing" => Some(Self::Trialing),
            "active" => Some(Self::Active),
            "past_due" => Some(Self::PastDue),
            "canceled" | "cancelled" => Some(Self::Canceled),
            _ => None,
        }
    }

    /// Get string representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Incomplete => "incomplete",
            Self::Trialing => "trialing",
            Self::Active => "active",
            Self::PastDue => "past_due",
            Self::Canceled => "canceled",
        }
    }
}

/// Billing subscription attached to a workspace (1:1).
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use atelier_tenancy::{Subscription, SubscriptionStatus};
///
/// let workspace_id = Uuid::now_v7();
/// let sub = Subscription::new(workspace_id, SubscriptionStatus::Trialing);
/// assert!(sub.status.is_active());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    /// Unique subscription ID
    pub id: Uuid,

    /// Workspace this subscription belongs to
    pub workspace_id: Uuid,

    /// Current status
    pub status: SubscriptionStatus,

    /// Whether the subscription ends at the current period boundary
    pub cancel_at_period_end: bool,

    /// Opaque payment-provider customer reference (pass-through only)
    pub customer_ref: Option<String>,

    /// Opaque payment-provider subscription reference (pass-through only)
    pub subscription_ref: Option<String>,

    /// End of the current billing period, if known
    pub current_period_end: Option<DateTime<Utc>>,

    /// When the subscription row was created
    pub created_at: DateTime<Utc>,

    /// When the subscription row was last updated
    pub updated_at: DateTime<Utc>,
}

impl Subscription {
    /// Creates a new subscription row.
    ///
    /// # Arguments
    ///
    /// * `workspace_id` - The workspace this subscription belongs to
    /// * `status` - The initial status
    pub fn new(workspace_id: Uuid, status: SubscriptionStatus) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            workspace_id,
            status,
            cancel_at_period_end: false,
            customer_ref: None,
            subscription_ref: None,
            current_period_end: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the opaque payment-provider references.
    ///
    /// # Arguments
    ///
    /// * `customer_ref` - Provider customer identifier
    /// * `subscription_ref` - Provider subscription identifier
    pub fn with_provider_refs(
        mut self,
        customer_ref: impl Into<String>,
        subscription_ref: impl Into<String>,
    ) -> Self {
        self.customer_ref = Some(customer_ref.into());
        self.subscription_ref = Some(subscription_ref.into());
        self
    }

    /// Apply a status update reported by the payment provider.
    ///
    /// # Arguments
    ///
    /// * `status` - The new status
    pub fn set_status(&mut self, status: SubscriptionStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    /// Mark the subscription to end at the current period boundary.
    pub fn schedule_cancellation(&mut self) {
        self.cancel_at_period_end = true;
        self.updated_at = Utc::now();
    }
}

/// Check whether an optional subscription row satisfies "has active
/// subscription".
///
/// A missing row never does.
///
/// # Examples
///
/// ```
/// use atelier_tenancy::has_active_subscription;
///
/// assert!(!has_active_subscription(None));
/// ```
pub fn has_active_subscription(subscription: Option<&Subscription>) -> bool {
    subscription.is_some_and(|s| s.status.is_active())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_is_active() {
        assert!(SubscriptionStatus::Active.is_active());
        assert!(SubscriptionStatus::Trialing.is_active());
        assert!(!SubscriptionStatus::Incomplete.is_active());
        assert!(!SubscriptionStatus::PastDue.is_active());
        assert!(!SubscriptionStatus::Canceled.is_active());
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(
            SubscriptionStatus::parse("past_due"),
            Some(SubscriptionStatus::PastDue)
        );
        assert_eq!(
            SubscriptionStatus::parse("cancelled"),
            Some(SubscriptionStatus::Canceled)
        );
        assert_eq!(SubscriptionStatus::parse("invalid"), None);
    }

    #[test]
    fn test_missing_row_is_not_active() {
        assert!(!has_active_subscription(None));

        let workspace_id = Uuid::now_v7();
        let sub = Subscription::new(workspace_id, SubscriptionStatus::PastDue);
        assert!(!has_active_subscription(Some(&sub)));

        let sub = Subscription::new(workspace_id, SubscriptionStatus::Active);
        assert!(has_active_subscription(Some(&sub)));
    }

    #[test]
    fn test_schedule_cancellation() {
        let workspace_id = Uuid::now_v7();
        let mut sub = Subscription::new(workspace_id, SubscriptionStatus::Active);
        assert!(!sub.cancel_at_period_end);

        sub.schedule_cancellation();
        assert!(sub.cancel_at_period_end);
        // Cancellation at period end does not revoke access by itself
        assert!(sub.status.is_active());
    }

    #[test]
    fn test_provider_refs_are_opaque() {
        let workspace_id = Uuid::now_v7();
        let sub = Subscription::new(workspace_id, SubscriptionStatus::Active)
            .with_provider_refs("cus_9f2k", "sub_81aa");

        assert_eq!(sub.customer_ref.as_deref(), Some("cus_9f2k"));
        assert_eq!(sub.subscription_ref.as_deref(), Some("sub_81aa"));
    }
}
