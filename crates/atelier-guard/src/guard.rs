//! Access guard state machine
//!
//! Guards wrap protected views and are evaluated on every navigation.
//! The access guard decides between rendering and a redirect along a
//! fixed precedence: loading, then authentication, then onboarding,
//! then subscription. The feature guard short-circuits to a locked view
//! rather than a redirect; the admin guard gates the operator console.
//!
//! The identity and subscription lookups behind a decision are
//! independent and are issued concurrently with all-must-complete,
//! first-error-wins semantics. Dropping an in-flight evaluation (the
//! session navigated away) discards every partial result; no state is
//! written from guard evaluation.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use atelier_plans::{Entitlements, Feature, UpgradeTier};
use atelier_tenancy::TenantContext;

use crate::admin::PlatformRoles;
use crate::billing::SubscriptionLookup;
use crate::error::GuardResult;
use crate::identity::IdentityProvider;
use crate::routes::RoutePolicy;

/// Outcome of an access guard evaluation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AccessDecision {
    /// A dependency is still loading; render a neutral placeholder
    Loading,

    /// Render the protected view
    Allowed,

    /// No authenticated principal; go to sign-in
    RedirectAuth,

    /// Principal has no workspace; go create one
    RedirectOnboarding,

    /// Active workspace's subscription is not active; go to billing
    RedirectPendingPayment,
}

/// Outcome of a feature guard evaluation.
///
/// A denial renders an upsell panel in place; it is not a navigation
/// redirect.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "decision")]
pub enum FeatureDecision {
    /// Render the feature
    Allowed,

    /// Render the locked-state view
    Locked {
        /// The denied feature
        feature: Feature,
        /// The plan that would unlock it
        required_plan: UpgradeTier,
    },
}

/// Outcome of an admin guard evaluation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AdminDecision {
    /// Render the operator console
    Allowed,

    /// Not platform staff; go to the admin sign-in
    RedirectAdminLogin,
}

/// Navigation guard for protected views.
///
/// Holds the collaborator handles and the route policy; evaluation
/// itself is stateless, so one guard instance serves every view.
pub struct AccessGuard {
    identity: Arc<dyn IdentityProvider>,
    subscriptions: Arc<dyn SubscriptionLookup>,
    policy: RoutePolicy,
}

impl AccessGuard {
    /// Create an access guard.
    ///
    /// # Arguments
    ///
    /// * `identity` - Identity provider boundary
    /// * `subscriptions` - Subscription status boundary
    /// * `policy` - Path exemptions
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        subscriptions: Arc<dyn SubscriptionLookup>,
        policy: RoutePolicy,
    ) -> Self {
        Self {
            identity,
            subscriptions,
            policy,
        }
    }

    /// Evaluate the guard for a navigation.
    ///
    /// Precedence, applied strictly in order after all lookups complete:
    /// 1. Context loading: [`AccessDecision::Loading`]. A later-stage
    ///    redirect never fires while an earlier stage is undecided.
    /// 2. No principal: [`AccessDecision::RedirectAuth`]
    /// 3. No memberships on a non-bootstrap path:
    ///    [`AccessDecision::RedirectOnboarding`]
    /// 4. Inactive subscription on a non-exempt path:
    ///    [`AccessDecision::RedirectPendingPayment`]
    /// 5. Otherwise: [`AccessDecision::Allowed`]
    ///
    /// # Arguments
    ///
    /// * `ctx` - The principal's tenant context
    /// * `path` - The requested navigation path
    ///
    /// # Errors
    ///
    /// Transport failures from either lookup; the caller surfaces them
    /// as a transient notice and re-evaluates, never redirects.
    pub async fn evaluate(&self, ctx: &TenantContext, path: &str) -> GuardResult<AccessDecision> {
        if ctx.is_loading() {
            return Ok(AccessDecision::Loading);
        }

        let subscription = async {
            match ctx.active_workspace() {
                Some(workspace_id) => self.subscriptions.status(workspace_id).await,
                None => Ok(None),
            }
        };
        let (principal, status) =
            tokio::try_join!(self.identity.current_principal(), subscription)?;

        let decision = if principal.is_none() {
            AccessDecision::RedirectAuth
        } else if !ctx.has_any_workspace() && !self.policy.is_bootstrap(path) {
            AccessDecision::RedirectOnboarding
        } else if ctx.active_workspace().is_some()
            && !status.is_some_and(|s| s.is_active())
            && !self.policy.is_payment_exempt(path)
        {
            AccessDecision::RedirectPendingPayment
        } else {
            AccessDecision::Allowed
        };

        debug!(path, ?decision, "access guard evaluated");
        Ok(decision)
    }
}

/// Guard for plan-gated capabilities inside an allowed view.
pub struct FeatureGuard {
    identity: Arc<dyn IdentityProvider>,
    platform_roles: Arc<dyn PlatformRoles>,
}

impl FeatureGuard {
    /// Create a feature guard.
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        platform_roles: Arc<dyn PlatformRoles>,
    ) -> Self {
        Self {
            identity,
            platform_roles,
        }
    }

    /// Evaluate whether a feature is usable in the active workspace.
    ///
    /// Platform administrators are entitled to everything; otherwise the
    /// active plan's flags decide, defaulting to the lowest plan when no
    /// workspace is active.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The principal's tenant context
    /// * `feature` - The capability being rendered
    pub async fn evaluate(
        &self,
        ctx: &TenantContext,
        feature: Feature,
    ) -> GuardResult<FeatureDecision> {
        let platform_admin = match self.identity.current_principal().await? {
            Some(principal_id) => self
                .platform_roles
                .platform_role(principal_id)
                .await?
                .is_some_and(|r| r.is_admin()),
            None => false,
        };

        let plan = ctx.active_summary().map(|w| w.plan);
        let entitlements = Entitlements::resolve(plan, platform_admin);

        let decision = if entitlements.allows(feature) {
            FeatureDecision::Allowed
        } else {
            FeatureDecision::Locked {
                feature,
                required_plan: feature.required_plan(),
            }
        };
        debug!(feature = feature.as_str(), ?decision, "feature guard evaluated");
        Ok(decision)
    }
}

/// Guard for the operator console.
///
/// Platform staff only; workspace membership is irrelevant on this axis.
pub struct AdminGuard {
    identity: Arc<dyn IdentityProvider>,
    platform_roles: Arc<dyn PlatformRoles>,
}

impl AdminGuard {
    /// Create an admin guard.
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        platform_roles: Arc<dyn PlatformRoles>,
    ) -> Self {
        Self {
            identity,
            platform_roles,
        }
    }

    /// Evaluate whether the current principal may enter the operator
    /// console.
    pub async fn evaluate(&self) -> GuardResult<AdminDecision> {
        let Some(principal_id) = self.identity.current_principal().await? else {
            return Ok(AdminDecision::RedirectAdminLogin);
        };

        let role = self.platform_roles.platform_role(principal_id).await?;
        let decision = if role.is_some_and(|r| r.is_admin()) {
            AdminDecision::Allowed
        } else {
            AdminDecision::RedirectAdminLogin
        };
        debug!(%principal_id, ?decision, "admin guard evaluated");
        Ok(decision)
    }
}
