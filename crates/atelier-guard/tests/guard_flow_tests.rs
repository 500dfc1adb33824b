//! End-to-end tests for the navigation guard flow.
//!
//! These tests wire the guards to memory-backed boundary implementations
//! and verify the full decision precedence the way the applications
//! exercise it: sign-in state, onboarding, subscription recovery,
//! feature locking, and the operator console gate.
//!
//! Test flows:
//! 1. Unauthenticated navigation → RedirectAuth
//! 2. No workspace → RedirectOnboarding (bootstrap paths exempt)
//! 3. Lapsed subscription → RedirectPendingPayment (billing paths exempt)
//! 4. Feature gating by plan, with the platform-admin override
//! 5. Operator console gate
//! 6. Transport failure surfaces as an error, never a redirect

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use atelier_guard::{
    AccessDecision, AccessGuard, AdminDecision, AdminGuard, FeatureDecision, FeatureGuard,
    GuardError, GuardResult, PlatformRole, RoutePolicy, StaticIdentity, StaticPlatformRoles,
    StaticSubscriptions, SubscriptionLookup,
};
use atelier_plans::{Feature, PlanTier, UpgradeTier};
use atelier_tenancy::{
    MemoryWorkspaceStore, StaticDirectory, SubscriptionStatus, TenantContext, WorkspaceRole,
    WorkspaceSummary,
};

/// Test fixture wiring every guard boundary to a memory-backed
/// implementation.
struct TestFixture {
    /// Identity provider.
    identity: Arc<StaticIdentity>,
    /// Membership directory.
    directory: Arc<StaticDirectory>,
    /// Subscription status lookup.
    subscriptions: Arc<StaticSubscriptions>,
    /// Platform role directory.
    platform_roles: Arc<StaticPlatformRoles>,
}

impl TestFixture {
    /// Create a fixture with nobody signed in and no workspaces.
    fn new() -> Self {
        Self {
            identity: Arc::new(StaticIdentity::signed_out()),
            directory: Arc::new(StaticDirectory::new()),
            subscriptions: Arc::new(StaticSubscriptions::new()),
            platform_roles: Arc::new(StaticPlatformRoles::new()),
        }
    }

    /// Register a workspace membership for a principal and optionally a
    /// subscription status for the workspace.
    fn member_of(
        &self,
        principal_id: Uuid,
        plan: PlanTier,
        status: Option<SubscriptionStatus>,
    ) -> Uuid {
        let workspace_id = Uuid::now_v7();
        self.directory.set_workspaces(
            principal_id,
            vec![WorkspaceSummary {
                id: workspace_id,
                name: "Meridian Interiors".to_string(),
                plan,
                user_role: WorkspaceRole::Owner,
                member_count: 1,
                is_default: true,
            }],
        );
        if let Some(status) = status {
            self.subscriptions.set_status(workspace_id, status);
        }
        workspace_id
    }

    /// Build a loaded tenant context for a principal.
    async fn context_for(&self, principal_id: Uuid) -> TenantContext {
        let mut ctx = TenantContext::new(
            principal_id,
            self.directory.clone(),
            Arc::new(MemoryWorkspaceStore::new()),
        );
        ctx.load().await.expect("context load");
        ctx
    }

    /// Access guard over this fixture's boundaries.
    fn access_guard(&self) -> AccessGuard {
        AccessGuard::new(
            self.identity.clone(),
            self.subscriptions.clone(),
            RoutePolicy::default(),
        )
    }

    /// Feature guard over this fixture's boundaries.
    fn feature_guard(&self) -> FeatureGuard {
        FeatureGuard::new(self.identity.clone(), self.platform_roles.clone())
    }

    /// Admin guard over this fixture's boundaries.
    fn admin_guard(&self) -> AdminGuard {
        AdminGuard::new(self.identity.clone(), self.platform_roles.clone())
    }
}

// =============================================================================
// Flow 1: authentication precedence
// =============================================================================

#[tokio::test]
async fn test_signed_out_redirects_to_auth() {
    let fixture = TestFixture::new();
    let principal_id = Uuid::now_v7();
    let ctx = fixture.context_for(principal_id).await;

    let decision = fixture
        .access_guard()
        .evaluate(&ctx, "/projects")
        .await
        .unwrap();
    assert_eq!(decision, AccessDecision::RedirectAuth);
}

#[tokio::test]
async fn test_loading_context_renders_placeholder() {
    let fixture = TestFixture::new();
    let principal_id = Uuid::now_v7();
    fixture.identity.sign_in(principal_id);

    // Context constructed but never loaded
    let ctx = TenantContext::new(
        principal_id,
        fixture.directory.clone(),
        Arc::new(MemoryWorkspaceStore::new()),
    );

    let decision = fixture
        .access_guard()
        .evaluate(&ctx, "/projects")
        .await
        .unwrap();
    assert_eq!(decision, AccessDecision::Loading);
}

// =============================================================================
// Flow 2: onboarding precedence
// =============================================================================

#[tokio::test]
async fn test_zero_workspaces_redirects_to_onboarding() {
    let fixture = TestFixture::new();
    let principal_id = Uuid::now_v7();
    fixture.identity.sign_in(principal_id);
    let ctx = fixture.context_for(principal_id).await;

    // The onboarding check precedes the subscription check: with no
    // workspace at all this must never read as a payment problem.
    let decision = fixture
        .access_guard()
        .evaluate(&ctx, "/projects")
        .await
        .unwrap();
    assert_eq!(decision, AccessDecision::RedirectOnboarding);
}

#[tokio::test]
async fn test_bootstrap_path_is_reachable_without_workspace() {
    let fixture = TestFixture::new();
    let principal_id = Uuid::now_v7();
    fixture.identity.sign_in(principal_id);
    let ctx = fixture.context_for(principal_id).await;

    let decision = fixture
        .access_guard()
        .evaluate(&ctx, "/onboarding")
        .await
        .unwrap();
    assert_eq!(decision, AccessDecision::Allowed);
}

// =============================================================================
// Flow 3: subscription precedence
// =============================================================================

#[tokio::test]
async fn test_past_due_redirects_to_pending_payment() {
    let fixture = TestFixture::new();
    let principal_id = Uuid::now_v7();
    fixture.identity.sign_in(principal_id);
    fixture.member_of(principal_id, PlanTier::Studio, Some(SubscriptionStatus::PastDue));
    let ctx = fixture.context_for(principal_id).await;

    let decision = fixture
        .access_guard()
        .evaluate(&ctx, "/projects")
        .await
        .unwrap();
    assert_eq!(decision, AccessDecision::RedirectPendingPayment);
}

#[tokio::test]
async fn test_payment_exempt_path_stays_reachable() {
    let fixture = TestFixture::new();
    let principal_id = Uuid::now_v7();
    fixture.identity.sign_in(principal_id);
    fixture.member_of(principal_id, PlanTier::Studio, Some(SubscriptionStatus::PastDue));
    let ctx = fixture.context_for(principal_id).await;

    let decision = fixture
        .access_guard()
        .evaluate(&ctx, "/billing/update-card")
        .await
        .unwrap();
    assert_eq!(decision, AccessDecision::Allowed);
}

#[tokio::test]
async fn test_missing_subscription_row_is_not_active() {
    let fixture = TestFixture::new();
    let principal_id = Uuid::now_v7();
    fixture.identity.sign_in(principal_id);
    fixture.member_of(principal_id, PlanTier::Solo, None);
    let ctx = fixture.context_for(principal_id).await;

    let decision = fixture
        .access_guard()
        .evaluate(&ctx, "/projects")
        .await
        .unwrap();
    assert_eq!(decision, AccessDecision::RedirectPendingPayment);
}

#[tokio::test]
async fn test_trialing_subscription_allows() {
    let fixture = TestFixture::new();
    let principal_id = Uuid::now_v7();
    fixture.identity.sign_in(principal_id);
    fixture.member_of(principal_id, PlanTier::Studio, Some(SubscriptionStatus::Trialing));
    let ctx = fixture.context_for(principal_id).await;

    let decision = fixture
        .access_guard()
        .evaluate(&ctx, "/projects")
        .await
        .unwrap();
    assert_eq!(decision, AccessDecision::Allowed);
}

// =============================================================================
// Flow 4: feature gating
// =============================================================================

#[tokio::test]
async fn test_feature_locked_on_lower_plan() {
    let fixture = TestFixture::new();
    let principal_id = Uuid::now_v7();
    fixture.identity.sign_in(principal_id);
    fixture.member_of(principal_id, PlanTier::Solo, Some(SubscriptionStatus::Active));
    let ctx = fixture.context_for(principal_id).await;

    let decision = fixture
        .feature_guard()
        .evaluate(&ctx, Feature::AiAssist)
        .await
        .unwrap();
    assert_eq!(
        decision,
        FeatureDecision::Locked {
            feature: Feature::AiAssist,
            required_plan: UpgradeTier::Practice,
        }
    );
}

#[tokio::test]
async fn test_feature_allowed_on_top_plan() {
    let fixture = TestFixture::new();
    let principal_id = Uuid::now_v7();
    fixture.identity.sign_in(principal_id);
    fixture.member_of(principal_id, PlanTier::Practice, Some(SubscriptionStatus::Active));
    let ctx = fixture.context_for(principal_id).await;

    let decision = fixture
        .feature_guard()
        .evaluate(&ctx, Feature::AiAssist)
        .await
        .unwrap();
    assert_eq!(decision, FeatureDecision::Allowed);
}

#[tokio::test]
async fn test_platform_admin_bypasses_feature_gating() {
    let fixture = TestFixture::new();
    let principal_id = Uuid::now_v7();
    fixture.identity.sign_in(principal_id);
    fixture.platform_roles.grant(principal_id, PlatformRole::Admin);
    fixture.member_of(principal_id, PlanTier::Solo, Some(SubscriptionStatus::Active));
    let ctx = fixture.context_for(principal_id).await;

    for feature in Feature::ALL {
        let decision = fixture
            .feature_guard()
            .evaluate(&ctx, feature)
            .await
            .unwrap();
        assert_eq!(decision, FeatureDecision::Allowed);
    }
}

#[tokio::test]
async fn test_absent_workspace_gates_as_lowest_plan() {
    let fixture = TestFixture::new();
    let principal_id = Uuid::now_v7();
    fixture.identity.sign_in(principal_id);
    let ctx = fixture.context_for(principal_id).await;

    let decision = fixture
        .feature_guard()
        .evaluate(&ctx, Feature::Reporting)
        .await
        .unwrap();
    assert_eq!(
        decision,
        FeatureDecision::Locked {
            feature: Feature::Reporting,
            required_plan: UpgradeTier::Studio,
        }
    );
}

// =============================================================================
// Flow 5: operator console gate
// =============================================================================

#[tokio::test]
async fn test_admin_guard_requires_platform_admin() {
    let fixture = TestFixture::new();

    // Signed out
    let decision = fixture.admin_guard().evaluate().await.unwrap();
    assert_eq!(decision, AdminDecision::RedirectAdminLogin);

    // Ordinary principal
    let principal_id = Uuid::now_v7();
    fixture.identity.sign_in(principal_id);
    let decision = fixture.admin_guard().evaluate().await.unwrap();
    assert_eq!(decision, AdminDecision::RedirectAdminLogin);

    // Support staff do not pass the console gate
    fixture.platform_roles.grant(principal_id, PlatformRole::Support);
    let decision = fixture.admin_guard().evaluate().await.unwrap();
    assert_eq!(decision, AdminDecision::RedirectAdminLogin);

    // Platform admins do
    fixture.platform_roles.grant(principal_id, PlatformRole::Admin);
    let decision = fixture.admin_guard().evaluate().await.unwrap();
    assert_eq!(decision, AdminDecision::Allowed);
}

// =============================================================================
// Flow 6: transport failure handling
// =============================================================================

/// Subscription lookup that always fails.
struct FailingSubscriptions;

#[async_trait]
impl SubscriptionLookup for FailingSubscriptions {
    async fn status(&self, _workspace_id: Uuid) -> GuardResult<Option<SubscriptionStatus>> {
        Err(GuardError::Subscription("connection reset".into()))
    }
}

#[tokio::test]
async fn test_lookup_failure_is_an_error_not_a_redirect() {
    let fixture = TestFixture::new();
    let principal_id = Uuid::now_v7();
    fixture.identity.sign_in(principal_id);
    fixture.member_of(principal_id, PlanTier::Studio, Some(SubscriptionStatus::Active));
    let ctx = fixture.context_for(principal_id).await;

    let guard = AccessGuard::new(
        fixture.identity.clone(),
        Arc::new(FailingSubscriptions),
        RoutePolicy::default(),
    );

    let err = guard.evaluate(&ctx, "/projects").await.unwrap_err();
    assert!(matches!(err, GuardError::Subscription(_)));
}
