//! Workspace domain models
//!
//! This module provides the core Workspace entity for multi-tenant
//! workspace management. Workspaces are the top-level tenant entities;
//! every tenant-scoped record in the system carries a workspace id.

use atelier_plans::PlanTier;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::roles::WorkspaceRole;

/// A workspace represents a tenant in the multi-tenant system.
///
/// Users can belong to multiple workspaces with different roles. Each
/// workspace has its own members, projects, client records, and
/// subscription plan. Workspaces are created at onboarding and never
/// hard-deleted; deactivation flips `is_active`.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use atelier_tenancy::Workspace;
///
/// let owner_id = Uuid::now_v7();
/// let workspace = Workspace::new("Meridian Interiors", owner_id);
/// assert_eq!(workspace.name, "Meridian Interiors");
/// assert!(workspace.is_active);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workspace {
    /// Unique identifier for the workspace
    pub id: Uuid,

    /// Human-readable name
    pub name: String,

    /// Subscription plan for feature gating and limits
    pub plan: PlanTier,

    /// Owner user ID (the user who created the workspace)
    pub owner_id: Uuid,

    /// Whether the workspace is active
    pub is_active: bool,

    /// When the workspace was created
    pub created_at: DateTime<Utc>,

    /// When the workspace was last updated
    pub updated_at: DateTime<Utc>,
}

impl Workspace {
    /// Creates a new workspace with the default plan.
    ///
    /// The workspace is created with:
    /// - A newly generated UUID v7 ID
    /// - The default Solo plan
    /// - Active status
    /// - Current timestamp for created_at and updated_at
    ///
    /// # Arguments
    ///
    /// * `name` - The workspace name
    /// * `owner_id` - The user ID who owns this workspace
    pub fn new(name: impl Into<String>, owner_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            plan: PlanTier::default(),
            owner_id,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Change the subscription plan.
    ///
    /// Used both by self-service plan changes and administrative
    /// overrides; the billing side-effects live with the caller.
    ///
    /// # Arguments
    ///
    /// * `plan` - The new plan
    pub fn change_plan(&mut self, plan: PlanTier) {
        self.plan = plan;
        self.updated_at = Utc::now();
    }

    /// Get the maximum number of members allowed under the current plan.
    ///
    /// # Returns
    ///
    /// Maximum number of members, with `u32::MAX` representing unbounded
    pub fn max_members(&self) -> u32 {
        self.plan.limits().members.unwrap_or(u32::MAX)
    }

    /// Get the maximum number of active projects allowed under the
    /// current plan.
    ///
    /// # Returns
    ///
    /// Maximum number of active projects, with `u32::MAX` representing
    /// unbounded
    pub fn max_active_projects(&self) -> u32 {
        self.plan.limits().active_projects.unwrap_or(u32::MAX)
    }

    /// Get the maximum number of client records allowed under the
    /// current plan.
    ///
    /// # Returns
    ///
    /// Maximum number of client records, with `u32::MAX` representing
    /// unbounded
    pub fn max_clients(&self) -> u32 {
        self.plan.limits().clients.unwrap_or(u32::MAX)
    }
}

/// Summary of a workspace for membership listings.
///
/// This is the row shape the membership directory returns for each
/// workspace a principal belongs to: the workspace essentials plus the
/// principal's own role in it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceSummary {
    /// Workspace ID
    pub id: Uuid,

    /// Workspace name
    pub name: String,

    /// Subscription plan
    pub plan: PlanTier,

    /// The principal's role in this workspace
    pub user_role: WorkspaceRole,

    /// Number of members
    pub member_count: u32,

    /// Whether this is the principal's default workspace
    pub is_default: bool,
}
