//! Membership domain models
//!
//! This module provides the membership entity that links users to
//! workspaces. A membership defines a user's role within a workspace; a
//! user with zero memberships is in the pending-onboarding state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::roles::WorkspaceRole;

/// Workspace membership linking a user to a workspace.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use atelier_tenancy::{Membership, WorkspaceRole};
///
/// let workspace_id = Uuid::now_v7();
/// let user_id = Uuid::now_v7();
/// let membership = Membership::new(workspace_id, user_id, WorkspaceRole::Member);
/// assert!(membership.is_active);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Membership {
    /// Unique membership ID
    pub id: Uuid,

    /// Workspace ID
    pub workspace_id: Uuid,

    /// User ID
    pub user_id: Uuid,

    /// Role within the workspace
    pub role: WorkspaceRole,

    /// When the user joined
    pub joined_at: DateTime<Utc>,

    /// Who invited this user (if applicable)
    pub invited_by: Option<Uuid>,

    /// Whether the membership is active
    pub is_active: bool,
}

impl Membership {
    /// Creates a new workspace membership.
    ///
    /// The membership is created with:
    /// - A newly generated UUID v7 ID
    /// - Active status
    /// - Current timestamp for joined_at
    ///
    /// # Arguments
    ///
    /// * `workspace_id` - The workspace ID
    /// * `user_id` - The user ID
    /// * `role` - The user's role in the workspace
    pub fn new(workspace_id: Uuid, user_id: Uuid, role: WorkspaceRole) -> Self {
        Self {
            id: Uuid::now_v7(),
            workspace_id,
            user_id,
            role,
            joined_at: Utc::now(),
            invited_by: None,
            is_active: true,
        }
    }

    /// Set who invited this user.
    ///
    /// # Arguments
    ///
    /// * `inviter_id` - The user ID of who invited this user
    pub fn with_inviter(mut self, inviter_id: Uuid) -> Self {
        self.invited_by = Some(inviter_id);
        self
    }

    /// Change the member's role.
    ///
    /// # Arguments
    ///
    /// * `role` - The new role
    pub fn set_role(&mut self, role: WorkspaceRole) {
        self.role = role;
    }

    /// Deactivate the membership without deleting the row.
    pub fn deactivate(&mut self) {
        self.is_active = false;
    }
}
