//! Workspace role hierarchy
//!
//! This module defines the roles a user can hold within a workspace and
//! the capabilities associated with each role.

use serde::{Deserialize, Serialize};

/// User role within a workspace.
///
/// Roles are hierarchical, with each role inheriting the capabilities of
/// lower roles. The hierarchy is: Member < Admin < Owner
///
/// # Permission Model
///
/// - **Member**: Works on projects and client records
/// - **Admin**: Can manage members and workspace content
/// - **Owner**: Full workspace control including plan and billing
///
/// # Examples
///
/// ```
/// use atelier_tenancy::WorkspaceRole;
///
/// let role = WorkspaceRole::Admin;
/// assert!(role.can_manage_members());
/// assert!(!role.can_manage_billing());
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkspaceRole {
    /// Works on projects and client records
    Member = 1,

    /// Can manage members and workspace content
    Admin = 2,

    /// Full workspace control
    Owner = 3,
}

impl WorkspaceRole {
    /// Check if this role has admin privileges.
    ///
    /// # Returns
    ///
    /// `true` for Admin and Owner roles
    pub fn is_admin(&self) -> bool {
        *self >= WorkspaceRole::Admin
    }

    /// Check if this role can manage members.
    ///
    /// This includes inviting, removing, and changing member roles.
    ///
    /// # Returns
    ///
    /// `true` for Admin and Owner roles
    pub fn can_manage_members(&self) -> bool {
        *self >= WorkspaceRole::Admin
    }

    /// Check if this role can manage the plan and billing.
    ///
    /// # Returns
    ///
    /// `true` only for the Owner role
    pub fn can_manage_billing(&self) -> bool {
        *self >= WorkspaceRole::Owner
    }

    /// Parse role from string representation.
    ///
    /// # Arguments
    ///
    /// * `s` - String to parse (case-insensitive)
    ///
    /// # Returns
    ///
    /// `Some(WorkspaceRole)` if valid, `None` otherwise
    ///
    /// # Examples
    ///
    /// ```
    /// use atelier_tenancy::WorkspaceRole;
    ///
    /// assert_eq!(WorkspaceRole::parse("owner"), Some(WorkspaceRole::Owner));
    /// assert_eq!(WorkspaceRole::parse("MEMBER"), Some(WorkspaceRole::Member));
    /// assert_eq!(WorkspaceRole::parse("invalid"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "member" => Some(Self::Member),
            "admin" => Some(Self::Admin),
            "owner" => Some(Self::Owner),
            _ => None,
        }
    }

    /// Get string representation of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Member => "member",
            Self::Admin => "admin",
            Self::Owner => "owner",
        }
    }

    /// Get a human-readable display name for the role.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Member => "Member",
            Self::Admin => "Admin",
            Self::Owner => "Owner",
        }
    }
}

impl Default for WorkspaceRole {
    fn default() -> Self {
        Self::Member
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_hierarchy() {
        assert!(WorkspaceRole::Owner > WorkspaceRole::Admin);
        assert!(WorkspaceRole::Admin > WorkspaceRole::Member);
    }

    #[test]
    fn test_role_capabilities() {
        assert!(!WorkspaceRole::Member.can_manage_members());
        assert!(WorkspaceRole::Admin.can_manage_members());
        assert!(!WorkspaceRole::Admin.can_manage_billing());
        assert!(WorkspaceRole::Owner.can_manage_billing());
    }

    #[test]
    fn test_role_parse() {
        assert_eq!(WorkspaceRole::parse("admin"), Some(WorkspaceRole::Admin));
        assert_eq!(WorkspaceRole::parse("OWNER"), Some(WorkspaceRole::Owner));
        assert_eq!(WorkspaceRole::parse("invalid"), None);
    }
}
