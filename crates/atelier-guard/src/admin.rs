//! Platform role boundary
//!
//! Platform roles are a cross-tenant authorization axis, independent of
//! and senior to workspace membership. The check is an out-of-band rpc
//! against the operator directory; workspace data never enters into it.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::GuardResult;

/// Cross-tenant operational role held by platform staff.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PlatformRole {
    /// Read-oriented support staff
    Support,

    /// Full platform administrator
    Admin,
}

impl PlatformRole {
    /// Check if this role carries the administrator override.
    ///
    /// Only `Admin` bypasses plan gating and passes the admin guard.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Parse role from string representation.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "support" => Some(Self::Support),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    /// Get string representation of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Support => "support",
            Self::Admin => "admin",
        }
    }
}

/// The platform role lookup boundary.
#[async_trait]
pub trait PlatformRoles: Send + Sync {
    /// The principal's platform role, or `None` for ordinary users.
    async fn platform_role(&self, principal_id: Uuid) -> GuardResult<Option<PlatformRole>>;
}

/// In-memory platform role directory.
///
/// Suitable for single-process applications and testing.
#[derive(Debug, Default)]
pub struct StaticPlatformRoles {
    roles: RwLock<HashMap<Uuid, PlatformRole>>,
}

impl StaticPlatformRoles {
    /// Create an empty directory: nobody is platform staff.
    pub fn new() -> Self {
        Self::default()
    }

    /// Grant a platform role to a principal.
    pub fn grant(&self, principal_id: Uuid, role: PlatformRole) {
        self.roles
            .write()
            .expect("roles lock poisoned")
            .insert(principal_id, role);
    }
}

#[async_trait]
impl PlatformRoles for StaticPlatformRoles {
    async fn platform_role(&self, principal_id: Uuid) -> GuardResult<Option<PlatformRole>> {
        Ok(self
            .roles
            .read()
            .expect("roles lock poisoned")
            .get(&principal_id)
            .copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_admin_overrides() {
        assert!(PlatformRole::Admin.is_admin());
        assert!(!PlatformRole::Support.is_admin());
    }

    #[tokio::test]
    async fn test_role_lookup() {
        let roles = StaticPlatformRoles::new();
        let staff_id = Uuid::now_v7();
        let user_id = Uuid::now_v7();

        roles.grant(staff_id, PlatformRole::Admin);

        assert_eq!(
            roles.platform_role(staff_id).await.unwrap(),
            Some(PlatformRole::Admin)
        );
        assert!(roles.platform_role(user_id).await.unwrap().is_none());
    }
}
