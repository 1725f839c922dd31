//! Account roles as reported by the platform backend.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when parsing an unknown role string.
#[derive(Debug, Error)]
#[error("invalid role: {0}")]
pub struct RoleParseError(pub String);

/// Role with different permission levels.
///
/// The backend serializes roles as kebab-case strings (`"super-admin"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    /// Regular platform account with no moderation rights.
    Basic,
    /// Moderation access to users, restaurants, reviews, and orders.
    Admin,
    /// Full access including admin-user management. Accounts with this role
    /// are protected subjects: they can never be mutated through the admin
    /// surfaces.
    SuperAdmin,
}

impl Role {
    /// Whether this role may manage admin accounts.
    #[must_use]
    pub const fn is_super_admin(self) -> bool {
        matches!(self, Self::SuperAdmin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Basic => write!(f, "basic"),
            Self::Admin => write!(f, "admin"),
            Self::SuperAdmin => write!(f, "super-admin"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(Self::Basic),
            "admin" => Ok(Self::Admin),
            "super-admin" => Ok(Self::SuperAdmin),
            _ => Err(RoleParseError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serde_kebab_case() {
        let json = serde_json::to_string(&Role::SuperAdmin).unwrap();
        assert_eq!(json, "\"super-admin\"");

        let role: Role = serde_json::from_str("\"super-admin\"").unwrap();
        assert_eq!(role, Role::SuperAdmin);
    }

    #[test]
    fn test_role_from_str() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert!("moderator".parse::<Role>().is_err());
    }

    #[test]
    fn test_is_super_admin() {
        assert!(Role::SuperAdmin.is_super_admin());
        assert!(!Role::Admin.is_super_admin());
        assert!(!Role::Basic.is_super_admin());
    }
}
