//! Account status as reported by the platform backend.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a backend-owned account or resource.
///
/// Transitions are backend-owned; the admin panel only triggers them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    #[default]
    Active,
    Suspended,
    Inactive,
}

impl AccountStatus {
    /// Whether moderation restore actions apply to this status.
    #[must_use]
    pub const fn is_suspended(self) -> bool {
        matches!(self, Self::Suspended)
    }
}

impl std::fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Suspended => write!(f, "suspended"),
            Self::Inactive => write!(f, "inactive"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serde_lowercase() {
        let status: AccountStatus = serde_json::from_str("\"suspended\"").unwrap();
        assert_eq!(status, AccountStatus::Suspended);
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"suspended\"");
    }

    #[test]
    fn test_is_suspended() {
        assert!(AccountStatus::Suspended.is_suspended());
        assert!(!AccountStatus::Active.is_suspended());
        assert!(!AccountStatus::Inactive.is_suspended());
    }
}
