//! Platform account types (clients, admins, deliverers share one shape).

use serde::{Deserialize, Serialize};

use goodfood_core::{AccountStatus, Role};

/// A platform account as returned by the user listing endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Backend ID.
    pub id: i64,
    /// Account email address.
    pub email: String,
    /// First name, when the backend provides one.
    pub first_name: Option<String>,
    /// Last name, when the backend provides one.
    pub last_name: Option<String>,
    /// Backend-owned lifecycle status.
    #[serde(default)]
    pub status: AccountStatus,
    /// Account role; absent on endpoints that do not expose it.
    #[serde(default)]
    pub role: Option<Role>,
    /// Creation timestamp (ISO 8601 string, displayed as-is).
    #[serde(default)]
    pub created_at: String,
    /// Last update timestamp.
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl User {
    /// Display name: "First Last", falling back to the email address.
    #[must_use]
    pub fn display_name(&self) -> String {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(first), None) => first.to_string(),
            (None, Some(last)) => last.to_string(),
            (None, None) => self.email.clone(),
        }
    }
}
