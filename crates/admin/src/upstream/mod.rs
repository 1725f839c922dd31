//! Platform backend REST client.
//!
//! All business data lives in the backend; this module is the only place
//! that talks to it. The client attaches the caller's bearer token per
//! request and normalizes the backend's inconsistent response envelopes
//! into [`goodfood_core::Page`].
//!
//! # Example
//!
//! ```rust,ignore
//! use goodfood_admin::upstream::BackendClient;
//!
//! let client = BackendClient::new(&config.backend);
//!
//! // List platform users (normalized envelope)
//! let page = client.list_users(token, &query).await?;
//!
//! // Trigger a backend-owned status transition
//! client.suspend_review(token, 42).await?;
//! ```

mod client;
pub mod envelope;
pub mod types;

pub use client::BackendClient;
pub use envelope::{ListQuery, RawEnvelope};

use thiserror::Error;

/// Errors that can occur when talking to the platform backend.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// HTTP transport failed (backend unreachable, timeout, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend returned a body that is not valid JSON.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Backend answered with a non-success status. The message is either the
    /// backend's own `message` field or a wrapped description of the raw
    /// body, and is safe to relay to the caller.
    #[error("Backend error {status}: {message}")]
    Status { status: u16, message: String },

    /// The bearer token contains bytes that cannot form a header value.
    #[error("Invalid bearer token")]
    InvalidToken,
}

impl UpstreamError {
    /// The HTTP status this error should relay, if it carries one.
    #[must_use]
    pub const fn relay_status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = UpstreamError::Status {
            status: 404,
            message: "Utilisateur non trouvé".to_string(),
        };
        assert_eq!(err.to_string(), "Backend error 404: Utilisateur non trouvé");
        assert_eq!(err.relay_status(), Some(404));
    }

    #[test]
    fn test_invalid_token_has_no_relay_status() {
        assert_eq!(UpstreamError::InvalidToken.relay_status(), None);
    }
}
