//! Unified error handling for the admin panel.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::upstream::UpstreamError;

/// Application-level error type.
///
/// Proxy handlers never let a raw failure reach the transport layer: every
/// variant maps to a JSON `{"message": ...}` body with a sanitized message.
#[derive(Debug, Error)]
pub enum AppError {
    /// Backend call failed.
    #[error("Upstream error: {0}")]
    Upstream(#[from] UpstreamError),

    /// Resource not found (or deliberately hidden).
    #[error("Not found: {0}")]
    NotFound(String),

    /// Caller is not authenticated.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Caller lacks permission.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Bad request from the client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Whether this error is a server-side fault worth capturing.
    const fn is_server_fault(&self) -> bool {
        match self {
            Self::Internal(_) => true,
            Self::Upstream(upstream) => upstream.relay_status().is_none(),
            _ => false,
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::Upstream(upstream) => upstream
                .relay_status()
                .and_then(|s| StatusCode::from_u16(s).ok())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message relayed to the client.
    ///
    /// Backend messages with a relayable status pass through; transport and
    /// internal faults collapse to a generic message, with raw details only
    /// in debug builds.
    fn client_message(&self) -> String {
        match self {
            Self::Upstream(upstream) => match upstream {
                UpstreamError::Status { message, .. } => message.clone(),
                other => {
                    if cfg!(debug_assertions) {
                        format!("Erreur interne du serveur: {other}")
                    } else {
                        "Erreur interne du serveur".to_string()
                    }
                }
            },
            Self::Internal(detail) => {
                if cfg!(debug_assertions) {
                    format!("Erreur interne du serveur: {detail}")
                } else {
                    "Erreur interne du serveur".to_string()
                }
            }
            Self::NotFound(message)
            | Self::Unauthorized(message)
            | Self::Forbidden(message)
            | Self::BadRequest(message) => message.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.is_server_fault() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Admin request error"
            );
        }

        let body = json!({ "message": self.client_message() });
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("Utilisateur non trouvé".to_string());
        assert_eq!(err.to_string(), "Not found: Utilisateur non trouvé");
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            get_status(AppError::NotFound("x".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::Unauthorized("x".to_string())),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            get_status(AppError::Forbidden("x".to_string())),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            get_status(AppError::BadRequest("x".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Internal("x".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_upstream_status_is_relayed() {
        let err = AppError::Upstream(UpstreamError::Status {
            status: 404,
            message: "Utilisateur non trouvé".to_string(),
        });
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.client_message(), "Utilisateur non trouvé");
    }

    #[test]
    fn test_invalid_token_collapses_to_internal() {
        let err = AppError::Upstream(UpstreamError::InvalidToken);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.client_message().starts_with("Erreur interne du serveur"));
    }
}
