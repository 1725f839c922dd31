//! Authentication extractors for proxy API handlers.
//!
//! Two levels, matching the backend surfaces:
//!
//! - [`RequireAuth`]: the access cookie must be present. No upstream call -
//!   the backend validates the token itself when the request is forwarded.
//! - [`RequireSuperAdmin`]: additionally resolves the caller's session
//!   against the backend and requires the super-admin role.

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::CookieJar;

use crate::{
    error::AppError,
    services::{SessionState, resolve_session},
    state::AppState,
};

use super::cookies;

/// Extractor that requires an access credential cookie.
///
/// Rejects with 401 and the generic unauthorized message when the cookie is
/// absent, without any upstream call.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(RequireAuth(token): RequireAuth) -> impl IntoResponse {
///     // forward `token` to the backend
/// }
/// ```
pub struct RequireAuth(pub String);

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        cookies::bearer_token(&jar)
            .map(Self)
            .ok_or_else(|| AppError::Unauthorized("Non autorisé".to_string()))
    }
}

/// Extractor that requires the super-admin role.
///
/// Resolves the caller's session via the backend status endpoint (through
/// the opt-in cache when enabled): 401 when unauthenticated or the status
/// check fails, 403 when the role is anything but super-admin.
pub struct RequireSuperAdmin {
    /// The caller's bearer token, for forwarding.
    pub token: String,
    /// The resolved session.
    pub session: SessionState,
}

impl FromRequestParts<AppState> for RequireSuperAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let RequireAuth(token) = RequireAuth::from_request_parts(parts, state).await?;

        let session =
            resolve_session(state.backend(), state.session_cache(), Some(&token)).await;

        if !session.authenticated {
            let message = session
                .message
                .unwrap_or_else(|| "Erreur lors de la vérification du statut".to_string());
            return Err(AppError::Unauthorized(message));
        }

        if !session.is_super_admin() {
            return Err(AppError::Forbidden(
                "Accès restreint aux super-administrateurs".to_string(),
            ));
        }

        Ok(Self { token, session })
    }
}
