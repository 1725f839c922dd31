//! Auth proxy endpoints: login, status, logout, password change.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::cookie::CookieJar;
use serde_json::{Value, json};
use tracing::instrument;

use crate::{
    error::AppError,
    middleware::{RequireAuth, cookies},
    services::resolve_session,
    state::AppState,
};

/// Pull a token out of a login response, wherever the backend put it.
fn extract_token<'a>(body: &'a Value, key: &str) -> Option<&'a str> {
    body.get(key)
        .or_else(|| body.get("data").and_then(|d| d.get(key)))
        .and_then(Value::as_str)
}

/// Whether the login payload flags a pending forced password change.
fn login_forces_password_change(body: &Value) -> bool {
    body.get("force_password_change")
        .or_else(|| body.get("data").and_then(|d| d.get("force_password_change")))
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

/// POST `/api/proxy/auth/login`.
///
/// On success the backend's access and refresh tokens move into httpOnly
/// cookies; they are never exposed to page scripts. A pending forced
/// password change additionally sets the flag cookie the route guard
/// checks.
#[instrument(skip(state, jar, body))]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let response = state.backend().login(&body).await?;
    let secure = state.config().secure_cookies();

    let access = extract_token(&response, "accessToken")
        .ok_or_else(|| AppError::Internal("login response without access token".to_string()))?;

    let mut jar = jar.add(cookies::access_cookie(access.to_string(), secure));
    if let Some(refresh) = extract_token(&response, "refreshToken") {
        jar = jar.add(cookies::refresh_cookie(refresh.to_string(), secure));
    }
    if login_forces_password_change(&response) {
        jar = jar.add(cookies::force_password_change_cookie(secure));
    }

    Ok((jar, Json(response)))
}

/// GET `/api/proxy/auth/status`.
///
/// Returns the normalized session. A suspended account gets a 403 with an
/// explicit `suspended` marker so the client can route to the interstitial.
#[instrument(skip(token, state))]
pub async fn status(
    RequireAuth(token): RequireAuth,
    State(state): State<AppState>,
) -> impl IntoResponse {
    let session = resolve_session(state.backend(), state.session_cache(), Some(&token)).await;

    if session.is_suspended() {
        let message = session
            .message
            .unwrap_or_else(|| "Votre compte est suspendu".to_string());
        return (
            StatusCode::FORBIDDEN,
            Json(json!({
                "authenticated": false,
                "suspended": true,
                "message": message,
            })),
        );
    }

    let status = if session.authenticated {
        StatusCode::OK
    } else {
        StatusCode::UNAUTHORIZED
    };
    (
        status,
        Json(json!({
            "authenticated": session.authenticated,
            "user": session.user,
            "force_password_change": session.force_password_change,
            "message": session.message,
        })),
    )
}

/// POST `/api/proxy/auth/logout`.
///
/// Purely client-side: the backend holds no session, clearing the cookies
/// is the whole operation.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let jar = cookies::clear_auth_cookies(jar, state.config().secure_cookies());
    (jar, Json(json!({"message": "Déconnexion réussie"})))
}

/// POST `/api/proxy/auth/change-password`.
///
/// On success the forced-password-change flag cookie is cleared so the
/// route guard stops bouncing the caller to `/change-password`.
#[instrument(skip(token, state, jar, body))]
pub async fn change_password(
    RequireAuth(token): RequireAuth,
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let response = state.backend().change_password(&token, &body).await?;
    let jar = jar.add(cookies::expired(
        cookies::FORCE_PASSWORD_CHANGE,
        state.config().secure_cookies(),
    ));
    Ok((jar, Json(response)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_token_top_level_and_nested() {
        let body = json!({"accessToken": "a1"});
        assert_eq!(extract_token(&body, "accessToken"), Some("a1"));

        let body = json!({"data": {"accessToken": "a2", "refreshToken": "r2"}});
        assert_eq!(extract_token(&body, "accessToken"), Some("a2"));
        assert_eq!(extract_token(&body, "refreshToken"), Some("r2"));
    }

    #[test]
    fn test_login_forces_password_change_flag() {
        assert!(login_forces_password_change(
            &json!({"force_password_change": true})
        ));
        assert!(login_forces_password_change(
            &json!({"data": {"force_password_change": true}})
        ));
        assert!(!login_forces_password_change(&json!({"accessToken": "a"})));
    }
}
