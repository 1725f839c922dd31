//! Page-route guard.
//!
//! Applied to every page route (never to `/api`, `/static`, or `/health`).
//! Each page load re-derives the caller's session from the access cookie and
//! redirects before any content renders:
//!
//! - `/` (login) always renders, and clears stale auth cookies
//! - unauthenticated -> `/` with cookies cleared
//! - suspended -> `/notallowed`
//! - pending forced password change -> `/change-password` (and the inverse:
//!   visiting `/change-password` with no pending flag -> `/dashboard`)

use axum::{
    extract::{Request, State},
    http::header::SET_COOKIE,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::{services::resolve_session, state::AppState};

use super::cookies;

/// Append expired auth cookies so the client drops stale credentials.
fn with_cleared_cookies(mut response: Response, secure: bool) -> Response {
    for name in [
        cookies::ACCESS_TOKEN,
        cookies::REFRESH_TOKEN,
        cookies::FORCE_PASSWORD_CHANGE,
    ] {
        if let Ok(value) = cookies::expired(name, secure).to_string().parse() {
            response.headers_mut().append(SET_COOKIE, value);
        }
    }
    response
}

/// The guard middleware. See the module docs for the redirect table.
pub async fn route_guard(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();
    let secure = state.config().secure_cookies();

    // The login page is always reachable; visiting it discards any session.
    if path == "/" {
        let response = next.run(request).await;
        return with_cleared_cookies(response, secure);
    }

    let jar = CookieJar::from_headers(request.headers());
    let token = cookies::bearer_token(&jar);
    let session = resolve_session(state.backend(), state.session_cache(), token.as_deref()).await;

    if session.is_suspended() {
        if path == "/notallowed" {
            return next.run(request).await;
        }
        tracing::debug!(path, "suspended account, redirecting to /notallowed");
        return Redirect::to("/notallowed").into_response();
    }

    if !session.authenticated {
        tracing::debug!(path, "unauthenticated, redirecting to login");
        let response = Redirect::to("/").into_response();
        return with_cleared_cookies(response, secure);
    }

    if session.force_password_change {
        if path != "/change-password" {
            return Redirect::to("/change-password").into_response();
        }
    } else if path == "/change-password" {
        return Redirect::to("/dashboard").into_response();
    }

    next.run(request).await
}
