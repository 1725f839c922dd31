//! Auth cookie conventions.
//!
//! The panel keeps three httpOnly cookies: the access credential (7 days),
//! the refresh credential (30 days), and a transient "must change password"
//! flag. SameSite=Strict everywhere; `Secure` follows the configured base
//! URL scheme. Cleared on logout and whenever the guard bounces a caller
//! back to the login page.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

/// Access credential cookie name.
pub const ACCESS_TOKEN: &str = "accessToken";
/// Refresh credential cookie name.
pub const REFRESH_TOKEN: &str = "refreshToken";
/// Transient forced-password-change flag cookie name.
pub const FORCE_PASSWORD_CHANGE: &str = "forcePasswordChange";

/// Access/flag cookie lifetime: 7 days.
const ACCESS_MAX_AGE: time::Duration = time::Duration::days(7);
/// Refresh cookie lifetime: 30 days.
const REFRESH_MAX_AGE: time::Duration = time::Duration::days(30);

fn build(name: &'static str, value: String, max_age: time::Duration, secure: bool) -> Cookie<'static> {
    Cookie::build((name, value))
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Strict)
        .max_age(max_age)
        .path("/")
        .build()
}

/// The access credential cookie.
#[must_use]
pub fn access_cookie(token: String, secure: bool) -> Cookie<'static> {
    build(ACCESS_TOKEN, token, ACCESS_MAX_AGE, secure)
}

/// The refresh credential cookie.
#[must_use]
pub fn refresh_cookie(token: String, secure: bool) -> Cookie<'static> {
    build(REFRESH_TOKEN, token, REFRESH_MAX_AGE, secure)
}

/// The forced-password-change flag cookie (value is always "true").
#[must_use]
pub fn force_password_change_cookie(secure: bool) -> Cookie<'static> {
    build(FORCE_PASSWORD_CHANGE, "true".to_string(), ACCESS_MAX_AGE, secure)
}

/// An immediately-expiring cookie that clears `name` on the client.
#[must_use]
pub fn expired(name: &'static str, secure: bool) -> Cookie<'static> {
    build(name, String::new(), time::Duration::ZERO, secure)
}

/// Clear all three auth cookies.
#[must_use]
pub fn clear_auth_cookies(jar: CookieJar, secure: bool) -> CookieJar {
    jar.add(expired(ACCESS_TOKEN, secure))
        .add(expired(REFRESH_TOKEN, secure))
        .add(expired(FORCE_PASSWORD_CHANGE, secure))
}

/// The bearer token from the access cookie, if present and non-empty.
#[must_use]
pub fn bearer_token(jar: &CookieJar) -> Option<String> {
    jar.get(ACCESS_TOKEN)
        .map(|c| c.value().to_string())
        .filter(|v| !v.is_empty())
}
