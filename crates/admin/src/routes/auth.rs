//! Auth-related pages: login, forced password change, suspended interstitial.
//!
//! These handlers only render; the credential flows themselves live in the
//! proxy API (`/api/proxy/auth/...`) and are driven from the page scripts.

use askama::Template;
use askama_web::WebTemplate;

use crate::filters;

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub current_path: String,
}

/// Login page handler (`/`).
///
/// The route guard clears any stale auth cookies on this response.
pub async fn login_page() -> LoginTemplate {
    LoginTemplate {
        current_path: "/".to_string(),
    }
}

/// Forced password change page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/change_password.html")]
pub struct ChangePasswordTemplate {
    pub current_path: String,
}

/// Forced password change page handler.
pub async fn change_password_page() -> ChangePasswordTemplate {
    ChangePasswordTemplate {
        current_path: "/change-password".to_string(),
    }
}

/// Suspended account interstitial template.
#[derive(Template, WebTemplate)]
#[template(path = "notallowed.html")]
pub struct NotAllowedTemplate {
    pub current_path: String,
}

/// Suspended account interstitial handler.
pub async fn notallowed_page() -> NotAllowedTemplate {
    NotAllowedTemplate {
        current_path: "/notallowed".to_string(),
    }
}
