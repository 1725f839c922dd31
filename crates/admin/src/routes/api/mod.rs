//! Proxy API route handlers.
//!
//! Same-origin JSON endpoints under `/api/proxy`. Each handler attaches the
//! caller's bearer token (from the access cookie) and forwards to the
//! platform backend, relaying its status and message on failure.

pub mod admin_users;
pub mod auth;
pub mod delivery_users;
pub mod orders;
pub mod restaurants;
pub mod reviews;
pub mod uploads;
pub mod users;

use axum::{
    Router,
    routing::{get, patch, post},
};
use serde_json::Value;

use crate::state::AppState;

/// Build the complete proxy API router.
pub fn router() -> Router<AppState> {
    Router::new()
        // Auth
        .route("/api/proxy/auth/login", post(auth::login))
        .route("/api/proxy/auth/status", get(auth::status))
        .route("/api/proxy/auth/logout", post(auth::logout))
        .route("/api/proxy/auth/change-password", post(auth::change_password))
        // Platform users
        .route("/api/proxy/users", get(users::list))
        .route("/api/proxy/users/{id}/suspend", patch(users::suspend))
        .route("/api/proxy/users/{id}/restore", patch(users::restore))
        .route("/api/proxy/users/verify/{id}", get(users::verify))
        // Admin users (super-admin only)
        .route(
            "/api/proxy/admin-users",
            get(admin_users::list).post(admin_users::create),
        )
        .route(
            "/api/proxy/admin-users/{id}",
            get(admin_users::get_one)
                .patch(admin_users::update)
                .delete(admin_users::remove),
        )
        .route(
            "/api/proxy/admin-users/{id}/suspend",
            patch(admin_users::suspend),
        )
        .route(
            "/api/proxy/admin-users/{id}/restore",
            patch(admin_users::restore),
        )
        // Delivery users
        .route("/api/proxy/delivery-users", get(delivery_users::list))
        // Restaurants
        .route(
            "/api/proxy/restaurants",
            get(restaurants::list).post(restaurants::create),
        )
        // Reviews
        .route("/api/proxy/reviews", get(reviews::list))
        .route(
            "/api/proxy/reviews/restaurant/{restaurant_id}",
            get(reviews::for_restaurant),
        )
        .route(
            "/api/proxy/reviews/{id}",
            get(reviews::get_one)
                .patch(reviews::update)
                .delete(reviews::remove),
        )
        .route("/api/proxy/reviews/{id}/suspend", patch(reviews::suspend))
        // Orders
        .route("/api/proxy/orders", get(orders::list))
        // Uploads passthrough
        .route("/api/proxy/uploads/{*path}", get(uploads::fetch))
}

/// Whether a backend user record holds the super-admin role.
///
/// The record shape varies by endpoint: the role may sit at the top level,
/// under `data`, or under `data.user`.
pub(crate) fn record_is_super_admin(record: &Value) -> bool {
    let role = record
        .get("role")
        .or_else(|| record.get("data").and_then(|d| d.get("role")))
        .or_else(|| {
            record
                .get("data")
                .and_then(|d| d.get("user"))
                .and_then(|u| u.get("role"))
        })
        .and_then(Value::as_str);
    role == Some("super-admin")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_is_super_admin_at_top_level() {
        assert!(record_is_super_admin(&json!({"id": 1, "role": "super-admin"})));
        assert!(!record_is_super_admin(&json!({"id": 1, "role": "admin"})));
    }

    #[test]
    fn test_record_is_super_admin_under_data() {
        assert!(record_is_super_admin(
            &json!({"data": {"id": 1, "role": "super-admin"}})
        ));
        assert!(record_is_super_admin(
            &json!({"data": {"user": {"role": "super-admin"}}})
        ));
    }

    #[test]
    fn test_record_without_role_is_not_super_admin() {
        assert!(!record_is_super_admin(&json!({"id": 1})));
    }
}
