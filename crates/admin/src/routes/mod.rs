//! HTTP route handlers for the moderation panel.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                          - Liveness check
//!
//! # Pages (server-rendered, behind the route guard)
//! GET  /                                - Login
//! GET  /dashboard                       - Aggregate counts
//! GET  /users                           - Platform users listing
//! GET  /restaurants                     - Restaurants listing
//! GET  /reviews                         - Client reviews listing
//! GET  /orders                          - Orders listing (read-only)
//! GET  /change-password                 - Forced password change
//! GET  /notallowed                      - Suspended account interstitial
//!
//! # Proxy API (JSON, cookie-authenticated)
//! POST /api/proxy/auth/login            - Login, sets auth cookies
//! GET  /api/proxy/auth/status           - Normalized session state
//! POST /api/proxy/auth/logout           - Clears auth cookies
//! POST /api/proxy/auth/change-password  - Password change, clears flag cookie
//! GET  /api/proxy/users                 - Platform users
//! PATCH /api/proxy/users/{id}/suspend   - Suspend (super-admin protected)
//! PATCH /api/proxy/users/{id}/restore   - Restore (super-admin hidden)
//! GET  /api/proxy/users/verify/{id}     - Verification check
//! ...  /api/proxy/admin-users...        - Admin accounts (super-admin only)
//! GET  /api/proxy/delivery-users        - Delivery accounts
//! GET|POST /api/proxy/restaurants       - Restaurants
//! ...  /api/proxy/reviews...            - Reviews moderation
//! GET  /api/proxy/orders                - Orders
//! GET  /api/proxy/uploads/{*path}       - Image passthrough (cached)
//! ```

pub mod api;
pub mod auth;
pub mod dashboard;
pub mod listing;
pub mod orders;
pub mod restaurants;
pub mod reviews;
pub mod users;

use axum::{Router, middleware::from_fn_with_state, routing::get};
use tower_http::services::ServeDir;

use crate::{middleware::route_guard, state::AppState};

/// Build the complete application router.
pub fn router(state: AppState) -> Router {
    let pages = Router::new()
        .route("/", get(auth::login_page))
        .route("/dashboard", get(dashboard::index))
        .route("/users", get(users::index))
        .route("/restaurants", get(restaurants::index))
        .route("/reviews", get(reviews::index))
        .route("/orders", get(orders::index))
        .route("/change-password", get(auth::change_password_page))
        .route("/notallowed", get(auth::notallowed_page))
        .layer(from_fn_with_state(state.clone(), route_guard));

    Router::new()
        .route("/health", get(health))
        .merge(pages)
        .merge(api::router())
        .nest_service("/static", ServeDir::new("crates/admin/static"))
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check the backend.
async fn health() -> &'static str {
    "ok"
}
