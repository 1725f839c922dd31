//! Dashboard route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use serde_json::Value;
use tracing::instrument;

use crate::{
    filters,
    middleware::RequireAuth,
    state::AppState,
    upstream::{ListQuery, UpstreamError},
};

use goodfood_core::Page;

/// One stat tile.
#[derive(Debug, Clone)]
pub struct StatView {
    pub label: String,
    pub value: String,
    /// The listing page the tile links to.
    pub href: String,
}

/// Dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub current_path: String,
    pub stats: Vec<StatView>,
}

/// Collapse a listing result into a displayed count.
///
/// A failed call shows a dash rather than a zero, so an outage is not
/// mistaken for an empty platform.
fn count(result: Result<Page<Value>, UpstreamError>, what: &str) -> String {
    match result {
        Ok(page) => page.pagination.total.to_string(),
        Err(e) => {
            tracing::error!("Failed to count {what}: {e}");
            "–".to_string()
        }
    }
}

/// Dashboard page handler.
///
/// Aggregate counts come from the listing endpoints themselves: one item per
/// page is enough, only the pagination totals are read.
#[instrument(skip(token, state))]
pub async fn index(
    RequireAuth(token): RequireAuth,
    State(state): State<AppState>,
) -> DashboardTemplate {
    let query = ListQuery {
        limit: Some("1".to_string()),
        ..ListQuery::default()
    };
    let backend = state.backend();

    let (users, restaurants, reviews, orders) = tokio::join!(
        backend.list_users::<Value>(&token, &query),
        backend.list_restaurants::<Value>(&token, &query),
        backend.list_reviews::<Value>(&token, &query),
        backend.list_orders::<Value>(&token, &query),
    );

    let stats = vec![
        StatView {
            label: "Utilisateurs".to_string(),
            value: count(users, "users"),
            href: "/users".to_string(),
        },
        StatView {
            label: "Restaurants".to_string(),
            value: count(restaurants, "restaurants"),
            href: "/restaurants".to_string(),
        },
        StatView {
            label: "Avis clients".to_string(),
            value: count(reviews, "reviews"),
            href: "/reviews".to_string(),
        },
        StatView {
            label: "Commandes".to_string(),
            value: count(orders, "orders"),
            href: "/orders".to_string(),
        },
    ];

    DashboardTemplate {
        current_path: "/dashboard".to_string(),
        stats,
    }
}
