//! Orders proxy endpoint (read-only).

use axum::{
    Json,
    extract::{Query, State},
};
use serde_json::Value;
use tracing::instrument;

use goodfood_core::Page;

use crate::{
    error::AppError, middleware::RequireAuth, state::AppState, upstream::ListQuery,
};

/// GET `/api/proxy/orders`.
#[instrument(skip(token, state))]
pub async fn list(
    RequireAuth(token): RequireAuth,
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Page<Value>>, AppError> {
    let page = state.backend().list_orders(&token, &query).await?;
    Ok(Json(page))
}
