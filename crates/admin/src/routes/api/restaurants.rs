//! Restaurants proxy endpoints.

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

/// GET `/api/proxy/restaurants`.
#[instrument(skip(token, state))]
pub async fn list(
    RequireAuth(token): RequireAuth,
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Page<Value>>, AppError> {
    let page = state.backend().list_restaurants(&token, &query).await?;
    Ok(Json(page))
}

/// POST `/api/proxy/restaurants`.
#[instrument(skip(token, state, body))]
pub async fn create(
    RequireAuth(token): RequireAuth,
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let response = state.backend().create_restaurant(&token, &body).await?;
    Ok(Json(response))
}
