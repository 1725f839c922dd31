//! Client reviews proxy endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde_json::Value;
use tracing::instrument;

use goodfood_core::Page;

use crate::{
    error::AppError, middleware::RequireAuth, state::AppState, upstream::ListQuery,
};

/// GET `/api/proxy/reviews`.
#[instrument(skip(token, state))]
pub async fn list(
    RequireAuth(token): RequireAuth,
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Page<Value>>, AppError> {
    let page = state.backend().list_reviews(&token, &query).await?;
    Ok(Json(page))
}

/// GET `/api/proxy/reviews/restaurant/{restaurant_id}`.
#[instrument(skip(token, state))]
pub async fn for_restaurant(
    RequireAuth(token): RequireAuth,
    State(state): State<AppState>,
    Path(restaurant_id): Path<i64>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Page<Value>>, AppError> {
    let page = state
        .backend()
        .restaurant_reviews(&token, restaurant_id, &query)
        .await?;
    Ok(Json(page))
}

/// GET `/api/proxy/reviews/{id}`.
#[instrument(skip(token, state))]
pub async fn get_one(
    RequireAuth(token): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let response = state.backend().get_review(&token, id).await?;
    Ok(Json(response))
}

/// PATCH `/api/proxy/reviews/{id}`.
#[instrument(skip(token, state, body))]
pub async fn update(
    RequireAuth(token): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let response = state.backend().update_review(&token, id, &body).await?;
    Ok(Json(response))
}

/// DELETE `/api/proxy/reviews/{id}`.
#[instrument(skip(token, state))]
pub async fn remove(
    RequireAuth(token): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let response = state.backend().delete_review(&token, id).await?;
    Ok(Json(response))
}

/// PATCH `/api/proxy/reviews/{id}/suspend`.
#[instrument(skip(token, state))]
pub async fn suspend(
    RequireAuth(token): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let response = state.backend().suspend_review(&token, id).await?;
    Ok(Json(response))
}
