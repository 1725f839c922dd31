//! Platform users proxy endpoints.

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

use super::record_is_super_admin;

/// GET `/api/proxy/users`.
#[instrument(skip(token, state))]
pub async fn list(
    RequireAuth(token): RequireAuth,
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Page<Value>>, AppError> {
    let page = state.backend().list_users(&token, &query).await?;
    Ok(Json(page))
}

/// PATCH `/api/proxy/users/{id}/suspend`.
///
/// Super-admin accounts cannot be suspended from this surface; the target
/// is fetched first and the mutation is never sent for them.
#[instrument(skip(token, state))]
pub async fn suspend(
    RequireAuth(token): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let target = state.backend().get_user(&token, id).await?;
    if record_is_super_admin(&target) {
        return Err(AppError::Forbidden(
            "Action non autorisée sur un super-administrateur".to_string(),
        ));
    }
    let response = state.backend().suspend_user(&token, id).await?;
    Ok(Json(response))
}

/// PATCH `/api/proxy/users/{id}/restore`.
///
/// Super-admin targets are reported as missing rather than forbidden:
/// this surface does not acknowledge their existence.
#[instrument(skip(token, state))]
pub async fn restore(
    RequireAuth(token): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let target = state.backend().get_user(&token, id).await?;
    if record_is_super_admin(&target) {
        return Err(AppError::NotFound("Utilisateur non trouvé".to_string()));
    }
    let response = state.backend().restore_user(&token, id).await?;
    Ok(Json(response))
}

/// GET `/api/proxy/users/verify/{id}`.
#[instrument(skip(token, state))]
pub async fn verify(
    RequireAuth(token): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let response = state.backend().verify_user(&token, id).await?;
    Ok(Json(response))
}
