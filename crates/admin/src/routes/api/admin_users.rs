//! Admin users proxy endpoints (super-admin only).
//!
//! Every endpoint here requires the super-admin role, and every mutation of
//! a specific account first fetches the target: super-admin accounts are
//! never mutated through the panel, whoever asks.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde_json::Value;
use tracing::instrument;

use goodfood_core::Page;

use crate::{
    error::AppError, middleware::RequireSuperAdmin, state::AppState, upstream::ListQuery,
};

use super::record_is_super_admin;

/// Deny a mutation when its target is a super-admin account.
///
/// The target fetch happens before the mutation call, so a denial means the
/// upstream mutation endpoint was never invoked.
async fn ensure_not_super_admin(
    state: &AppState,
    token: &str,
    id: i64,
) -> Result<(), AppError> {
    let target = state.backend().get_admin_user(token, id).await?;
    if record_is_super_admin(&target) {
        return Err(AppError::Forbidden(
            "Action non autorisée sur un super-administrateur".to_string(),
        ));
    }
    Ok(())
}

/// GET `/api/proxy/admin-users`.
#[instrument(skip(auth, state))]
pub async fn list(
    auth: RequireSuperAdmin,
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Page<Value>>, AppError> {
    let page = state.backend().list_admin_users(&auth.token, &query).await?;
    Ok(Json(page))
}

/// POST `/api/proxy/admin-users`.
#[instrument(skip(auth, state, body))]
pub async fn create(
    auth: RequireSuperAdmin,
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let response = state.backend().create_admin_user(&auth.token, &body).await?;
    Ok(Json(response))
}

/// GET `/api/proxy/admin-users/{id}`.
#[instrument(skip(auth, state))]
pub async fn get_one(
    auth: RequireSuperAdmin,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let response = state.backend().get_admin_user(&auth.token, id).await?;
    Ok(Json(response))
}

/// PATCH `/api/proxy/admin-users/{id}`.
#[instrument(skip(auth, state, body))]
pub async fn update(
    auth: RequireSuperAdmin,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, AppError> {
    ensure_not_super_admin(&state, &auth.token, id).await?;
    let response = state
        .backend()
        .update_admin_user(&auth.token, id, &body)
        .await?;
    Ok(Json(response))
}

/// DELETE `/api/proxy/admin-users/{id}`.
#[instrument(skip(auth, state))]
pub async fn remove(
    auth: RequireSuperAdmin,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    ensure_not_super_admin(&state, &auth.token, id).await?;
    let response = state.backend().delete_admin_user(&auth.token, id).await?;
    Ok(Json(response))
}

/// PATCH `/api/proxy/admin-users/{id}/suspend`.
#[instrument(skip(auth, state))]
pub async fn suspend(
    auth: RequireSuperAdmin,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    ensure_not_super_admin(&state, &auth.token, id).await?;
    let response = state.backend().suspend_admin_user(&auth.token, id).await?;
    Ok(Json(response))
}

/// PATCH `/api/proxy/admin-users/{id}/restore`.
#[instrument(skip(auth, state))]
pub async fn restore(
    auth: RequireSuperAdmin,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    ensure_not_super_admin(&state, &auth.token, id).await?;
    let response = state.backend().restore_admin_user(&auth.token, id).await?;
    Ok(Json(response))
}
