//! Uploaded file passthrough.
//!
//! Restaurant images live behind the backend's uploads endpoint; serving
//! them through the panel keeps every browser request same-origin. Uploads
//! are immutable once written, hence the aggressive cache header.

use axum::{
    extract::{Path, State},
    http::header::{CACHE_CONTROL, CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use tracing::instrument;

use crate::{error::AppError, state::AppState};

const CACHE_POLICY: &str = "public, max-age=31536000, immutable";

/// GET `/api/proxy/uploads/{*path}`.
#[instrument(skip(state))]
pub async fn fetch(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Result<Response, AppError> {
    let (content_type, bytes) = state.backend().fetch_upload(&path).await?;
    Ok((
        [
            (CONTENT_TYPE, content_type),
            (CACHE_CONTROL, CACHE_POLICY.to_string()),
        ],
        bytes,
    )
        .into_response())
}
