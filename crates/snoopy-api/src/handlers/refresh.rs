//! Refresh trigger handler
//!
//! The batch refresh is driven by an external scheduler calling this endpoint
//! with a shared secret in the `authorization` header. The secret is compared
//! verbatim; there is no bearer scheme and no session involved.

use axum::{extract::State, http::HeaderMap, Json};
use snoopy_service::{RefreshAck, RefreshService};

use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Run one refresh batch over every stored account
///
/// POST /api/v1/refresh
///
/// Returns 200 with the batch counts whenever the batch itself ran, even if
/// every account was dropped. 401 when the header is absent, 403 when it does
/// not match.
pub async fn trigger_refresh(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Json<RefreshAck>> {
    let secret = headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .ok_or(ApiError::MissingRefreshSecret)?;

    if secret != state.refresh_secret() {
        return Err(ApiError::InvalidRefreshSecret);
    }

    let service = RefreshService::new(state.service_context());
    let outcome = service.refresh_all().await?;

    Ok(Json(RefreshAck::completed(outcome.updated, outcome.dropped)))
}
