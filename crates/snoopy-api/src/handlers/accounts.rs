//! Account handlers
//!
//! Endpoints for managing the calling user's tracked accounts and for the
//! chart-facing reads. All of them require a valid session; authorization is
//! purely "is there a session".

use axum::{
    extract::{Path, State},
    Json,
};
use snoopy_service::{
    AccountResponse, TrackAccountRequest, TrackingService, UntrackAccountRequest, UntrackAck,
};

use crate::extractors::{SessionUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Start tracking an account
///
/// POST /api/v1/accounts
///
/// Responds 200 with the snapshot whether the account row was just created
/// or already existed; only the caller's tracked set is guaranteed new.
pub async fn track_account(
    State(state): State<AppState>,
    session: SessionUser,
    ValidatedJson(request): ValidatedJson<TrackAccountRequest>,
) -> ApiResult<Json<AccountResponse>> {
    let service = TrackingService::new(state.service_context());
    let account = service.track(&session.email, request).await?;

    Ok(Json(account))
}

/// Stop tracking an account
///
/// POST /api/v1/accounts/remove
///
/// Removing a username that is not in the caller's list is a no-op; the
/// response reads the same either way.
pub async fn untrack_account(
    State(state): State<AppState>,
    session: SessionUser,
    ValidatedJson(request): ValidatedJson<UntrackAccountRequest>,
) -> ApiResult<Json<UntrackAck>> {
    let service = TrackingService::new(state.service_context());
    service.untrack(&session.email, request).await?;

    Ok(Json(UntrackAck::done()))
}

/// List the caller's tracked accounts with their history series
///
/// GET /api/v1/accounts
pub async fn list_accounts(
    State(state): State<AppState>,
    session: SessionUser,
) -> ApiResult<Json<Vec<AccountResponse>>> {
    let service = TrackingService::new(state.service_context());
    let accounts = service.tracked_accounts(&session.email).await?;

    Ok(Json(accounts))
}

/// Fetch one account with its full history
///
/// GET /api/v1/accounts/:username
pub async fn get_account(
    State(state): State<AppState>,
    _session: SessionUser,
    Path(username): Path<String>,
) -> ApiResult<Json<AccountResponse>> {
    let service = TrackingService::new(state.service_context());
    let account = service.account(&username).await?;

    Ok(Json(account))
}
