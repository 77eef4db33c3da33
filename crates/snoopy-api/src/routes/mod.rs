//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{accounts, health, refresh};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately, kept outside /api/v1)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(account_routes())
        .merge(refresh_routes())
}

/// Account management and chart-facing routes
fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/accounts", get(accounts::list_accounts))
        .route("/accounts", post(accounts::track_account))
        .route("/accounts/remove", post(accounts::untrack_account))
        .route("/accounts/:username", get(accounts::get_account))
}

/// Refresh trigger route
fn refresh_routes() -> Router<AppState> {
    Router::new().route("/refresh", post(refresh::trigger_refresh))
}
