//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

/// Track a new account for the calling user
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TrackAccountRequest {
    #[validate(length(min = 1, max = 32, message = "Username must be 1-32 characters"))]
    pub username: String,
}

/// Remove an account from the calling user's tracked list
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UntrackAccountRequest {
    #[validate(length(min = 1, max = 32, message = "Username must be 1-32 characters"))]
    pub username: String,
}
