//! Session extractor
//!
//! Extracts and validates the session bearer token from the Authorization
//! header. The only authorization model is "is there a session": any
//! verified session may call the management endpoints.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user extracted from the session token
#[derive(Debug, Clone)]
pub struct SessionUser {
    /// Email carried by the session; the key for tracked-account lists
    pub email: String,
    /// Display name from the OAuth provider
    pub name: String,
    /// Avatar URL, if the provider supplied one
    pub picture: Option<String>,
}

#[async_trait]
impl<S> FromRequestParts<S> for SessionUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Extract the Authorization header
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingSession)?;

        // Get the app state to access the session verifier
        let app_state = AppState::from_ref(state);

        // Validate the token
        let claims = app_state
            .session_verifier()
            .verify(bearer.token())
            .map_err(|e| {
                tracing::warn!(error = %e, "Invalid session token");
                ApiError::InvalidSession
            })?;

        Ok(SessionUser {
            email: claims.sub,
            name: claims.name,
            picture: claims.picture,
        })
    }
}
