//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    #[error("User not found: {0}")]
    UserNotFound(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// The external provider could not resolve the username
    /// (unknown account, or counts absent from the response)
    #[error("Account could not be resolved: {0}")]
    Unresolvable(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Account already tracked: {0}")]
    AlreadyTracked(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Provider error: {0}")]
    ProviderError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::AccountNotFound(_) => "UNKNOWN_ACCOUNT",
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::Unresolvable(_) => "ACCOUNT_UNRESOLVABLE",
            Self::AlreadyTracked(_) => "ACCOUNT_ALREADY_TRACKED",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::ProviderError(_) => "PROVIDER_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a not-found error
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::AccountNotFound(_) | Self::UserNotFound(_))
    }

    /// Check if this is a validation error
    ///
    /// Unresolvable and already-tracked usernames count as validation errors:
    /// the management API surfaces both as a 400 with a message.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::Unresolvable(_) | Self::AlreadyTracked(_)
        )
    }
}
