//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Account, ResolvedAccount, TrackedUser};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Account Repository
// ============================================================================

#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// List the usernames of every stored account (refresh enumeration)
    async fn list_usernames(&self) -> RepoResult<Vec<String>>;

    /// Find one account with its full history, ordered by timestamp
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<Account>>;

    /// Filtered multi-get: accounts for the given usernames, with history
    ///
    /// Unknown usernames are silently absent from the result.
    async fn find_many(&self, usernames: &[String]) -> RepoResult<Vec<Account>>;

    /// Insert a freshly resolved account unless it already exists
    ///
    /// Existing data is never overwritten. Returns `true` if a row was
    /// inserted.
    async fn create_if_absent(&self, account: &Account) -> RepoResult<bool>;

    /// Commit one refresh outcome for an account: set both `current` values
    /// and the avatar, and append one sample per counter carrying
    /// `timestamp` (epoch milliseconds)
    ///
    /// Current values and history samples are written atomically; either the
    /// whole outcome lands or none of it does.
    async fn record_sample(&self, resolved: &ResolvedAccount, timestamp: i64) -> RepoResult<()>;

    /// Connectivity probe for readiness checks
    async fn ping(&self) -> RepoResult<()>;
}

// ============================================================================
// Tracked User Repository
// ============================================================================

#[async_trait]
pub trait TrackedUserRepository: Send + Sync {
    /// Find a user and their tracked set by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<TrackedUser>>;

    /// Add a username to the user's tracked set
    ///
    /// Creates the user on first use. Fails with
    /// [`DomainError::AlreadyTracked`] if the username is already in the set.
    async fn track(&self, email: &str, username: &str) -> RepoResult<()>;

    /// Remove a username from the user's tracked set
    ///
    /// Removing an untracked username is a no-op, not an error.
    async fn untrack(&self, email: &str, username: &str) -> RepoResult<()>;
}
