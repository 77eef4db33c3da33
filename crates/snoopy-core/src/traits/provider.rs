//! External account provider trait (port)

use async_trait::async_trait;

use crate::entities::ResolvedAccount;
use crate::error::DomainError;

/// Lookup of current follower/following counts for a username
///
/// Implemented over the third-party social-graph API. A lookup either yields
/// a full [`ResolvedAccount`] or fails with [`DomainError::Unresolvable`]
/// (unknown account, counts absent per the active zero-count policy) or
/// [`DomainError::ProviderError`] (transport/decode failure). Lookups are
/// independent; the caller decides how to combine or drop failures.
#[async_trait]
pub trait AccountProvider: Send + Sync {
    async fn lookup(&self, username: &str) -> Result<ResolvedAccount, DomainError>;
}
