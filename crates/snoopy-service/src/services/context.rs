//! Service context - dependency container for services
//!
//! Holds the repositories, the upstream account provider, and the session
//! verifier. Clients (database pool, HTTP client) are created once per
//! process and shared via this context rather than module-level singletons.

use std::sync::Arc;

use snoopy_common::SessionVerifier;
use snoopy_core::traits::{AccountProvider, AccountRepository, TrackedUserRepository};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    account_repo: Arc<dyn AccountRepository>,
    tracked_repo: Arc<dyn TrackedUserRepository>,
    provider: Arc<dyn AccountProvider>,
    session_verifier: Arc<SessionVerifier>,
}

impl ServiceContext {
    /// Create a builder for the context
    #[must_use]
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    /// Get the account repository
    #[must_use]
    pub fn account_repo(&self) -> &dyn AccountRepository {
        self.account_repo.as_ref()
    }

    /// Get the tracked user repository
    #[must_use]
    pub fn tracked_repo(&self) -> &dyn TrackedUserRepository {
        self.tracked_repo.as_ref()
    }

    /// Get the upstream account provider
    #[must_use]
    pub fn provider(&self) -> &dyn AccountProvider {
        self.provider.as_ref()
    }

    /// Get the session verifier
    #[must_use]
    pub fn session_verifier(&self) -> &SessionVerifier {
        &self.session_verifier
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext").finish_non_exhaustive()
    }
}

/// Builder for [`ServiceContext`]
#[derive(Default)]
pub struct ServiceContextBuilder {
    account_repo: Option<Arc<dyn AccountRepository>>,
    tracked_repo: Option<Arc<dyn TrackedUserRepository>>,
    provider: Option<Arc<dyn AccountProvider>>,
    session_verifier: Option<Arc<SessionVerifier>>,
}

impl ServiceContextBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn account_repo(mut self, repo: Arc<dyn AccountRepository>) -> Self {
        self.account_repo = Some(repo);
        self
    }

    #[must_use]
    pub fn tracked_repo(mut self, repo: Arc<dyn TrackedUserRepository>) -> Self {
        self.tracked_repo = Some(repo);
        self
    }

    #[must_use]
    pub fn provider(mut self, provider: Arc<dyn AccountProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    #[must_use]
    pub fn session_verifier(mut self, verifier: Arc<SessionVerifier>) -> Self {
        self.session_verifier = Some(verifier);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        Ok(ServiceContext {
            account_repo: self
                .account_repo
                .ok_or_else(|| super::error::ServiceError::validation("account_repo is required"))?,
            tracked_repo: self
                .tracked_repo
                .ok_or_else(|| super::error::ServiceError::validation("tracked_repo is required"))?,
            provider: self
                .provider
                .ok_or_else(|| super::error::ServiceError::validation("provider is required"))?,
            session_verifier: self.session_verifier.ok_or_else(|| {
                super::error::ServiceError::validation("session_verifier is required")
            })?,
        })
    }
}
