//! Upstream account API client

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::instrument;

use snoopy_common::ProviderConfig;
use snoopy_core::traits::AccountProvider;
use snoopy_core::{DomainError, ResolvedAccount};

use crate::types::AccountPayload;

/// Account provider over the upstream HTTP API
///
/// One client per process, shared across requests; `reqwest::Client` pools
/// connections internally. No request timeout and no retries are configured:
/// each lookup either completes or the caller's batch waits (see the
/// concurrency notes in the service layer).
#[derive(Clone)]
pub struct HttpAccountProvider {
    http: reqwest::Client,
    config: ProviderConfig,
}

impl HttpAccountProvider {
    /// Create a provider from configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: ProviderConfig) -> Result<Self, DomainError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| DomainError::ProviderError(e.to_string()))?;

        Ok(Self { http, config })
    }

    fn lookup_url(&self, username: &str) -> String {
        format!(
            "{}/users/show?screen_name={}",
            self.config.base_url.trim_end_matches('/'),
            username
        )
    }
}

#[async_trait]
impl AccountProvider for HttpAccountProvider {
    #[instrument(skip(self))]
    async fn lookup(&self, username: &str) -> Result<ResolvedAccount, DomainError> {
        let response = self
            .http
            .get(self.lookup_url(username))
            .bearer_auth(&self.config.api_token)
            .send()
            .await
            .map_err(|e| DomainError::ProviderError(e.to_string()))?;

        match response.status() {
            StatusCode::NOT_FOUND => {
                return Err(DomainError::Unresolvable(username.to_string()));
            }
            status if !status.is_success() => {
                return Err(DomainError::ProviderError(format!(
                    "lookup for {username} failed with status {status}"
                )));
            }
            _ => {}
        }

        let payload: AccountPayload = response
            .json()
            .await
            .map_err(|e| DomainError::ProviderError(e.to_string()))?;

        payload
            .resolve(self.config.zero_count_policy)
            .ok_or_else(|| DomainError::Unresolvable(username.to_string()))
    }
}
