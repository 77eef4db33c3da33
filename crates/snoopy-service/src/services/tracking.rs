//! Tracking service
//!
//! Manages which accounts a user tracks, and serves the chart-facing reads.

use tracing::{info, instrument};

use snoopy_core::Account;

use crate::dto::{AccountResponse, TrackAccountRequest, UntrackAccountRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Tracking service
pub struct TrackingService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TrackingService<'a> {
    /// Create a new TrackingService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Start tracking an account for the given user
    ///
    /// Resolves the username once against the provider, creates the account
    /// document on first reference (existing data is never overwritten), and
    /// adds it to the user's tracked set. Fails if the username cannot be
    /// resolved or is already tracked by this user.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn track(
        &self,
        email: &str,
        request: TrackAccountRequest,
    ) -> ServiceResult<AccountResponse> {
        let resolved = self.ctx.provider().lookup(&request.username).await?;

        let account = Account::from_resolution(&resolved);
        let created = self.ctx.account_repo().create_if_absent(&account).await?;
        if created {
            info!(username = %account.username, "account document created");
        }

        self.ctx.tracked_repo().track(email, &account.username).await?;
        info!(username = %account.username, "account added to tracked list");

        // Return the stored snapshot: for a pre-existing account that is the
        // document with its history, not the fresh resolution
        let stored = self
            .ctx
            .account_repo()
            .find_by_username(&account.username)
            .await?
            .ok_or_else(|| ServiceError::not_found("Account", account.username.clone()))?;

        Ok(AccountResponse::from(&stored))
    }

    /// Stop tracking an account for the given user
    ///
    /// Only the user's tracked set changes; the account document and its
    /// history are retained for re-adding or for other users. Untracked
    /// usernames are a no-op.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn untrack(&self, email: &str, request: UntrackAccountRequest) -> ServiceResult<()> {
        self.ctx.tracked_repo().untrack(email, &request.username).await?;
        info!(username = %request.username, "account removed from tracked list");
        Ok(())
    }

    /// All accounts the given user tracks, with their history series
    #[instrument(skip(self))]
    pub async fn tracked_accounts(&self, email: &str) -> ServiceResult<Vec<AccountResponse>> {
        let Some(user) = self.ctx.tracked_repo().find_by_email(email).await? else {
            // Users are created lazily on first track; unseen email means
            // an empty tracked set, not an error
            return Ok(Vec::new());
        };

        let usernames: Vec<String> = user.accounts.into_iter().collect();
        let accounts = self.ctx.account_repo().find_many(&usernames).await?;

        Ok(accounts.iter().map(AccountResponse::from).collect())
    }

    /// One account with its full history (the per-account chart page)
    #[instrument(skip(self))]
    pub async fn account(&self, username: &str) -> ServiceResult<AccountResponse> {
        let account = self
            .ctx
            .account_repo()
            .find_by_username(username)
            .await?
            .ok_or_else(|| ServiceError::not_found("Account", username))?;

        Ok(AccountResponse::from(&account))
    }
}
