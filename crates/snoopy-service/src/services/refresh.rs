//! Refresh service - the periodic account-statistics refresh job
//!
//! Brings every stored account's current counts and avatar up to date and
//! extends its history by exactly one sample per invocation. Lookups and
//! writes fan out as independent futures; there is no retry, no timeout, and
//! no coordination between overlapping invocations.

use chrono::Utc;
use futures::future::join_all;
use tracing::{info, instrument, warn};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Summary of one refresh invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshOutcome {
    /// Accounts enumerated from the store
    pub attempted: usize,
    /// Accounts whose sample was committed
    pub updated: usize,
    /// Accounts dropped because the provider did not resolve them
    pub dropped: usize,
    /// The shared batch timestamp (epoch milliseconds)
    pub timestamp: i64,
}

/// Refresh service
pub struct RefreshService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RefreshService<'a> {
    /// Create a new RefreshService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Run one refresh batch over every stored account
    ///
    /// Unresolved accounts are skipped for this cycle with a warning; their
    /// documents stay untouched. Write failures are likewise logged without
    /// failing the batch, so the caller always sees an aggregate success.
    #[instrument(skip(self))]
    pub async fn refresh_all(&self) -> ServiceResult<RefreshOutcome> {
        let usernames = self.ctx.account_repo().list_usernames().await?;
        let attempted = usernames.len();

        // Resolve every username concurrently; each lookup succeeds or fails
        // on its own
        let lookups = usernames.iter().map(|username| async move {
            (username, self.ctx.provider().lookup(username).await)
        });

        let mut resolved = Vec::with_capacity(attempted);
        for (username, result) in join_all(lookups).await {
            match result {
                Ok(mut account) => {
                    // Commit under the stored username: the provider may echo
                    // a renamed or differently-cased variant that matches no
                    // stored row
                    account.username.clone_from(username);
                    resolved.push(account);
                }
                Err(error) => {
                    warn!(%username, %error, "account was not resolved, skipping this cycle");
                }
            }
        }
        let dropped = attempted - resolved.len();

        // One timestamp for the whole batch: captured once, after resolution,
        // before any write, so every appended sample shares an "as-of" point
        let timestamp = Utc::now().timestamp_millis();

        let writes = resolved.iter().map(|account| async move {
            (
                account.username.as_str(),
                self.ctx.account_repo().record_sample(account, timestamp).await,
            )
        });

        let mut updated = 0;
        for (username, outcome) in join_all(writes).await {
            match outcome {
                Ok(()) => updated += 1,
                Err(error) => {
                    // The account simply misses this cycle; the batch still
                    // reports success
                    warn!(%username, %error, "failed to commit refresh sample");
                }
            }
        }

        info!(attempted, updated, dropped, timestamp, "refresh batch completed");

        Ok(RefreshOutcome {
            attempted,
            updated,
            dropped,
            timestamp,
        })
    }
}
