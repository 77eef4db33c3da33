//! PostgreSQL implementation of AccountRepository

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use snoopy_core::traits::{AccountRepository, RepoResult};
use snoopy_core::{Account, ResolvedAccount};

use crate::models::{AccountRow, SampleRow};

use super::error::{account_not_found, map_db_error};

/// PostgreSQL implementation of AccountRepository
#[derive(Clone)]
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    /// Create a new PgAccountRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn samples_for(&self, usernames: &[String]) -> RepoResult<Vec<SampleRow>> {
        sqlx::query_as::<_, SampleRow>(
            r"
            SELECT username, recorded_at, followers, following
            FROM account_samples
            WHERE username = ANY($1)
            ORDER BY recorded_at, id
            ",
        )
        .bind(usernames)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)
    }
}

#[async_trait]
impl AccountRepository for PgAccountRepository {
    #[instrument(skip(self))]
    async fn list_usernames(&self) -> RepoResult<Vec<String>> {
        sqlx::query_scalar::<_, String>(
            r"
            SELECT username FROM accounts ORDER BY username
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(
            r"
            SELECT username, avatar, followers_current, following_current, created_at, updated_at
            FROM accounts
            WHERE username = $1
            ",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let samples = self.samples_for(&[row.username.clone()]).await?;
        Ok(Some(row.into_account(&samples)))
    }

    #[instrument(skip(self, usernames), fields(count = usernames.len()))]
    async fn find_many(&self, usernames: &[String]) -> RepoResult<Vec<Account>> {
        if usernames.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, AccountRow>(
            r"
            SELECT username, avatar, followers_current, following_current, created_at, updated_at
            FROM accounts
            WHERE username = ANY($1)
            ORDER BY username
            ",
        )
        .bind(usernames)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let samples = self.samples_for(usernames).await?;
        let mut by_username: HashMap<String, Vec<SampleRow>> = HashMap::new();
        for sample in samples {
            by_username
                .entry(sample.username.clone())
                .or_default()
                .push(sample);
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let samples = by_username.remove(&row.username).unwrap_or_default();
                row.into_account(&samples)
            })
            .collect())
    }

    #[instrument(skip(self, account), fields(username = %account.username))]
    async fn create_if_absent(&self, account: &Account) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            INSERT INTO accounts (username, avatar, followers_current, following_current)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (username) DO NOTHING
            ",
        )
        .bind(&account.username)
        .bind(&account.avatar)
        .bind(account.followers.current)
        .bind(account.following.current)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() == 1)
    }

    #[instrument(skip(self, resolved), fields(username = %resolved.username))]
    async fn record_sample(&self, resolved: &ResolvedAccount, timestamp: i64) -> RepoResult<()> {
        // One transaction per account: current values and the history sample
        // land together or not at all
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(
            r"
            UPDATE accounts
            SET avatar = $2, followers_current = $3, following_current = $4, updated_at = NOW()
            WHERE username = $1
            ",
        )
        .bind(&resolved.username)
        .bind(&resolved.avatar)
        .bind(resolved.followers)
        .bind(resolved.following)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(account_not_found(&resolved.username));
        }

        sqlx::query(
            r"
            INSERT INTO account_samples (username, recorded_at, followers, following)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(&resolved.username)
        .bind(timestamp)
        .bind(resolved.followers)
        .bind(resolved.following)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn ping(&self) -> RepoResult<()> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;
        Ok(())
    }
}
