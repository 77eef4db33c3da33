//! PostgreSQL implementation of TrackedUserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use snoopy_core::traits::{RepoResult, TrackedUserRepository};
use snoopy_core::{DomainError, TrackedUser};

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of TrackedUserRepository
///
/// The tracked list is a composite-primary-key join table, so duplicate
/// tracking is rejected by the storage layer itself.
#[derive(Clone)]
pub struct PgTrackedUserRepository {
    pool: PgPool,
}

impl PgTrackedUserRepository {
    /// Create a new PgTrackedUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TrackedUserRepository for PgTrackedUserRepository {
    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<TrackedUser>> {
        let exists = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)
            ",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        if !exists {
            return Ok(None);
        }

        let usernames = sqlx::query_scalar::<_, String>(
            r"
            SELECT username FROM tracked_accounts WHERE email = $1 ORDER BY username
            ",
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let mut user = TrackedUser::new(email);
        user.accounts = usernames.into_iter().collect();
        Ok(Some(user))
    }

    #[instrument(skip(self))]
    async fn track(&self, email: &str, username: &str) -> RepoResult<()> {
        // The user row is created lazily on first use; the session provider
        // owns user identity, we only keep the tracked set
        sqlx::query(
            r"
            INSERT INTO users (email) VALUES ($1)
            ON CONFLICT (email) DO NOTHING
            ",
        )
        .bind(email)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        sqlx::query(
            r"
            INSERT INTO tracked_accounts (email, username) VALUES ($1, $2)
            ",
        )
        .bind(email)
        .bind(username)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || DomainError::AlreadyTracked(username.to_string()))
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn untrack(&self, email: &str, username: &str) -> RepoResult<()> {
        // Zero rows affected is fine: removing an untracked username is a no-op
        sqlx::query(
            r"
            DELETE FROM tracked_accounts WHERE email = $1 AND username = $2
            ",
        )
        .bind(email)
        .bind(username)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
