//! Account database models
//!
//! An account is split across two tables: a current-values row and an
//! append-only samples table. The rows decode with explicit types; a shape
//! mismatch fails the query instead of producing undefined fields.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use snoopy_core::{Account, CounterHistory, HistorySample};

/// Row of the `accounts` table
#[derive(Debug, Clone, FromRow)]
pub struct AccountRow {
    pub username: String,
    pub avatar: String,
    pub followers_current: i64,
    pub following_current: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Row of the `account_samples` table
#[derive(Debug, Clone, FromRow)]
pub struct SampleRow {
    pub username: String,
    /// Epoch milliseconds, shared by every sample of one refresh batch
    pub recorded_at: i64,
    pub followers: i64,
    pub following: i64,
}

impl AccountRow {
    /// Assemble the domain entity from this row and its samples
    ///
    /// `samples` must already be ordered by `recorded_at` (the queries order
    /// on read), which yields the non-decreasing history invariant.
    #[must_use]
    pub fn into_account(self, samples: &[SampleRow]) -> Account {
        let followers_history = samples
            .iter()
            .map(|s| HistorySample {
                timestamp: s.recorded_at,
                value: s.followers,
            })
            .collect();
        let following_history = samples
            .iter()
            .map(|s| HistorySample {
                timestamp: s.recorded_at,
                value: s.following,
            })
            .collect();

        Account {
            username: self.username,
            avatar: self.avatar,
            followers: CounterHistory {
                current: self.followers_current,
                history: followers_history,
            },
            following: CounterHistory {
                current: self.following_current,
                history: following_history,
            },
        }
    }
}
