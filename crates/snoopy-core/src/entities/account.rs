//! Account entity - a tracked social account and its counter time series

use serde::{Deserialize, Serialize};

/// One sample of a counter at a point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistorySample {
    /// Epoch milliseconds; every sample of one refresh batch shares this value
    pub timestamp: i64,
    pub value: i64,
}

/// A counter together with its append-only history
///
/// `history` is ordered by insertion, which coincides with chronological
/// order because appends carry the batch timestamp. After a successful
/// refresh `current` equals the value of the newest sample.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterHistory {
    pub current: i64,
    pub history: Vec<HistorySample>,
}

impl CounterHistory {
    /// Create a counter with a known current value and no history yet
    #[must_use]
    pub fn starting_at(current: i64) -> Self {
        Self {
            current,
            history: Vec::new(),
        }
    }

    /// The most recently appended sample, if any
    #[must_use]
    pub fn latest(&self) -> Option<&HistorySample> {
        self.history.last()
    }

    /// Whether the history timestamps are non-decreasing
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        self.history
            .windows(2)
            .all(|w| w[0].timestamp <= w[1].timestamp)
    }
}

/// Account entity keyed by its unique, stable username
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub username: String,
    /// Overwritten on every successful refresh
    pub avatar: String,
    pub followers: CounterHistory,
    pub following: CounterHistory,
}

impl Account {
    /// Create a new account from a provider resolution, with empty histories
    ///
    /// This is the shape written on first track; the first refresh appends
    /// the first history sample.
    #[must_use]
    pub fn from_resolution(resolved: &ResolvedAccount) -> Self {
        Self {
            username: resolved.username.clone(),
            avatar: resolved.avatar.clone(),
            followers: CounterHistory::starting_at(resolved.followers),
            following: CounterHistory::starting_at(resolved.following),
        }
    }
}

/// A successful lookup against the external account provider
///
/// Both counts are present by construction; "count absent" lookups never
/// produce this type (they fail at the provider boundary instead).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAccount {
    pub username: String,
    pub followers: i64,
    pub following: i64,
    pub avatar: String,
}
