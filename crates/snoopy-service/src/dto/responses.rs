//! Response DTOs for API endpoints

use chrono::{DateTime, Utc};
use serde::Serialize;

use snoopy_core::{Account, CounterHistory, HistorySample};

/// One chart point; consumed verbatim by the line-chart rendering
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HistoryPointResponse {
    pub timestamp: i64,
    pub value: i64,
}

impl From<&HistorySample> for HistoryPointResponse {
    fn from(sample: &HistorySample) -> Self {
        Self {
            timestamp: sample.timestamp,
            value: sample.value,
        }
    }
}

/// A counter with its ordered history series
#[derive(Debug, Clone, Serialize)]
pub struct CounterSeriesResponse {
    pub current: i64,
    pub history: Vec<HistoryPointResponse>,
}

impl From<&CounterHistory> for CounterSeriesResponse {
    fn from(counter: &CounterHistory) -> Self {
        Self {
            current: counter.current,
            history: counter.history.iter().map(Into::into).collect(),
        }
    }
}

/// Account snapshot with both counter series
#[derive(Debug, Clone, Serialize)]
pub struct AccountResponse {
    pub username: String,
    pub avatar: String,
    pub followers: CounterSeriesResponse,
    pub following: CounterSeriesResponse,
}

impl From<&Account> for AccountResponse {
    fn from(account: &Account) -> Self {
        Self {
            username: account.username.clone(),
            avatar: account.avatar.clone(),
            followers: (&account.followers).into(),
            following: (&account.following).into(),
        }
    }
}

/// Refresh trigger acknowledgment
///
/// Reports overall success even when individual accounts were dropped; the
/// message carries the batch counts for the cron log.
#[derive(Debug, Clone, Serialize)]
pub struct RefreshAck {
    pub success: bool,
    pub message: String,
}

impl RefreshAck {
    #[must_use]
    pub fn completed(updated: usize, dropped: usize) -> Self {
        Self {
            success: true,
            message: format!(
                "Successfully updated account statistics ({updated} updated, {dropped} dropped)"
            ),
        }
    }
}

/// Untrack acknowledgment
#[derive(Debug, Clone, Serialize)]
pub struct UntrackAck {
    pub message: String,
}

impl UntrackAck {
    #[must_use]
    pub fn done() -> Self {
        Self {
            message: "Successfully updated user".to_string(),
        }
    }
}

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    #[must_use]
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    #[must_use]
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}
