//! Test fixtures and data generators
//!
//! In-memory implementations of the storage and provider ports, plus
//! response shapes for deserializing API bodies.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Mutex;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use snoopy_core::traits::{AccountProvider, AccountRepository, RepoResult, TrackedUserRepository};
use snoopy_core::{Account, DomainError, HistorySample, ResolvedAccount, TrackedUser};

// ============================================================================
// In-memory repositories
// ============================================================================

/// Account store backed by a map, mirroring the relational layout:
/// current values plus an append-only sample list per counter
#[derive(Default)]
pub struct InMemoryAccountRepository {
    accounts: Mutex<BTreeMap<String, Account>>,
    write_failures: Mutex<BTreeSet<String>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an account directly, bypassing the API
    pub fn insert(&self, account: Account) {
        self.accounts
            .lock()
            .unwrap()
            .insert(account.username.clone(), account);
    }

    /// Read an account directly, bypassing the API
    pub fn get(&self, username: &str) -> Option<Account> {
        self.accounts.lock().unwrap().get(username).cloned()
    }

    /// Make every `record_sample` for the given username fail
    pub fn fail_writes_for(&self, username: &str) {
        self.write_failures
            .lock()
            .unwrap()
            .insert(username.to_string());
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn list_usernames(&self) -> RepoResult<Vec<String>> {
        Ok(self.accounts.lock().unwrap().keys().cloned().collect())
    }

    async fn find_by_username(&self, username: &str) -> RepoResult<Option<Account>> {
        Ok(self.accounts.lock().unwrap().get(username).cloned())
    }

    async fn find_many(&self, usernames: &[String]) -> RepoResult<Vec<Account>> {
        let accounts = self.accounts.lock().unwrap();
        Ok(usernames
            .iter()
            .filter_map(|username| accounts.get(username).cloned())
            .collect())
    }

    async fn create_if_absent(&self, account: &Account) -> RepoResult<bool> {
        let mut accounts = self.accounts.lock().unwrap();
        if accounts.contains_key(&account.username) {
            return Ok(false);
        }
        accounts.insert(account.username.clone(), account.clone());
        Ok(true)
    }

    async fn record_sample(&self, resolved: &ResolvedAccount, timestamp: i64) -> RepoResult<()> {
        if self.write_failures.lock().unwrap().contains(&resolved.username) {
            return Err(DomainError::DatabaseError(format!(
                "write failed for {}",
                resolved.username
            )));
        }

        let mut accounts = self.accounts.lock().unwrap();
        let account = accounts
            .get_mut(&resolved.username)
            .ok_or_else(|| DomainError::AccountNotFound(resolved.username.clone()))?;

        account.avatar = resolved.avatar.clone();
        account.followers.current = resolved.followers;
        account.followers.history.push(HistorySample {
            timestamp,
            value: resolved.followers,
        });
        account.following.current = resolved.following;
        account.following.history.push(HistorySample {
            timestamp,
            value: resolved.following,
        });
        Ok(())
    }

    async fn ping(&self) -> RepoResult<()> {
        Ok(())
    }
}

/// Tracked-set store keyed by email
#[derive(Default)]
pub struct InMemoryTrackedUserRepository {
    users: Mutex<BTreeMap<String, BTreeSet<String>>>,
}

impl InMemoryTrackedUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TrackedUserRepository for InMemoryTrackedUserRepository {
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<TrackedUser>> {
        Ok(self.users.lock().unwrap().get(email).map(|accounts| TrackedUser {
            email: email.to_string(),
            accounts: accounts.clone(),
        }))
    }

    async fn track(&self, email: &str, username: &str) -> RepoResult<()> {
        let mut users = self.users.lock().unwrap();
        let accounts = users.entry(email.to_string()).or_default();
        if !accounts.insert(username.to_string()) {
            return Err(DomainError::AlreadyTracked(username.to_string()));
        }
        Ok(())
    }

    async fn untrack(&self, email: &str, username: &str) -> RepoResult<()> {
        if let Some(accounts) = self.users.lock().unwrap().get_mut(email) {
            accounts.remove(username);
        }
        Ok(())
    }
}

// ============================================================================
// Scripted provider
// ============================================================================

/// Account provider whose lookups are scripted per test
///
/// Usernames without a script resolve to [`DomainError::Unresolvable`],
/// matching how the HTTP provider treats unknown accounts.
#[derive(Default)]
pub struct ScriptedProvider {
    responses: Mutex<HashMap<String, ResolvedAccount>>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a successful lookup for the given username
    pub fn resolve_to(&self, username: &str, followers: i64, following: i64) {
        self.resolve_with_echo(username, username, followers, following);
    }

    /// Script a lookup whose response echoes a different username
    ///
    /// Real providers canonicalize casing and follow renames, so the echoed
    /// name can differ from the queried one.
    pub fn resolve_with_echo(&self, queried: &str, echoed: &str, followers: i64, following: i64) {
        self.responses.lock().unwrap().insert(
            queried.to_string(),
            ResolvedAccount {
                username: echoed.to_string(),
                followers,
                following,
                avatar: format!("https://img.example/{echoed}.png"),
            },
        );
    }

    /// Make the given username unresolvable again
    pub fn forget(&self, username: &str) {
        self.responses.lock().unwrap().remove(username);
    }
}

#[async_trait]
impl AccountProvider for ScriptedProvider {
    async fn lookup(&self, username: &str) -> Result<ResolvedAccount, DomainError> {
        self.responses
            .lock()
            .unwrap()
            .get(username)
            .cloned()
            .ok_or_else(|| DomainError::Unresolvable(username.to_string()))
    }
}

// ============================================================================
// Request and response shapes
// ============================================================================

/// Track / untrack request body
#[derive(Debug, Serialize)]
pub struct UsernameRequest {
    pub username: String,
}

impl UsernameRequest {
    pub fn new(username: &str) -> Self {
        Self {
            username: username.to_string(),
        }
    }
}

/// One chart point
#[derive(Debug, Deserialize)]
pub struct HistoryPointJson {
    pub timestamp: i64,
    pub value: i64,
}

/// A counter with its history series
#[derive(Debug, Deserialize)]
pub struct CounterSeriesJson {
    pub current: i64,
    pub history: Vec<HistoryPointJson>,
}

/// Account response body
#[derive(Debug, Deserialize)]
pub struct AccountJson {
    pub username: String,
    pub avatar: String,
    pub followers: CounterSeriesJson,
    pub following: CounterSeriesJson,
}

/// Refresh trigger acknowledgment body
#[derive(Debug, Deserialize)]
pub struct RefreshAckJson {
    pub success: bool,
    pub message: String,
}

/// Untrack acknowledgment body
#[derive(Debug, Deserialize)]
pub struct UntrackAckJson {
    pub message: String,
}

/// Error response body
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
