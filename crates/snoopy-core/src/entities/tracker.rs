//! Tracked user entity - who tracks which accounts

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A dashboard user and the set of usernames they track
///
/// Identified by the email the session carries. The tracked list has set
/// semantics: adding an already-tracked username is rejected, removing an
/// untracked one is a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedUser {
    pub email: String,
    pub accounts: BTreeSet<String>,
}

impl TrackedUser {
    /// Create a user with an empty tracked set
    #[must_use]
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            accounts: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn tracks(&self, username: &str) -> bool {
        self.accounts.contains(username)
    }
}
