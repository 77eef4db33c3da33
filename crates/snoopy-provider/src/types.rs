//! Wire types for the upstream account API

use serde::Deserialize;

use snoopy_common::ZeroCountPolicy;
use snoopy_core::ResolvedAccount;

/// Account payload as returned by the upstream lookup endpoint
///
/// Counts are optional on the wire: the upstream omits them for accounts it
/// cannot resolve. "Absent" and "zero" are distinct states, and only the
/// zero-count policy decides whether zero resolves.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountPayload {
    pub screen_name: String,
    pub followers_count: Option<i64>,
    pub friends_count: Option<i64>,
    pub profile_image_url_https: Option<String>,
}

impl AccountPayload {
    /// Convert into a resolution, applying the zero-count policy
    ///
    /// Returns `None` when a count is absent, or when a count is zero and
    /// the policy is [`ZeroCountPolicy::Drop`].
    #[must_use]
    pub fn resolve(self, policy: ZeroCountPolicy) -> Option<ResolvedAccount> {
        let followers = self.followers_count?;
        let following = self.friends_count?;

        if policy == ZeroCountPolicy::Drop && (followers == 0 || following == 0) {
            return None;
        }

        Some(ResolvedAccount {
            username: self.screen_name,
            followers,
            following,
            avatar: self.profile_image_url_https.unwrap_or_default(),
        })
    }
}
