//! Session token verification
//!
//! Sessions are minted by the external OAuth provider and presented here as
//! HS256 bearer tokens signed with a shared secret. This module only verifies;
//! minting exists for tests and local tooling.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Claims carried by a session token
///
/// Mirrors what the OAuth provider knows about the user: email (the stable
/// key for tracked-account lists), display name, and avatar URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject: the user's email
    pub sub: String,
    /// Display name
    pub name: String,
    /// Avatar URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl SessionClaims {
    #[must_use]
    pub fn email(&self) -> &str {
        &self.sub
    }

    /// Check if the session is expired
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// Verifies session tokens against the shared OAuth secret
#[derive(Clone)]
pub struct SessionVerifier {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    session_expiry: i64,
}

impl SessionVerifier {
    /// Create a verifier with the given shared secret and session lifetime
    /// in seconds (used only when minting)
    #[must_use]
    pub fn new(secret: &str, session_expiry: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            session_expiry,
        }
    }

    /// Decode and validate a session token
    ///
    /// # Errors
    /// Returns an error if the token is malformed, has a bad signature, or
    /// is expired.
    pub fn verify(&self, token: &str) -> Result<SessionClaims, SessionError> {
        let data = decode::<SessionClaims>(token, &self.decoding_key, &Validation::default())
            .map_err(|_| SessionError::InvalidToken)?;

        Ok(data.claims)
    }

    /// Mint a session token for the given identity
    ///
    /// Production tokens come from the OAuth provider; this exists for tests
    /// and local tooling that need a valid session.
    ///
    /// # Errors
    /// Returns an error if encoding fails.
    pub fn mint(
        &self,
        email: &str,
        name: &str,
        picture: Option<String>,
    ) -> Result<String, SessionError> {
        let now = Utc::now();
        let claims = SessionClaims {
            sub: email.to_string(),
            name: name.to_string(),
            picture,
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.session_expiry)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| SessionError::EncodingFailed)
    }
}

impl std::fmt::Debug for SessionVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionVerifier")
            .field("session_expiry", &self.session_expiry)
            .finish()
    }
}

/// Session verification errors
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Invalid session token")]
    InvalidToken,

    #[error("Failed to encode session token")]
    EncodingFailed,
}
