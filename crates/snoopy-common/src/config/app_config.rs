//! Application configuration structs
//!
//! Loads configuration from environment variables.

use serde::Deserialize;
use std::env;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub provider: ProviderConfig,
    pub session: SessionConfig,
    pub refresh: RefreshConfig,
    pub cors: CorsConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

/// External account provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    /// Base URL of the social-graph API
    pub base_url: String,
    /// Opaque bearer token; no format beyond "non-empty string"
    pub api_token: String,
    #[serde(default)]
    pub zero_count_policy: ZeroCountPolicy,
}

/// How lookups with a defined-but-zero follower/following count are treated
///
/// Upstream responses can carry a defined-but-zero count. `accept` treats
/// zero as a valid resolution; `drop` treats it like an absent count and
/// skips the account for that cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ZeroCountPolicy {
    #[default]
    Accept,
    Drop,
}

/// Session token verification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Shared HS256 secret with the OAuth provider that mints session tokens
    pub secret: String,
    /// Session lifetime in seconds (only relevant when minting locally)
    #[serde(default = "default_session_max_age")]
    pub max_age: i64,
}

/// Refresh trigger configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshConfig {
    /// Shared secret expected in the `authorization` header of the cron call
    pub secret: String,
}

/// CORS configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

// Default value functions
fn default_app_name() -> String {
    "snoopy".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_session_max_age() -> i64 {
    2_592_000 // 30 days
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: env::var("APP_ENV")
                    .ok()
                    .and_then(|s| match s.to_lowercase().as_str() {
                        "production" => Some(Environment::Production),
                        "staging" => Some(Environment::Staging),
                        "development" => Some(Environment::Development),
                        _ => None,
                    })
                    .unwrap_or_default(),
            },
            api: ServerConfig {
                host: env::var("API_HOST").unwrap_or_else(|_| default_host()),
                port: env::var("API_PORT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .ok_or(ConfigError::MissingVar("API_PORT"))?,
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_max_connections),
                min_connections: env::var("DATABASE_MIN_CONNECTIONS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_min_connections),
            },
            provider: ProviderConfig {
                base_url: env::var("PROVIDER_BASE_URL")
                    .map_err(|_| ConfigError::MissingVar("PROVIDER_BASE_URL"))?,
                api_token: env::var("PROVIDER_API_TOKEN")
                    .map_err(|_| ConfigError::MissingVar("PROVIDER_API_TOKEN"))?,
                zero_count_policy: match env::var("ZERO_COUNT_POLICY").ok().as_deref() {
                    None => ZeroCountPolicy::default(),
                    Some("accept") => ZeroCountPolicy::Accept,
                    Some("drop") => ZeroCountPolicy::Drop,
                    Some(other) => {
                        return Err(ConfigError::InvalidValue(
                            "ZERO_COUNT_POLICY",
                            other.to_string(),
                        ))
                    }
                },
            },
            session: SessionConfig {
                secret: env::var("SESSION_SECRET")
                    .map_err(|_| ConfigError::MissingVar("SESSION_SECRET"))?,
                max_age: env::var("SESSION_MAX_AGE")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_session_max_age),
            },
            refresh: RefreshConfig {
                secret: env::var("REFRESH_SECRET")
                    .map_err(|_| ConfigError::MissingVar("REFRESH_SECRET"))?,
            },
            cors: CorsConfig {
                allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                    .ok()
                    .map(|s| s.split(',').map(str::trim).map(String::from).collect())
                    .unwrap_or_default(),
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
