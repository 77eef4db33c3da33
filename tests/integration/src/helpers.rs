//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers over in-memory fixtures and
//! making HTTP requests against them.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU16, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use snoopy_api::{create_app, AppState};
use snoopy_common::{
    AppConfig, AppSettings, CorsConfig, DatabaseConfig, Environment, ProviderConfig, RefreshConfig,
    ServerConfig, SessionConfig, SessionVerifier, ZeroCountPolicy,
};
use snoopy_service::ServiceContextBuilder;

use crate::fixtures::{InMemoryAccountRepository, InMemoryTrackedUserRepository, ScriptedProvider};

/// Shared HS256 secret used by every test server
pub const TEST_SESSION_SECRET: &str = "integration-test-session-secret";

/// Shared refresh-trigger secret used by every test server
pub const TEST_REFRESH_SECRET: &str = "integration-test-refresh-secret";

/// Counter for unique test ports
static PORT_COUNTER: AtomicU16 = AtomicU16::new(19000);

/// Get a unique port for testing
pub fn get_test_port() -> u16 {
    PORT_COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Test server instance that manages lifecycle
///
/// The fixture handles stay accessible so tests can seed state directly and
/// assert on what the API left behind.
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pub accounts: Arc<InMemoryAccountRepository>,
    pub tracked: Arc<InMemoryTrackedUserRepository>,
    pub provider: Arc<ScriptedProvider>,
    verifier: Arc<SessionVerifier>,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server over fresh in-memory fixtures
    pub async fn start() -> Result<Self> {
        let port = get_test_port();
        let addr = SocketAddr::from(([127, 0, 0, 1], port));

        let accounts = Arc::new(InMemoryAccountRepository::new());
        let tracked = Arc::new(InMemoryTrackedUserRepository::new());
        let provider = Arc::new(ScriptedProvider::new());
        let verifier = Arc::new(SessionVerifier::new(TEST_SESSION_SECRET, 3600));

        let service_context = ServiceContextBuilder::new()
            .account_repo(accounts.clone())
            .tracked_repo(tracked.clone())
            .provider(provider.clone())
            .session_verifier(verifier.clone())
            .build()
            .map_err(|e| anyhow::anyhow!("Context error: {}", e))?;

        let state = AppState::new(service_context, test_config(port));
        let app = create_app(state);

        // Bind to port
        let listener = TcpListener::bind(addr).await?;
        let actual_addr = listener.local_addr()?;

        // Spawn server task
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // Wait for server to be ready
        tokio::time::sleep(Duration::from_millis(100)).await;

        // Create HTTP client
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr: actual_addr,
            client,
            accounts,
            tracked,
            provider,
            verifier,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Mint a valid session token for the given identity
    pub fn session_token(&self, email: &str, name: &str) -> String {
        self.verifier
            .mint(email, name, None)
            .expect("Failed to mint session token")
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a GET request with a session token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).json(body).send().await?)
    }

    /// Make a POST request with a session token
    pub async fn post_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", token))
            .json(body)
            .send()
            .await?)
    }

    /// Make a bare POST request (no body, no headers)
    pub async fn post_empty(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).send().await?)
    }

    /// Trigger the refresh endpoint with the given raw authorization value
    ///
    /// The trigger uses the header verbatim, without a bearer scheme.
    pub async fn post_refresh(&self, secret: &str) -> Result<Response> {
        let url = format!("{}/api/v1/refresh", self.base_url());
        Ok(self
            .client
            .post(&url)
            .header("authorization", secret)
            .send()
            .await?)
    }
}

/// Create a test configuration
///
/// The database section is never used: test servers are built over in-memory
/// repositories rather than through `create_app_state`.
pub fn test_config(port: u16) -> AppConfig {
    AppConfig {
        app: AppSettings {
            name: "snoopy-test".to_string(),
            env: Environment::Development,
        },
        api: ServerConfig {
            host: "127.0.0.1".to_string(),
            port,
        },
        database: DatabaseConfig {
            url: "postgresql://unused".to_string(),
            max_connections: 1,
            min_connections: 1,
        },
        provider: ProviderConfig {
            base_url: "http://provider.invalid".to_string(),
            api_token: "unused".to_string(),
            zero_count_policy: ZeroCountPolicy::Accept,
        },
        session: SessionConfig {
            secret: TEST_SESSION_SECRET.to_string(),
            max_age: 3600,
        },
        refresh: RefreshConfig {
            secret: TEST_REFRESH_SECRET.to_string(),
        },
        cors: CorsConfig::default(),
    }
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(response: Response, expected_status: StatusCode) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
