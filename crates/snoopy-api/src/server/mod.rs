//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use snoopy_common::{AppConfig, AppError, SessionVerifier};
use snoopy_db::{create_pool, run_migrations, PgAccountRepository, PgTrackedUserRepository};
use snoopy_provider::HttpAccountProvider;
use snoopy_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router().merge(health_routes());
    let router = apply_middleware(
        router,
        &state.config().cors,
        state.config().app.env.is_production(),
    );
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = snoopy_db::DatabaseConfig::from(&config.database);
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Apply pending migrations
    run_migrations(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("Database migrations applied");

    // Create repositories
    let account_repo = Arc::new(PgAccountRepository::new(pool.clone()));
    let tracked_repo = Arc::new(PgTrackedUserRepository::new(pool));

    // Create the upstream account provider
    let provider = Arc::new(
        HttpAccountProvider::new(config.provider.clone())
            .map_err(|e| AppError::ExternalService(e.to_string()))?,
    );

    // Create the session verifier
    let session_verifier = Arc::new(SessionVerifier::new(
        &config.session.secret,
        config.session.max_age,
    ));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .account_repo(account_repo)
        .tracked_repo(tracked_repo)
        .provider(provider)
        .session_verifier(session_verifier)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.api.port));

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
