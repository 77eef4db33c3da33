//! # snoopy-db
//!
//! Database layer implementing the repository traits with PostgreSQL via SQLx.
//!
//! Accounts are stored as a current-values row plus an append-only samples
//! table; one refresh outcome (current values + history sample) commits in a
//! single transaction.

pub mod models;
pub mod pool;
pub mod repositories;

/// Run the embedded schema migrations against the given pool
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!().run(pool).await
}

// Re-export commonly used types
pub use pool::{create_pool, DatabaseConfig, PgPool};
pub use repositories::{PgAccountRepository, PgTrackedUserRepository};
