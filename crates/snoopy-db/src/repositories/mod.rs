//! PostgreSQL repository implementations

mod account;
mod error;
mod tracker;

pub use account::PgAccountRepository;
pub use tracker::PgTrackedUserRepository;
