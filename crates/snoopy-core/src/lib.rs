//! # snoopy-core
//!
//! Domain layer containing entities, repository/provider traits, and domain errors.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{Account, CounterHistory, HistorySample, ResolvedAccount, TrackedUser};
pub use error::DomainError;
pub use traits::{AccountProvider, AccountRepository, RepoResult, TrackedUserRepository};
