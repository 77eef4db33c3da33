//! Ports: repository and provider traits implemented by the infrastructure layer

mod provider;
mod repositories;

pub use provider::AccountProvider;
pub use repositories::{AccountRepository, RepoResult, TrackedUserRepository};
