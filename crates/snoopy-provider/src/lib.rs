//! # snoopy-provider
//!
//! HTTP client for the external social-graph API, implementing the
//! `AccountProvider` port from `snoopy-core`.

mod client;
mod types;

pub use client::HttpAccountProvider;
pub use types::AccountPayload;
