//! Integration test utilities for the snoopy server
//!
//! This crate provides helpers for running end-to-end tests against the
//! REST API over in-memory storage and a scripted account provider, so the
//! tests run without PostgreSQL or the external social-graph API.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
