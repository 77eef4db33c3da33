//! Request handlers
//!
//! HTTP handlers organized by domain.

pub mod accounts;
pub mod health;
pub mod refresh;
