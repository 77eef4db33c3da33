//! Axum extractors for request handling
//!
//! Custom extractors for session authentication and input validation.

mod session;
mod validated;

pub use session::SessionUser;
pub use validated::ValidatedJson;
