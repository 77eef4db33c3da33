//! Domain entities

mod account;
mod tracker;

pub use account::{Account, CounterHistory, HistorySample, ResolvedAccount};
pub use tracker::TrackedUser;
