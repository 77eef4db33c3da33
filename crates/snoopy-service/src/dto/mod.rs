//! Data transfer objects for the API surface

mod requests;
mod responses;

pub use requests::{TrackAccountRequest, UntrackAccountRequest};
pub use responses::{
    AccountResponse, CounterSeriesResponse, HealthChecks, HealthResponse, HistoryPointResponse,
    ReadinessResponse, RefreshAck, UntrackAck,
};
