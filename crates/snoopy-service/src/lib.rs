//! # snoopy-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    AccountResponse, CounterSeriesResponse, HealthResponse, HistoryPointResponse,
    ReadinessResponse, RefreshAck, TrackAccountRequest, UntrackAccountRequest, UntrackAck,
};
pub use services::{
    RefreshOutcome, RefreshService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, TrackingService,
};
