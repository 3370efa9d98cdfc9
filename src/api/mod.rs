//! HTTP API module for the shift pay engine.
//!
//! This module provides the REST endpoints for shift classification,
//! monthly aggregation, work record storage and the dashboard rollups.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AggregateRequest, AttendanceDate, ClassifyRequest, IncomeReportRequest, RollupQuery,
    SaveWorkRecordRequest, ShiftHoursRequest, StreakRequest,
};
pub use response::{
    ApiError, ApiErrorResponse, ClassifyResponse, HealthResponse, HoursResponse, StreakResponse,
};
pub use state::AppState;
