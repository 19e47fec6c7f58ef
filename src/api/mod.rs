//! HTTP API module for the punch planner.
//!
//! This module provides the REST API endpoints for projecting a schedule
//! shift and for reading and saving the current schedule fields.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, TimeFieldInput};
pub use response::{ApiError, ApiErrorResponse, CalculationResponse, ScheduleResponse};
pub use state::AppState;
