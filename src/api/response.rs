//! Response types for the punch planner API.
//!
//! This module defines the success bodies, the error response structures and
//! the error handling for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::calculation::format_time_difference;
use crate::error::PlannerError;
use crate::models::{ScheduleInputs, TimeDifferenceResult};

/// Response body for the `/calculate` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// The calculation result record.
    pub result: TimeDifferenceResult,
    /// The punch-in shift as a sentence, for valid results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// The punch-out shift as a sentence, when one was projected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_summary: Option<String>,
}

impl From<TimeDifferenceResult> for CalculationResponse {
    fn from(result: TimeDifferenceResult) -> Self {
        let summary = result
            .is_valid
            .then(|| format_time_difference(result.minutes, result.is_earlier));
        let end_summary = result
            .end_time_difference
            .zip(result.end_is_earlier)
            .map(|(minutes, is_earlier)| format_time_difference(minutes, is_earlier));

        Self {
            result,
            summary,
            end_summary,
        }
    }
}

/// Response body for the `/schedule` endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleResponse {
    /// The saved schedule fields.
    pub inputs: ScheduleInputs,
    /// Whether the required fields are all filled in.
    pub ready: bool,
}

impl From<ScheduleInputs> for ScheduleResponse {
    fn from(inputs: ScheduleInputs) -> Self {
        let ready = inputs.is_ready_to_calculate();
        Self { inputs, ready }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<PlannerError> for ApiErrorResponse {
    fn from(error: PlannerError) -> Self {
        match error {
            PlannerError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            PlannerError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            PlannerError::StateWriteError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "STATE_ERROR",
                    "Failed to save schedule",
                    format!("{}: {}", path, message),
                ),
            },
            PlannerError::InvalidTimeSelection { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    format!("Invalid time selection for '{}'", field),
                    message,
                ),
            },
        }
    }
}
