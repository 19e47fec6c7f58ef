//! HTTP request handlers for the punch planner API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_time_difference;
use crate::models::ScheduleInputs;

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse, CalculationResponse, ScheduleResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/schedule", get(get_schedule_handler).put(put_schedule_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts the schedule fields and returns the projected schedule. An
/// unusable required field is reported inside the result, not as an HTTP
/// error.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let remember = request.remember;
    let inputs = match request.into_inputs() {
        Ok(inputs) => inputs,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid time selection");
            return error_response(err.into());
        }
    };

    let start_time = Instant::now();
    let result = calculate_time_difference(
        &inputs.start_time,
        &inputs.original_arrival,
        &inputs.new_arrival,
        inputs.end_time(),
    );
    let duration = start_time.elapsed();

    match &result.error {
        None => info!(
            correlation_id = %correlation_id,
            minutes = result.minutes,
            is_earlier = result.is_earlier,
            total_difference = ?result.total_difference,
            duration_us = duration.as_micros(),
            "Calculation completed successfully"
        ),
        Some(error) => info!(
            correlation_id = %correlation_id,
            error = %error,
            duration_us = duration.as_micros(),
            "Calculation rejected inputs"
        ),
    }

    if remember {
        if let Err(err) = state.store().write().await.save(&inputs) {
            warn!(correlation_id = %correlation_id, error = %err, "Failed to save schedule");
            return error_response(err.into());
        }
    }

    json_response(StatusCode::OK, CalculationResponse::from(result))
}

/// Handler for GET /schedule endpoint.
///
/// Returns the saved schedule fields and whether they are ready to calculate.
async fn get_schedule_handler(State(state): State<AppState>) -> Response {
    match state.store().read().await.load() {
        Ok(inputs) => json_response(StatusCode::OK, ScheduleResponse::from(inputs)),
        Err(err) => {
            warn!(error = %err, "Failed to load schedule");
            error_response(err.into())
        }
    }
}

/// Handler for PUT /schedule endpoint.
///
/// Replaces the saved schedule fields.
async fn put_schedule_handler(
    State(state): State<AppState>,
    payload: Result<Json<ScheduleInputs>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let inputs = match payload {
        Ok(Json(inputs)) => inputs,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    if let Err(err) = state.store().write().await.save(&inputs) {
        warn!(correlation_id = %correlation_id, error = %err, "Failed to save schedule");
        return error_response(err.into());
    }

    info!(
        correlation_id = %correlation_id,
        ready = inputs.is_ready_to_calculate(),
        "Schedule saved"
    );
    json_response(StatusCode::OK, ScheduleResponse::from(inputs))
}

fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::validation_error(body_text)
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}

fn error_response(api_error: ApiErrorResponse) -> Response {
    json_response(api_error.status, api_error.error)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}
