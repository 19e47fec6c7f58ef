//! Error types for the punch planner.
//!
//! Two families live here. [`PlannerError`] covers the surroundings of the
//! calculation (configuration, persisted schedule state, assembling time
//! selections) and is returned through [`PlannerResult`]. [`ValidationError`]
//! names the required field that failed to parse; the engine never returns it
//! as an `Err`, it is rendered into the result record instead.

use thiserror::Error;

/// The main error type for the punch planner.
///
/// # Example
///
/// ```
/// use punch_planner::error::PlannerError;
///
/// let error = PlannerError::ConfigNotFound {
///     path: "/missing/planner.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/planner.yaml");
/// ```
#[derive(Debug, Error)]
pub enum PlannerError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// A YAML file (configuration or saved schedule) could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The saved schedule could not be written back to disk.
    #[error("Failed to write schedule state '{path}': {message}")]
    StateWriteError {
        /// The state file path.
        path: String,
        /// A description of the I/O or serialization failure.
        message: String,
    },

    /// An hour/minute/period selection was out of range.
    #[error("Invalid time selection for '{field}': {message}")]
    InvalidTimeSelection {
        /// The schedule field the selection was meant for.
        field: String,
        /// A description of what was out of range.
        message: String,
    },
}

/// A type alias for Results that return PlannerError.
pub type PlannerResult<T> = Result<T, PlannerError>;

/// The required input that failed to parse first.
///
/// The display strings are the user-facing messages carried verbatim in
/// [`TimeDifferenceResult::error`](crate::models::TimeDifferenceResult).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The usual punch-in time did not parse.
    #[error("Invalid start time")]
    StartTime,
    /// The usual arrival time did not parse.
    #[error("Invalid original arrival time")]
    OriginalArrival,
    /// The desired arrival time did not parse.
    #[error("Invalid new arrival time")]
    NewArrival,
}
