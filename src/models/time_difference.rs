//! The schedule shift calculation result.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Outcome of one schedule shift calculation.
///
/// When `is_valid` is false only `error` is meaningful and every optional
/// projection field is `None`. When it is true `error` is `None`, the
/// punch-in fields are populated, and the punch-out fields are populated iff
/// a usable end time was supplied.
///
/// Serializes with camelCase keys (`isEarlier`, `newPunchInTime`, ...).
///
/// # Example
///
/// ```
/// use punch_planner::models::TimeDifferenceResult;
/// use punch_planner::error::ValidationError;
///
/// let result = TimeDifferenceResult::invalid(ValidationError::StartTime);
/// assert!(!result.is_valid);
/// assert_eq!(result.error.as_deref(), Some("Invalid start time"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeDifferenceResult {
    /// Size of the punch-in shift in minutes.
    pub minutes: u32,
    /// Whether the new punch-in is earlier than the usual one.
    pub is_earlier: bool,
    /// Whether all required inputs parsed.
    pub is_valid: bool,
    /// The validation message when `is_valid` is false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// The projected punch-in time, e.g. `8:30 AM`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_punch_in_time: Option<String>,
    /// The projected punch-out time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_punch_out_time: Option<String>,
    /// Size of the punch-out shift in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time_difference: Option<u32>,
    /// Whether the new punch-out is earlier than the usual one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_is_earlier: Option<bool>,
    /// `minutes + end_time_difference`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_difference: Option<u32>,
}

impl TimeDifferenceResult {
    /// Builds the result reported when a required input fails to parse.
    pub fn invalid(error: ValidationError) -> Self {
        Self {
            error: Some(error.to_string()),
            ..Self::default()
        }
    }
}
