//! Request types for the punch planner API.
//!
//! This module defines the JSON request structures for the `/calculate` and
//! `/schedule` endpoints.

use serde::{Deserialize, Serialize};

use crate::error::PlannerResult;
use crate::models::{ScheduleInputs, TimeSelection};

/// A schedule field as sent by a client.
///
/// Either a raw `H:MM AM|PM` string or an hour/minute/period selection that
/// is assembled into one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimeFieldInput {
    /// A raw time string, passed through untouched.
    Raw(String),
    /// A selection assembled into a raw string.
    Selection(TimeSelection),
}

impl Default for TimeFieldInput {
    fn default() -> Self {
        TimeFieldInput::Raw(String::new())
    }
}

impl TimeFieldInput {
    /// Converts to the raw string, empty when a selection is incomplete.
    pub fn into_raw(self, field: &str) -> PlannerResult<String> {
        match self {
            TimeFieldInput::Raw(raw) => Ok(raw),
            TimeFieldInput::Selection(selection) => {
                Ok(selection.assemble(field)?.unwrap_or_default())
            }
        }
    }
}

/// Request body for the `/calculate` endpoint.
///
/// Missing fields are treated as empty; the calculation reports which
/// required one is unusable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The usual punch-in time.
    #[serde(default)]
    pub start_time: TimeFieldInput,
    /// The usual arrival time.
    #[serde(default)]
    pub original_arrival: TimeFieldInput,
    /// The desired arrival time.
    #[serde(default)]
    pub new_arrival: TimeFieldInput,
    /// The usual punch-out time.
    #[serde(default)]
    pub end_time: Option<TimeFieldInput>,
    /// Also save these inputs as the current schedule.
    #[serde(default)]
    pub remember: bool,
}

impl CalculationRequest {
    /// Resolves every field to its raw string.
    pub fn into_inputs(self) -> PlannerResult<ScheduleInputs> {
        Ok(ScheduleInputs {
            start_time: self.start_time.into_raw("start_time")?,
            original_arrival: self.original_arrival.into_raw("original_arrival")?,
            new_arrival: self.new_arrival.into_raw("new_arrival")?,
            end_time: match self.end_time {
                Some(end) => end.into_raw("end_time")?,
                None => String::new(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlannerError;
    use crate::models::Period;

    #[test]
    fn test_deserialize_raw_strings() {
        let json = r#"{
            "start_time": "9:00 AM",
            "original_arrival": "9:30 AM",
            "new_arrival": "10:00 AM",
            "end_time": "5:00 PM"
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert!(!request.remember);

        let inputs = request.into_inputs().unwrap();
        assert_eq!(inputs.start_time, "9:00 AM");
        assert_eq!(inputs.end_time, "5:00 PM");
    }

    #[test]
    fn test_deserialize_selections() {
        let json = r#"{
            "start_time": {"hour": 9, "minute": 0, "period": "AM"},
            "original_arrival": {"hour": 9, "minute": 30},
            "new_arrival": "10:00 AM",
            "end_time": {"hour": 5, "minute": 0, "period": "PM"},
            "remember": true
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert!(request.remember);
        assert_eq!(
            request.start_time,
            TimeFieldInput::Selection(TimeSelection {
                hour: Some(9),
                minute: Some(0),
                period: Period::Am,
            })
        );

        let inputs = request.into_inputs().unwrap();
        assert_eq!(inputs.start_time, "9:00 AM");
        assert_eq!(inputs.original_arrival, "9:30 AM");
        assert_eq!(inputs.new_arrival, "10:00 AM");
        assert_eq!(inputs.end_time, "5:00 PM");
    }

    #[test]
    fn test_missing_fields_are_empty() {
        let request: CalculationRequest = serde_json::from_str("{}").unwrap();
        let inputs = request.into_inputs().unwrap();
        assert_eq!(inputs, ScheduleInputs::default());
    }

    #[test]
    fn test_incomplete_selection_is_empty() {
        let json = r#"{"start_time": {"hour": 9}}"#;
        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.into_inputs().unwrap().start_time, "");
    }

    #[test]
    fn test_out_of_range_selection_names_field() {
        let json = r#"{"new_arrival": {"hour": 14, "minute": 0, "period": "PM"}}"#;
        let request: CalculationRequest = serde_json::from_str(json).unwrap();

        match request.into_inputs() {
            Err(PlannerError::InvalidTimeSelection { field, .. }) => {
                assert_eq!(field, "new_arrival");
            }
            other => panic!("Expected InvalidTimeSelection, got {:?}", other),
        }
    }
}
