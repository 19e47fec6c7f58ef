//! The persisted schedule form fields.

use serde::{Deserialize, Serialize};

/// The raw values of the four schedule fields.
///
/// Empty strings stand for fields that have not been filled in yet. This is
/// the state that survives between sessions; see
/// [`ScheduleStore`](crate::config::ScheduleStore).
///
/// # Example
///
/// ```
/// use punch_planner::models::ScheduleInputs;
///
/// let inputs = ScheduleInputs {
///     start_time: "9:00 AM".to_string(),
///     original_arrival: "9:30 AM".to_string(),
///     new_arrival: "10:00 AM".to_string(),
///     end_time: String::new(),
/// };
/// assert!(inputs.is_ready_to_calculate());
/// assert_eq!(inputs.end_time(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScheduleInputs {
    /// The usual punch-in time.
    #[serde(default)]
    pub start_time: String,
    /// The usual arrival time.
    #[serde(default)]
    pub original_arrival: String,
    /// The desired arrival time.
    #[serde(default)]
    pub new_arrival: String,
    /// The usual punch-out time. Optional.
    #[serde(default)]
    pub end_time: String,
}

impl ScheduleInputs {
    /// True once the three required fields all hold something.
    pub fn is_ready_to_calculate(&self) -> bool {
        !self.start_time.is_empty()
            && !self.original_arrival.is_empty()
            && !self.new_arrival.is_empty()
    }

    /// The end time, or `None` when the field is empty.
    pub fn end_time(&self) -> Option<&str> {
        (!self.end_time.is_empty()).then_some(self.end_time.as_str())
    }
}
