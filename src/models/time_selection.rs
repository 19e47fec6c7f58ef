//! Hour/minute/period selections.
//!
//! Schedule fields are usually picked as three separate controls. This module
//! assembles such a selection into the raw `H:MM AM|PM` string the parser
//! accepts.

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, PlannerResult};

use super::Period;

/// One field's hour, minute and AM/PM selection.
///
/// Hour and minute stay `None` until picked; a half-filled selection
/// assembles to no value at all rather than an error.
///
/// # Example
///
/// ```
/// use punch_planner::models::{Period, TimeSelection};
///
/// let selection = TimeSelection {
///     hour: Some(9),
///     minute: Some(5),
///     period: Period::Am,
/// };
/// assert_eq!(selection.assemble("start_time").unwrap(), Some("9:05 AM".to_string()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimeSelection {
    /// The selected hour, 1-12.
    #[serde(default)]
    pub hour: Option<u8>,
    /// The selected minute, 0-59.
    #[serde(default)]
    pub minute: Option<u8>,
    /// The selected period. Defaults to AM.
    #[serde(default)]
    pub period: Period,
}

impl TimeSelection {
    /// Assembles the raw time string for `field`.
    ///
    /// Returns `Ok(None)` while hour or minute is still unselected and an
    /// [`PlannerError::InvalidTimeSelection`] when either is out of range.
    pub fn assemble(&self, field: &str) -> PlannerResult<Option<String>> {
        let (Some(hour), Some(minute)) = (self.hour, self.minute) else {
            return Ok(None);
        };

        if !(1..=12).contains(&hour) {
            return Err(PlannerError::InvalidTimeSelection {
                field: field.to_string(),
                message: format!("hour {} is outside 1-12", hour),
            });
        }
        if minute > 59 {
            return Err(PlannerError::InvalidTimeSelection {
                field: field.to_string(),
                message: format!("minute {} is outside 0-59", minute),
            });
        }

        Ok(Some(format!("{}:{:02} {}", hour, minute, self.period)))
    }

    /// Flips the selection between AM and PM.
    pub fn toggle_period(&mut self) {
        self.period = self.period.toggle();
    }
}
