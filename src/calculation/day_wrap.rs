//! Minute arithmetic around the 24-hour clock.
//!
//! Schedule times carry no date, so any span or difference between them is
//! taken modulo one day. These helpers put the results back in range.

use crate::models::{HALF_DAY_MINUTES, MINUTES_PER_DAY};

/// Maps a span onto `0..1440`, treating a negative span as one that runs
/// past midnight into the next day.
///
/// # Example
///
/// ```
/// use punch_planner::calculation::wrap_forward;
///
/// assert_eq!(wrap_forward(30), 30);
/// // 11:00 PM to 1:00 AM
/// assert_eq!(wrap_forward(60 - 23 * 60), 120);
/// ```
pub fn wrap_forward(minutes: i32) -> i32 {
    minutes.rem_euclid(i32::from(MINUTES_PER_DAY))
}

/// Reduces a signed difference between two clock times to the shorter way
/// round the clock.
///
/// Inputs are differences of two times of day, so they lie strictly inside
/// one day either way. Anything beyond twelve hours is moved a day in the
/// opposite direction; exactly twelve hours keeps its sign.
///
/// # Example
///
/// ```
/// use punch_planner::calculation::canonical_delta;
///
/// assert_eq!(canonical_delta(30), 30);
/// // 11:30 PM moved to 12:15 AM is 45 minutes later, not 23h15 earlier
/// assert_eq!(canonical_delta(15 - (23 * 60 + 30)), 45);
/// assert_eq!(canonical_delta(23 * 60), -60);
/// assert_eq!(canonical_delta(-720), -720);
/// ```
pub fn canonical_delta(delta: i32) -> i32 {
    let day = i32::from(MINUTES_PER_DAY);
    if delta > HALF_DAY_MINUTES {
        delta - day
    } else if delta < -HALF_DAY_MINUTES {
        delta + day
    } else {
        delta
    }
}
