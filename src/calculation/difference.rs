//! Schedule shift projection.
//!
//! Given the usual punch-in and arrival times and a desired arrival time, the
//! travel time between punching in and arriving is held constant and the
//! punch-in (and optionally punch-out) is moved to match the new arrival.

use tracing::debug;

use crate::error::ValidationError;
use crate::models::{ClockTime, TimeDifferenceResult};

use super::day_wrap::{canonical_delta, wrap_forward};
use super::parser::parse_time;

/// Calculates the new punch-in (and punch-out) for a new arrival time.
///
/// # Arguments
///
/// * `start_time` - The usual punch-in time
/// * `original_arrival` - The usual arrival time
/// * `new_arrival` - The desired arrival time
/// * `end_time` - The usual punch-out time, if known
///
/// All times are raw `H:MM AM|PM` strings.
///
/// # Returns
///
/// A [`TimeDifferenceResult`]. If one of the three required inputs does not
/// parse the result is invalid and names the first failing field, checked in
/// argument order. An `end_time` that is absent or does not parse only leaves
/// the punch-out fields empty.
///
/// # Behavior
///
/// - Travel time is the span from punch-in to arrival. An arrival that reads
///   earlier than the punch-in is taken to be on the next day.
/// - The new punch-in is the new arrival minus the travel time, on the clock
///   face.
/// - The punch-in shift is the shorter way round the clock from the old
///   punch-in to the new one, so it never exceeds twelve hours.
/// - With an end time, the worked span from punch-in to punch-out is kept and
///   the punch-out moves with the punch-in.
///
/// # Examples
///
/// ## Arriving later
///
/// ```
/// use punch_planner::calculation::calculate_time_difference;
///
/// let result = calculate_time_difference("9:00 AM", "9:30 AM", "10:00 AM", None);
/// assert!(result.is_valid);
/// assert_eq!(result.minutes, 30);
/// assert!(!result.is_earlier);
/// assert_eq!(result.new_punch_in_time.as_deref(), Some("9:30 AM"));
/// ```
///
/// ## With a punch-out time
///
/// ```
/// use punch_planner::calculation::calculate_time_difference;
///
/// let result = calculate_time_difference("9:00 AM", "9:30 AM", "10:00 AM", Some("5:00 PM"));
/// assert_eq!(result.new_punch_out_time.as_deref(), Some("5:30 PM"));
/// assert_eq!(result.end_time_difference, Some(30));
/// assert_eq!(result.total_difference, Some(60));
/// ```
///
/// ## Invalid input
///
/// ```
/// use punch_planner::calculation::calculate_time_difference;
///
/// let result = calculate_time_difference("", "9:30 AM", "10:00 AM", None);
/// assert!(!result.is_valid);
/// assert_eq!(result.error.as_deref(), Some("Invalid start time"));
/// ```
pub fn calculate_time_difference(
    start_time: &str,
    original_arrival: &str,
    new_arrival: &str,
    end_time: Option<&str>,
) -> TimeDifferenceResult {
    match project_schedule(start_time, original_arrival, new_arrival, end_time) {
        Ok(result) => result,
        Err(error) => {
            debug!(%error, "schedule inputs rejected");
            TimeDifferenceResult::invalid(error)
        }
    }
}

fn project_schedule(
    start_time: &str,
    original_arrival: &str,
    new_arrival: &str,
    end_time: Option<&str>,
) -> Result<TimeDifferenceResult, ValidationError> {
    let start = parse_time(start_time).ok_or(ValidationError::StartTime)?;
    let original = parse_time(original_arrival).ok_or(ValidationError::OriginalArrival)?;
    let arrival = parse_time(new_arrival).ok_or(ValidationError::NewArrival)?;

    let start_minutes = minutes_of(start);

    let travel = wrap_forward(minutes_of(original) - start_minutes);
    let new_punch_in = wrap_forward(minutes_of(arrival) - travel);
    let delta = canonical_delta(new_punch_in - start_minutes);

    debug!(travel, new_punch_in, delta, "projected punch-in");

    let mut result = TimeDifferenceResult {
        minutes: delta.unsigned_abs(),
        is_earlier: delta < 0,
        is_valid: true,
        new_punch_in_time: Some(ClockTime::from_minutes_wrapping(new_punch_in).to_string()),
        ..TimeDifferenceResult::default()
    };

    if let Some(end) = end_time.and_then(parse_time) {
        let end_minutes = minutes_of(end);

        let work = wrap_forward(end_minutes - start_minutes);
        let new_punch_out = wrap_forward(new_punch_in + work);
        let end_delta = canonical_delta(new_punch_out - end_minutes);

        debug!(work, new_punch_out, end_delta, "projected punch-out");

        let end_difference = end_delta.unsigned_abs();
        result.new_punch_out_time =
            Some(ClockTime::from_minutes_wrapping(new_punch_out).to_string());
        result.end_time_difference = Some(end_difference);
        result.end_is_earlier = Some(end_delta < 0);
        result.total_difference = Some(result.minutes + end_difference);
    }

    Ok(result)
}

fn minutes_of(time: ClockTime) -> i32 {
    i32::from(time.minutes_since_midnight())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ==========================================================================
    // TD-001: later arrival moves punch-in later
    // ==========================================================================
    #[test]
    fn test_td_001_later_arrival() {
        let result = calculate_time_difference("9:00 AM", "9:30 AM", "10:00 AM", None);

        assert!(result.is_valid);
        assert_eq!(result.error, None);
        assert_eq!(result.minutes, 30);
        assert!(!result.is_earlier);
        assert_eq!(result.new_punch_in_time.as_deref(), Some("9:30 AM"));
        assert_eq!(result.new_punch_out_time, None);
        assert_eq!(result.end_time_difference, None);
        assert_eq!(result.total_difference, None);
    }

    // ==========================================================================
    // TD-002: earlier arrival moves punch-in earlier
    // ==========================================================================
    #[test]
    fn test_td_002_earlier_arrival() {
        let result = calculate_time_difference("9:00 AM", "9:30 AM", "9:00 AM", None);

        assert!(result.is_valid);
        assert_eq!(result.minutes, 30);
        assert!(result.is_earlier);
        assert_eq!(result.new_punch_in_time.as_deref(), Some("8:30 AM"));
    }

    // ==========================================================================
    // TD-003: unchanged arrival
    // ==========================================================================
    #[test]
    fn test_td_003_same_arrival_no_change() {
        let result = calculate_time_difference("7:15 AM", "8:00 AM", "8:00 AM", Some("3:45 PM"));

        assert_eq!(result.minutes, 0);
        assert!(!result.is_earlier);
        assert_eq!(result.new_punch_in_time.as_deref(), Some("7:15 AM"));
        assert_eq!(result.new_punch_out_time.as_deref(), Some("3:45 PM"));
        assert_eq!(result.total_difference, Some(0));
    }

    // ==========================================================================
    // TD-004: punch-out follows punch-in
    // ==========================================================================
    #[test]
    fn test_td_004_end_time_projection() {
        let result = calculate_time_difference("9:00 AM", "9:30 AM", "10:00 AM", Some("5:00 PM"));

        assert_eq!(result.new_punch_out_time.as_deref(), Some("5:30 PM"));
        assert_eq!(result.end_time_difference, Some(30));
        assert_eq!(result.end_is_earlier, Some(false));
        assert_eq!(result.total_difference, Some(60));
    }

    // ==========================================================================
    // TD-005: arrival past midnight counts as next day
    // ==========================================================================
    #[test]
    fn test_td_005_travel_across_midnight() {
        // 45 minutes of travel from 11:30 PM to 12:15 AM
        let result = calculate_time_difference("11:30 PM", "12:15 AM", "1:00 AM", None);

        assert!(result.is_valid);
        assert_eq!(result.new_punch_in_time.as_deref(), Some("12:15 AM"));
        assert_eq!(result.minutes, 45);
        assert!(!result.is_earlier);
    }

    // ==========================================================================
    // TD-006: new punch-in falls on the previous day
    // ==========================================================================
    #[test]
    fn test_td_006_punch_in_wraps_to_previous_day() {
        let result = calculate_time_difference("12:30 AM", "1:30 AM", "12:15 AM", None);

        assert_eq!(result.new_punch_in_time.as_deref(), Some("11:15 PM"));
        assert_eq!(result.minutes, 75);
        assert!(result.is_earlier);
    }

    // ==========================================================================
    // TD-007: overnight shift punch-out wraps
    // ==========================================================================
    #[test]
    fn test_td_007_overnight_shift_end_time() {
        let result =
            calculate_time_difference("10:00 PM", "10:20 PM", "9:50 PM", Some("6:00 AM"));

        assert_eq!(result.new_punch_in_time.as_deref(), Some("9:30 PM"));
        assert!(result.is_earlier);
        assert_eq!(result.minutes, 30);
        assert_eq!(result.new_punch_out_time.as_deref(), Some("5:30 AM"));
        assert_eq!(result.end_time_difference, Some(30));
        assert_eq!(result.end_is_earlier, Some(true));
        assert_eq!(result.total_difference, Some(60));
    }

    // ==========================================================================
    // TD-008: arrival before punch-in means a long travel span
    // ==========================================================================
    #[test]
    fn test_td_008_arrival_before_start_wraps_forward() {
        // 9:00 AM to 8:00 AM is read as 23 hours of travel
        let result = calculate_time_difference("9:00 AM", "8:00 AM", "8:30 AM", None);

        assert_eq!(result.new_punch_in_time.as_deref(), Some("9:30 AM"));
        assert_eq!(result.minutes, 30);
        assert!(!result.is_earlier);
    }

    #[test]
    fn test_shift_of_exactly_twelve_hours() {
        let result = calculate_time_difference("6:00 AM", "7:00 AM", "7:00 PM", None);

        assert_eq!(result.new_punch_in_time.as_deref(), Some("6:00 PM"));
        assert_eq!(result.minutes, 720);
        assert!(!result.is_earlier);
    }

    #[test]
    fn test_first_invalid_field_is_reported() {
        let cases = [
            (("", "9:30 AM", "10:00 AM"), "Invalid start time"),
            (("nope", "", ""), "Invalid start time"),
            (("9:00 AM", "13:30 PM", "10:00 AM"), "Invalid original arrival time"),
            (("9:00 AM", "", "bad"), "Invalid original arrival time"),
            (("9:00 AM", "9:30 AM", "10:60 AM"), "Invalid new arrival time"),
        ];

        for ((start, original, new), expected) in cases {
            let result = calculate_time_difference(start, original, new, Some("5:00 PM"));
            assert!(!result.is_valid, "{:?} should be invalid", (start, original, new));
            assert_eq!(result.error.as_deref(), Some(expected));
            assert_eq!(result.minutes, 0);
            assert!(!result.is_earlier);
            assert!(result.new_punch_in_time.is_none());
            assert!(result.new_punch_out_time.is_none());
            assert!(result.total_difference.is_none());
        }
    }

    #[test]
    fn test_unparsable_end_time_is_ignored() {
        for end in [Some(""), Some("5 PM"), Some("17:00"), None] {
            let result = calculate_time_difference("9:00 AM", "9:30 AM", "10:00 AM", end);

            assert!(result.is_valid);
            assert_eq!(result.minutes, 30);
            assert_eq!(result.new_punch_out_time, None);
            assert_eq!(result.end_time_difference, None);
            assert_eq!(result.end_is_earlier, None);
            assert_eq!(result.total_difference, None);
        }
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let first = calculate_time_difference("8:05 AM", "8:50 AM", "7:40 AM", Some("4:35 PM"));
        let second = calculate_time_difference("8:05 AM", "8:50 AM", "7:40 AM", Some("4:35 PM"));
        assert_eq!(first, second);
    }

    fn clock(minutes: u16) -> String {
        ClockTime::from_minutes(minutes).unwrap().to_string()
    }

    proptest! {
        #[test]
        fn prop_shift_never_exceeds_half_a_day(
            start in 0u16..1440,
            original in 0u16..1440,
            new in 0u16..1440,
        ) {
            let result = calculate_time_difference(&clock(start), &clock(original), &clock(new), None);
            prop_assert!(result.is_valid);
            prop_assert!(result.minutes <= 720);
        }

        #[test]
        fn prop_punch_out_moves_with_punch_in(
            start in 0u16..1440,
            original in 0u16..1440,
            new in 0u16..1440,
            end in 0u16..1440,
        ) {
            let result = calculate_time_difference(
                &clock(start),
                &clock(original),
                &clock(new),
                Some(&clock(end)),
            );
            prop_assert_eq!(result.end_time_difference, Some(result.minutes));
            prop_assert_eq!(result.total_difference, Some(result.minutes * 2));
        }

        #[test]
        fn prop_travel_time_is_preserved(
            start in 0u16..1440,
            original in 0u16..1440,
            new in 0u16..1440,
        ) {
            let result = calculate_time_difference(&clock(start), &clock(original), &clock(new), None);
            let punch_in = parse_time(result.new_punch_in_time.as_deref().unwrap()).unwrap();

            let old_travel = wrap_forward(i32::from(original) - i32::from(start));
            let new_travel = wrap_forward(i32::from(new) - minutes_of(punch_in));
            prop_assert_eq!(old_travel, new_travel);
        }
    }
}
