//! Parsing of 12-hour clock strings.

use crate::models::{ClockTime, Period};

/// Parses a `H:MM AM|PM` string into a [`ClockTime`].
///
/// The accepted shape is a one or two digit hour, a colon, exactly two minute
/// digits, optional whitespace, then `AM` or `PM` in any case. Nothing may
/// precede or follow it. The hour must be 1-12 and the minute 0-59.
///
/// Returns `None` for anything else, including the empty string, which
/// stands for a field that has not been filled in yet.
///
/// # Examples
///
/// ```
/// use punch_planner::calculation::parse_time;
///
/// let time = parse_time("9:30 am").unwrap();
/// assert_eq!(time.minutes_since_midnight(), 9 * 60 + 30);
///
/// assert_eq!(parse_time("12:00AM").unwrap().minutes_since_midnight(), 0);
/// assert!(parse_time("13:00 AM").is_none());
/// assert!(parse_time("12:60 PM").is_none());
/// assert!(parse_time("noon").is_none());
/// assert!(parse_time("").is_none());
/// ```
pub fn parse_time(raw: &str) -> Option<ClockTime> {
    if raw.is_empty() {
        return None;
    }

    let (hour_str, rest) = raw.split_once(':')?;
    if hour_str.is_empty() || hour_str.len() > 2 || !is_ascii_digits(hour_str) {
        return None;
    }

    let minute_str = rest.get(..2)?;
    if !is_ascii_digits(minute_str) {
        return None;
    }

    let period = Period::from_marker(rest[2..].trim_start())?;

    let hour: u8 = hour_str.parse().ok()?;
    let minute: u8 = minute_str.parse().ok()?;

    ClockTime::from_12_hour(hour, minute, period)
}

fn is_ascii_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}
