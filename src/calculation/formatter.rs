//! Human-readable rendering of a punch shift.

/// Describes a shift of `minutes` as a sentence.
///
/// Zero minutes is always `No time change`. Otherwise the shift is split
/// into hours and minutes, zero parts are left out, units are pluralized
/// for any count other than one, and the sentence ends in `earlier` or
/// `later`.
///
/// # Examples
///
/// ```
/// use punch_planner::calculation::format_time_difference;
///
/// assert_eq!(format_time_difference(0, true), "No time change");
/// assert_eq!(format_time_difference(1, true), "1 minute earlier");
/// assert_eq!(format_time_difference(90, false), "1 hour and 30 minutes later");
/// assert_eq!(format_time_difference(60, true), "1 hour earlier");
/// ```
pub fn format_time_difference(minutes: u32, is_earlier: bool) -> String {
    if minutes == 0 {
        return "No time change".to_string();
    }

    let hours = minutes / 60;
    let remainder = minutes % 60;
    let direction = if is_earlier { "earlier" } else { "later" };

    match (hours, remainder) {
        (0, m) => format!("{} {}", count(m, "minute"), direction),
        (h, 0) => format!("{} {}", count(h, "hour"), direction),
        (h, m) => format!("{} and {} {}", count(h, "hour"), count(m, "minute"), direction),
    }
}

fn count(n: u32, unit: &str) -> String {
    if n == 1 {
        format!("{} {}", n, unit)
    } else {
        format!("{} {}s", n, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_ignores_direction() {
        assert_eq!(format_time_difference(0, false), "No time change");
        assert_eq!(format_time_difference(0, true), "No time change");
    }

    #[test]
    fn test_minutes_only() {
        assert_eq!(format_time_difference(1, false), "1 minute later");
        assert_eq!(format_time_difference(45, true), "45 minutes earlier");
        assert_eq!(format_time_difference(59, false), "59 minutes later");
    }

    #[test]
    fn test_whole_hours() {
        assert_eq!(format_time_difference(60, false), "1 hour later");
        assert_eq!(format_time_difference(120, true), "2 hours earlier");
        assert_eq!(format_time_difference(720, false), "12 hours later");
    }

    #[test]
    fn test_hours_and_minutes() {
        assert_eq!(format_time_difference(61, true), "1 hour and 1 minute earlier");
        assert_eq!(format_time_difference(90, false), "1 hour and 30 minutes later");
        assert_eq!(format_time_difference(125, true), "2 hours and 5 minutes earlier");
    }
}
