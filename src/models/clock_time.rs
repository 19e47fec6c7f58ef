//! Time-of-day model.
//!
//! A [`ClockTime`] is a bare time of day with no date attached, stored as
//! minutes since midnight. All schedule arithmetic is done on these values
//! modulo one day.

use std::fmt;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Number of minutes in a day.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Half of [`MINUTES_PER_DAY`], the largest shift either way round the clock.
pub const HALF_DAY_MINUTES: i32 = 12 * 60;

/// The AM/PM marker of a 12-hour clock.
///
/// # Example
///
/// ```
/// use punch_planner::models::Period;
///
/// assert_eq!(Period::Am.toggle(), Period::Pm);
/// assert_eq!(Period::Pm.to_string(), "PM");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Period {
    /// Before noon.
    #[default]
    #[serde(rename = "AM", alias = "am")]
    Am,
    /// Noon and after.
    #[serde(rename = "PM", alias = "pm")]
    Pm,
}

impl Period {
    /// Recognizes `AM` or `PM` in any letter case.
    pub fn from_marker(marker: &str) -> Option<Self> {
        if marker.eq_ignore_ascii_case("AM") {
            Some(Period::Am)
        } else if marker.eq_ignore_ascii_case("PM") {
            Some(Period::Pm)
        } else {
            None
        }
    }

    /// Returns the other period.
    pub fn toggle(self) -> Self {
        match self {
            Period::Am => Period::Pm,
            Period::Pm => Period::Am,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::Am => write!(f, "AM"),
            Period::Pm => write!(f, "PM"),
        }
    }
}

/// A time of day, held as minutes since midnight in `0..1440`.
///
/// Displays in the 12-hour form the rest of the planner exchanges,
/// e.g. `9:05 AM` or `12:00 PM`.
///
/// # Example
///
/// ```
/// use punch_planner::models::{ClockTime, Period};
///
/// let time = ClockTime::from_12_hour(5, 30, Period::Pm).unwrap();
/// assert_eq!(time.minutes_since_midnight(), 17 * 60 + 30);
/// assert_eq!(time.to_string(), "5:30 PM");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(u16);

impl ClockTime {
    /// Midnight, `12:00 AM`.
    pub const MIDNIGHT: ClockTime = ClockTime(0);

    /// Builds a time from minutes since midnight, rejecting values of a day or more.
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then_some(ClockTime(minutes))
    }

    /// Builds a time from any signed minute count, wrapping it onto the clock face.
    pub fn from_minutes_wrapping(minutes: i32) -> Self {
        ClockTime(minutes.rem_euclid(i32::from(MINUTES_PER_DAY)) as u16)
    }

    /// Builds a time from a 24-hour `hour` (0-23) and `minute` (0-59).
    pub fn from_hm(hour: u8, minute: u8) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(ClockTime(u16::from(hour) * 60 + u16::from(minute)))
    }

    /// Builds a time from a 12-hour `hour` (1-12), `minute` (0-59) and period.
    ///
    /// `12 AM` is midnight and `12 PM` is noon.
    pub fn from_12_hour(hour: u8, minute: u8, period: Period) -> Option<Self> {
        if !(1..=12).contains(&hour) {
            return None;
        }
        let hour = match (period, hour) {
            (Period::Am, 12) => 0,
            (Period::Am, h) => h,
            (Period::Pm, 12) => 12,
            (Period::Pm, h) => h + 12,
        };
        Self::from_hm(hour, minute)
    }

    /// Minutes elapsed since midnight.
    pub fn minutes_since_midnight(self) -> u16 {
        self.0
    }

    /// The 24-hour hour, 0-23.
    pub fn hour(self) -> u8 {
        (self.0 / 60) as u8
    }

    /// The minute within the hour, 0-59.
    pub fn minute(self) -> u8 {
        (self.0 % 60) as u8
    }

    /// The 12-hour hour, 1-12.
    pub fn hour12(self) -> u8 {
        match self.hour() {
            0 => 12,
            h if h > 12 => h - 12,
            h => h,
        }
    }

    /// Whether this time falls before or after noon.
    pub fn period(self) -> Period {
        if self.hour() < 12 { Period::Am } else { Period::Pm }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02} {}", self.hour12(), self.minute(), self.period())
    }
}

impl From<ClockTime> for NaiveTime {
    fn from(time: ClockTime) -> Self {
        NaiveTime::from_hms_opt(u32::from(time.hour()), u32::from(time.minute()), 0)
            .unwrap_or_default()
    }
}

/// Seconds and sub-seconds are dropped.
impl From<NaiveTime> for ClockTime {
    fn from(time: NaiveTime) -> Self {
        ClockTime((time.hour() * 60 + time.minute()) as u16)
    }
}
