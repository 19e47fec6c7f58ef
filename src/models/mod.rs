//! Core data models for the punch planner.
//!
//! This module contains the domain models used throughout the planner.

mod clock_time;
mod schedule;
mod time_difference;
mod time_selection;

pub use clock_time::{ClockTime, HALF_DAY_MINUTES, MINUTES_PER_DAY, Period};
pub use schedule::ScheduleInputs;
pub use time_difference::TimeDifferenceResult;
pub use time_selection::TimeSelection;
