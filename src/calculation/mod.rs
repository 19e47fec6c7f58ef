//! Calculation logic for the punch planner.
//!
//! This module contains the time-string parser, the schedule shift
//! projection that keeps travel and work spans constant across midnight,
//! and the sentence formatter for the resulting shifts.

mod day_wrap;
mod difference;
mod formatter;
mod parser;

pub use day_wrap::{canonical_delta, wrap_forward};
pub use difference::calculate_time_difference;
pub use formatter::format_time_difference;
pub use parser::parse_time;
