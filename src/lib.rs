//! Punch-in / punch-out schedule shift calculator.
//!
//! Given a usual punch-in time, the usual arrival time and a desired new
//! arrival time (plus, optionally, the usual punch-out time), this crate
//! works out the new punch-in and punch-out times that keep the travel and
//! work spans unchanged, and how far each one moved.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
