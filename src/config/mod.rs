//! Configuration loading and saved state for the punch planner.
//!
//! This module loads the planner configuration from YAML and persists the
//! schedule fields between sessions.
//!
//! # Example
//!
//! ```no_run
//! use punch_planner::config::{ConfigLoader, ScheduleStore};
//!
//! let loader = ConfigLoader::load("./config/planner.yaml").unwrap();
//! let store = ScheduleStore::from_config(loader.config());
//! println!("Saved schedule: {:?}", store.load().unwrap());
//! ```

mod loader;
mod store;
mod types;

pub use loader::ConfigLoader;
pub use store::ScheduleStore;
pub use types::{PlannerConfig, ServerConfig, StateConfig};
