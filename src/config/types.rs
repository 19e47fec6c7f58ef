//! Configuration types for the punch planner.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file.

use serde::{Deserialize, Serialize};

use crate::models::ScheduleInputs;

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Socket address to listen on.
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:8080".to_string()
}

/// Where the saved schedule fields live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateConfig {
    /// Path of the YAML file holding the last entered schedule.
    #[serde(default = "default_state_path")]
    pub path: String,
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            path: default_state_path(),
        }
    }
}

fn default_state_path() -> String {
    "./state/schedule.yaml".to_string()
}

/// The complete planner configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Saved schedule settings.
    #[serde(default)]
    pub state: StateConfig,
    /// Field values used before anything has been saved.
    #[serde(default)]
    pub defaults: ScheduleInputs,
}
