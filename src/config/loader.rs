//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the planner
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{PlannerError, PlannerResult};

use super::types::PlannerConfig;

/// Loads the planner configuration.
///
/// # File Format
///
/// ```text
/// server:
///   bind: "127.0.0.1:8080"
/// state:
///   path: "./state/schedule.yaml"
/// defaults:
///   start_time: "9:00 AM"
///   original_arrival: "9:30 AM"
///   new_arrival: ""
///   end_time: ""
/// ```
///
/// Every section is optional.
///
/// # Example
///
/// ```no_run
/// use punch_planner::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/planner.yaml")?;
/// println!("Listening on {}", loader.config().server.bind);
/// # Ok::<(), punch_planner::error::PlannerError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PlannerConfig,
}

impl ConfigLoader {
    /// Loads configuration from the YAML file at `path`.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file contains invalid YAML (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> PlannerResult<Self> {
        let path = path.as_ref();
        let config = load_yaml::<PlannerConfig>(path)?;
        debug!(path = %path.display(), bind = %config.server.bind, "loaded planner configuration");
        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }
}

/// Reads and parses a YAML file.
pub(crate) fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> PlannerResult<T> {
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|_| PlannerError::ConfigNotFound {
        path: path_str.clone(),
    })?;

    serde_yaml::from_str(&content).map_err(|e| PlannerError::ConfigParseError {
        path: path_str,
        message: e.to_string(),
    })
}
