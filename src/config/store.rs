//! Saved schedule state.
//!
//! The last entered schedule fields are kept in a small YAML file so they can
//! be offered again next session. The calculation itself never touches this.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{PlannerError, PlannerResult};
use crate::models::ScheduleInputs;

use super::loader::load_yaml;
use super::types::PlannerConfig;

/// Reads and writes the saved [`ScheduleInputs`].
///
/// # Example
///
/// ```no_run
/// use punch_planner::config::ScheduleStore;
/// use punch_planner::models::ScheduleInputs;
///
/// let store = ScheduleStore::new("./state/schedule.yaml", ScheduleInputs::default());
/// let mut inputs = store.load()?;
/// inputs.new_arrival = "10:00 AM".to_string();
/// store.save(&inputs)?;
/// # Ok::<(), punch_planner::error::PlannerError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ScheduleStore {
    path: PathBuf,
    defaults: ScheduleInputs,
}

impl ScheduleStore {
    /// Creates a store backed by the file at `path`.
    ///
    /// `defaults` is what [`load`](Self::load) returns until something has
    /// been saved.
    pub fn new<P: Into<PathBuf>>(path: P, defaults: ScheduleInputs) -> Self {
        Self {
            path: path.into(),
            defaults,
        }
    }

    /// Creates a store from the `state` and `defaults` configuration sections.
    pub fn from_config(config: &PlannerConfig) -> Self {
        Self::new(&config.state.path, config.defaults.clone())
    }

    /// The backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the saved inputs, or the defaults if nothing has been saved.
    ///
    /// A state file that exists but is not valid YAML is a
    /// `ConfigParseError`.
    pub fn load(&self) -> PlannerResult<ScheduleInputs> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no saved schedule, using defaults");
            return Ok(self.defaults.clone());
        }
        load_yaml(&self.path)
    }

    /// Overwrites the saved inputs, creating parent directories as needed.
    pub fn save(&self, inputs: &ScheduleInputs) -> PlannerResult<()> {
        let write_error = |message: String| PlannerError::StateWriteError {
            path: self.path.display().to_string(),
            message,
        };

        let content = serde_yaml::to_string(inputs).map_err(|e| write_error(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| write_error(e.to_string()))?;
        }
        fs::write(&self.path, content).map_err(|e| write_error(e.to_string()))?;

        info!(path = %self.path.display(), "saved schedule");
        Ok(())
    }
}
