//! Application state for the punch planner API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::{ConfigLoader, ScheduleStore};

/// Shared application state.
///
/// Holds the loaded configuration and the saved-schedule store. The store
/// sits behind a lock so concurrent `PUT /schedule` requests write the file
/// one at a time.
#[derive(Clone)]
pub struct AppState {
    /// The loaded configuration.
    config: Arc<ConfigLoader>,
    /// The saved schedule.
    store: Arc<RwLock<ScheduleStore>>,
}

impl AppState {
    /// Creates the state, building the store from the configuration.
    pub fn new(config: ConfigLoader) -> Self {
        let store = ScheduleStore::from_config(config.config());
        Self::with_store(config, store)
    }

    /// Creates the state with an explicit store.
    pub fn with_store(config: ConfigLoader, store: ScheduleStore) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the saved-schedule store.
    pub fn store(&self) -> &RwLock<ScheduleStore> {
        &self.store
    }
}
