//! Application state for the shift pay API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{ConfigLoader, PayRules};
use crate::store::{InMemoryWorkRecordRepository, WorkRecordRepository};

/// Shared application state.
///
/// Holds the loaded pay rules and the work record store.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    records: Arc<dyn WorkRecordRepository>,
}

impl AppState {
    /// Creates a state backed by a fresh in-memory store.
    pub fn new(config: ConfigLoader) -> Self {
        Self::with_repository(config, Arc::new(InMemoryWorkRecordRepository::new()))
    }

    /// Creates a state backed by the given store.
    pub fn with_repository(config: ConfigLoader, records: Arc<dyn WorkRecordRepository>) -> Self {
        Self {
            config: Arc::new(config),
            records,
        }
    }

    /// Returns the loaded pay rules.
    pub fn rules(&self) -> &PayRules {
        self.config.rules()
    }

    /// Returns the work record store.
    pub fn records(&self) -> &dyn WorkRecordRepository {
        self.records.as_ref()
    }
}
