//! Persistence configuration.

use std::time::Duration;

/// Storage key the whole collection is written under.
pub const DEFAULT_STORAGE_KEY: &str = "keep_notes";
/// Quiet period before a pending write fires.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Settings for the persistence bridge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistenceConfig {
    pub storage_key: String,
    pub debounce: Duration,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            debounce: DEFAULT_DEBOUNCE,
        }
    }
}

impl PersistenceConfig {
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }
}
