//! Process-local blob store.

use super::{BlobError, BlobResult, BlobStore};
use std::collections::HashMap;

/// Blob store kept in a plain map. Counts successful writes.
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    entries: HashMap<String, String>,
    writes: usize,
    reject_writes: Option<String>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with one entry.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut store = Self::default();
        store.entries.insert(key.into(), value.into());
        store
    }

    /// Makes every later `set` fail with `message` until cleared with `None`.
    pub fn reject_writes(&mut self, message: Option<&str>) {
        self.reject_writes = message.map(str::to_string);
    }

    /// Number of successful `set` calls.
    pub fn write_count(&self) -> usize {
        self.writes
    }

    /// Raw stored value, bypassing the trait.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> BlobResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> BlobResult<()> {
        if let Some(message) = &self.reject_writes {
            return Err(BlobError::Backend(message.clone()));
        }
        self.entries.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}
