//! services/web/src/adapters/memory.rs
//!
//! Non-durable implementation of the `StorageService` port. Used by tests and
//! whenever the shell should start from a clean slate every time.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use bookmarks_core::ports::{PortResult, StorageService};

#[derive(Default)]
pub struct MemoryStorageAdapter {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorageAdapter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageService for MemoryStorageAdapter {
    fn get(&self, key: &str) -> PortResult<Option<String>> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> PortResult<()> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
