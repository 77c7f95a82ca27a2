//! In-memory storage double shared by the core's unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::ports::{PortError, PortResult, StorageService};

#[derive(Default)]
pub(crate) struct FakeStorage {
    entries: Mutex<HashMap<String, String>>,
    writes: AtomicUsize,
    failing: AtomicBool,
}

impl FakeStorage {
    pub(crate) fn with(entries: &[(&str, &str)]) -> Self {
        let storage = Self::default();
        {
            let mut map = storage.entries.lock().unwrap();
            for (key, value) in entries {
                map.insert((*key).to_string(), (*value).to_string());
            }
        }
        storage
    }

    pub(crate) fn value(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    /// Number of successful `set` calls.
    pub(crate) fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Makes every later `set` fail.
    pub(crate) fn fail_writes(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }
}

impl StorageService for FakeStorage {
    fn get(&self, key: &str) -> PortResult<Option<String>> {
        Ok(self.value(key))
    }

    fn set(&self, key: &str, value: &str) -> PortResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(PortError::Unavailable("quota exceeded".into()));
        }
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
