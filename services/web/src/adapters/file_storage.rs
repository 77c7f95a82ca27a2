//! services/web/src/adapters/file_storage.rs
//!
//! Durable key-value storage backed by a single JSON object file. This is the
//! concrete implementation of the `StorageService` port used in production.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use bookmarks_core::ports::{PortError, PortResult, StorageService};
use tracing::{debug, error};

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// Keeps every entry in memory and rewrites the whole file on each `set`.
pub struct FileStorageAdapter {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStorageAdapter {
    /// Opens the storage file. A missing or empty file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> PortResult<Self> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) if raw.trim().is_empty() => BTreeMap::new(),
            Ok(raw) => serde_json::from_str(&raw)
                .map_err(|e| PortError::Corrupt(format!("{}: {}", path.display(), e)))?,
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(unavailable(&path, e)),
        };
        debug!(path = %path.display(), entries = entries.len(), "Opened storage file");

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes to a sibling temp file first, then renames it over the target.
    fn flush(&self, entries: &BTreeMap<String, String>) -> PortResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| unavailable(parent, e))?;
        }

        let body = serde_json::to_string_pretty(entries)
            .map_err(|e| PortError::Corrupt(e.to_string()))?;
        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, body).map_err(|e| unavailable(&tmp_path, e))?;
        fs::rename(&tmp_path, &self.path).map_err(|e| unavailable(&self.path, e))
    }
}

fn unavailable(path: &Path, e: std::io::Error) -> PortError {
    error!("Storage file {} failed: {:?}", path.display(), e);
    PortError::Unavailable(format!("{}: {}", path.display(), e))
}

//=========================================================================================
// StorageService Implementation
//=========================================================================================

impl StorageService for FileStorageAdapter {
    fn get(&self, key: &str) -> PortResult<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| PortError::Unavailable("storage lock poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> PortResult<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| PortError::Unavailable("storage lock poisoned".to_string()))?;

        let previous = entries.insert(key.to_string(), value.to_string());
        if let Err(e) = self.flush(&entries) {
            // Keep memory in line with what is on disk.
            match previous {
                Some(old) => entries.insert(key.to_string(), old),
                None => entries.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }
}
