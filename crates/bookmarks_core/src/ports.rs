//! crates/bookmarks_core/src/ports.rs
//!
//! Defines the contract between the session core and durable storage.
//! The core never touches a concrete storage backend; the application root
//! supplies one of the adapters at startup.

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// Error type for all storage port operations.
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    /// The storage backend could not be read or written.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
    /// A stored value could not be decoded.
    #[error("Corrupt stored value: {0}")]
    Corrupt(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Storage Port
//=========================================================================================

/// Durable, string-keyed storage that survives process restarts.
///
/// Access is synchronous and local. A missing key is `Ok(None)`, never an error.
pub trait StorageService: Send + Sync {
    fn get(&self, key: &str) -> PortResult<Option<String>>;

    /// Overwrites any previous value under `key`.
    fn set(&self, key: &str, value: &str) -> PortResult<()>;
}
