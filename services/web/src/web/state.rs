//! services/web/src/web/state.rs
//!
//! Defines the application's shared state: the explicit session context that
//! every handler and the route guard middleware read from.

use crate::config::Config;
use bookmarks_core::ports::{PortResult, StorageService};
use bookmarks_core::{RouteGuard, SessionStore};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

//=========================================================================================
// AppState (Shared Across All Requests)
//=========================================================================================

/// The shared application state, created once at startup and passed to all handlers.
pub struct AppState {
    session: Mutex<SessionStore>,
    pub guard: RouteGuard,
    pub config: Arc<Config>,
}

impl AppState {
    /// Builds the session context over `storage` and restores any persisted
    /// session, so the guard never sees an uninitialized store.
    pub fn new(config: Arc<Config>, storage: Arc<dyn StorageService>) -> PortResult<Self> {
        let mut session = SessionStore::new(storage);
        session.initialize()?;

        Ok(Self {
            session: Mutex::new(session),
            guard: RouteGuard::new(config.login_route.clone()),
            config,
        })
    }

    /// Locks the session store. Never hold the guard across an `.await`.
    pub fn session(&self) -> MutexGuard<'_, SessionStore> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
