//! crates/bookmarks_core/src/session.rs
//!
//! The session store: the single in-memory record of who is logged in,
//! mirrored into durable storage on every change.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::User;
use crate::ports::{PortError, PortResult, StorageService};

/// Storage key holding the raw auth token.
pub const TOKEN_KEY: &str = "token";
/// Storage key holding the JSON-serialized user profile.
pub const USER_KEY: &str = "user";

/// A read-only copy of the session state, handed to the outer layers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub token: Option<String>,
    pub user: Option<User>,
    pub is_authenticated: bool,
}

/// Holds the current auth token, user profile and authenticated flag.
///
/// `is_authenticated` is only ever changed together with `token`. Note that
/// `log_out` leaves an empty-string token behind rather than `None`; callers
/// must rely on `is_authenticated`, not on the token being absent.
pub struct SessionStore {
    storage: Arc<dyn StorageService>,
    token: Option<String>,
    user: Option<User>,
    is_authenticated: bool,
}

impl SessionStore {
    /// Creates an unauthenticated store. Call `initialize` to restore a
    /// persisted session.
    pub fn new(storage: Arc<dyn StorageService>) -> Self {
        Self {
            storage,
            token: None,
            user: None,
            is_authenticated: false,
        }
    }

    /// Rebuilds the in-memory session from durable storage.
    ///
    /// An empty stored token counts as no token, so a session that was logged
    /// out stays logged out across restarts.
    pub fn initialize(&mut self) -> PortResult<()> {
        match self.storage.get(TOKEN_KEY)? {
            Some(token) if !token.is_empty() => {
                self.token = Some(token);
                self.is_authenticated = true;
            }
            _ => {
                self.token = None;
                self.is_authenticated = false;
            }
        }

        match self.storage.get(USER_KEY)? {
            Some(raw) => {
                self.user = serde_json::from_str::<Option<User>>(&raw)
                    .map_err(|e| PortError::Corrupt(format!("{USER_KEY}: {e}")))?;
            }
            None => self.write_user()?,
        }

        debug!(
            is_authenticated = self.is_authenticated,
            has_user = self.user.is_some(),
            "Session initialized from storage"
        );
        Ok(())
    }

    /// Records a successful login. Neither value is validated.
    pub fn log_in(&mut self, token: impl Into<String>, user: Option<User>) -> PortResult<()> {
        self.token = Some(token.into());
        self.user = user;
        self.is_authenticated = true;

        self.write_token()?;
        self.write_user()?;
        debug!(has_user = self.user.is_some(), "Logged in");
        Ok(())
    }

    /// Clears the session. Calling it again changes nothing.
    pub fn log_out(&mut self) -> PortResult<()> {
        self.token = Some(String::new());
        self.user = None;
        self.is_authenticated = false;

        self.write_token()?;
        self.write_user()?;
        debug!("Logged out");
        Ok(())
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            token: self.token.clone(),
            user: self.user.clone(),
            is_authenticated: self.is_authenticated,
        }
    }

    fn write_token(&self) -> PortResult<()> {
        self.storage
            .set(TOKEN_KEY, self.token.as_deref().unwrap_or_default())
    }

    fn write_user(&self) -> PortResult<()> {
        let raw = serde_json::to_string(&self.user)
            .map_err(|e| PortError::Corrupt(format!("{USER_KEY}: {e}")))?;
        self.storage.set(USER_KEY, &raw)
    }
}
