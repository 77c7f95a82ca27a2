//! crates/bookmarks_core/src/guard.rs
//!
//! Navigation guard that keeps unauthenticated users on the login page.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::session::SessionStore;

/// Where unauthenticated navigations end up unless configured otherwise.
pub const DEFAULT_LOGIN_ROUTE: &str = "/login/";

/// A navigation target or origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub path: String,
}

impl Route {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// What the navigation layer should do with a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Proceed,
    Redirect(Route),
}

/// Consulted before every transition to a protected route.
///
/// The guard only reads the store. It assumes the store was initialized
/// during startup and does not distinguish "never logged in" from
/// "logged out".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteGuard {
    login_route: Route,
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self::new(DEFAULT_LOGIN_ROUTE)
    }
}

impl RouteGuard {
    pub fn new(login_route: impl Into<String>) -> Self {
        Self {
            login_route: Route::new(login_route),
        }
    }

    pub fn login_route(&self) -> &Route {
        &self.login_route
    }

    /// Decides the fate of a navigation from `_from` to `to`.
    pub fn check(&self, session: &SessionStore, to: &Route, _from: &Route) -> Navigation {
        if session.is_authenticated() {
            return Navigation::Proceed;
        }
        debug!(to = %to.path, login = %self.login_route.path, "Redirecting unauthenticated navigation");
        Navigation::Redirect(self.login_route.clone())
    }
}
