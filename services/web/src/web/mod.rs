pub mod middleware;
pub mod pages;
pub mod session;
pub mod state;

pub use middleware::require_session;
pub use session::{login_handler, logout_handler, session_handler};

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::web::pages::{bookmarks_page, login_page, profile_handler};
use crate::web::state::AppState;

/// Builds the navigation shell around an already initialized session context.
pub fn router(state: Arc<AppState>) -> Router {
    // Public routes (no session required)
    let public_routes = Router::new()
        .route(&state.config.login_route, get(login_page))
        .route("/session", get(session_handler))
        .route("/session/login", post(login_handler))
        .route("/session/logout", post(logout_handler));

    // Protected routes (route guard applies)
    let protected_routes = Router::new()
        .route("/bookmarks/", get(bookmarks_page))
        .route("/profile/", get(profile_handler))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            require_session,
        ));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
