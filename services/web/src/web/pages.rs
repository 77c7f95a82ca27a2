//! services/web/src/web/pages.rs
//!
//! Page handlers. Everything except the login page sits behind the route guard.

use crate::web::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, Json},
};
use bookmarks_core::User;
use std::sync::Arc;

pub async fn login_page() -> Html<&'static str> {
    Html("<!doctype html><title>Log in</title><h1>Log in</h1>")
}

pub async fn bookmarks_page() -> Html<&'static str> {
    Html("<!doctype html><title>Bookmarks</title><h1>Bookmarks</h1>")
}

/// GET /profile/ - The stored profile of the logged in user
pub async fn profile_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<User>, (StatusCode, String)> {
    let user = state.session().user().cloned();
    user.map(Json)
        .ok_or((StatusCode::NOT_FOUND, "Profile not loaded".to_string()))
}
