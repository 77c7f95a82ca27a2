//! services/web/src/web/middleware.rs
//!
//! Route guard middleware for protecting pages.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use bookmarks_core::{Navigation, Route};
use std::sync::Arc;

use crate::web::state::AppState;

/// Middleware that consults the route guard before the page handler runs.
///
/// Unauthenticated navigations are answered with `303 See Other` pointing at
/// the login route; nothing else about the request is inspected.
pub async fn require_session(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Response {
    let to = Route::new(req.uri().path());
    let from = Route::new(
        req.headers()
            .get(header::REFERER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default(),
    );

    let outcome = {
        let session = state.session();
        state.guard.check(&session, &to, &from)
    };

    match outcome {
        Navigation::Proceed => next.run(req).await,
        Navigation::Redirect(login) => Redirect::to(&login.path).into_response(),
    }
}
