//! services/web/src/web/session.rs
//!
//! Contains the Axum handlers that drive the session store, and the master
//! definition for the OpenAPI specification.

use crate::web::state::AppState;
use axum::{extract::State, http::StatusCode, response::Json};
use bookmarks_core::User;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};
use utoipa::{OpenApi, ToSchema};

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(login_handler, logout_handler, session_handler),
    components(schemas(LoginRequest, SessionResponse)),
    tags(
        (name = "Bookmarks Session", description = "Local session endpoints of the bookmarks client.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// Request/Response Types
//=========================================================================================

/// Handed over by the login form once the remote API has issued a token.
#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    pub token: String,
    /// The profile returned by the user details endpoint, if already fetched.
    #[serde(default)]
    #[schema(value_type = Object)]
    pub user: Option<User>,
}

/// Current session state. The token itself is never echoed back.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct SessionResponse {
    pub is_authenticated: bool,
    #[schema(value_type = Object)]
    pub user: Option<User>,
}

//=========================================================================================
// Handlers
//=========================================================================================

/// POST /session/login - Store the token and profile of a fresh login
#[utoipa::path(
    post,
    path = "/session/login",
    request_body = LoginRequest,
    responses(
        (status = 204, description = "Session stored"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn login_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<StatusCode, (StatusCode, String)> {
    state.session().log_in(req.token, req.user).map_err(|e| {
        error!("Failed to persist login: {:?}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to save session".to_string(),
        )
    })?;

    info!("Session started");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /session/logout - Clear the session
#[utoipa::path(
    post,
    path = "/session/logout",
    responses(
        (status = 204, description = "Session cleared"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn logout_handler(
    State(state): State<Arc<AppState>>,
) -> Result<StatusCode, (StatusCode, String)> {
    state.session().log_out().map_err(|e| {
        error!("Failed to persist logout: {:?}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to clear session".to_string(),
        )
    })?;

    info!("Session cleared");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /session - Report whether a user is logged in
#[utoipa::path(
    get,
    path = "/session",
    responses(
        (status = 200, description = "Current session", body = SessionResponse)
    )
)]
pub async fn session_handler(State(state): State<Arc<AppState>>) -> Json<SessionResponse> {
    let snapshot = state.session().snapshot();
    Json(SessionResponse {
        is_authenticated: snapshot.is_authenticated,
        user: snapshot.user,
    })
}
