use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{get, post},
};

/// Session API Router Module
///
/// Programmatic access to the session holder. Mounted under `/api`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // GET /api/session
        .route("/session", get(handlers::get_session))
        // POST /api/session/login
        // Body: {"role": "ROLE_ADMIN" | "ROLE_USER"}. Unknown roles get 400.
        .route("/session/login", post(handlers::api_login))
        // POST /api/session/logout
        .route("/session/logout", post(handlers::api_logout))
}
