use crate::{AppState, handlers, navigation::ROUTES};
use axum::{
    Router,
    routing::{get, post},
};

use super::page_route;

/// Public Router Module
///
/// Everything reachable without a session: the unguarded entries of the route
/// table (`/` and `/home`), the form actions behind the login dialog, and the
/// health check.
pub fn public_routes() -> Router<AppState> {
    let pages = ROUTES
        .iter()
        .filter(|entry| entry.required_role.is_none())
        .fold(Router::new(), |router, entry| {
            router.route(entry.path, page_route(entry.target))
        });

    pages
        // GET /health
        // Liveness probe; answers "ok" whatever the session state.
        .route("/health", get(|| async { "ok" }))
        // POST /login
        // Form action of the "Login as ..." buttons. Redirects to the role's dashboard.
        .route("/login", post(handlers::login))
        // POST /logout
        // Form action of the "Logout" button. Redirects to /home.
        .route("/logout", post(handlers::logout))
}
