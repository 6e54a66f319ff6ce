//! Router Module Index
//!
//! Splits the portal's routes by access level. Page routes are generated from
//! the route table in `navigation::ROUTES`, so the table stays the one place
//! that says which path needs which role.

use axum::{
    response::Redirect,
    routing::{MethodRouter, get},
};

use crate::{
    AppState, handlers,
    navigation::{RouteTarget, View},
};

/// Unguarded pages plus the login/logout form actions and the health check.
pub mod public;

/// Pages whose table entry declares a required role; each is wrapped in its
/// own `role_guard` layer.
pub mod protected;

/// JSON session API (`/api/session/*`).
pub mod api;

/// page_route
///
/// The GET handler serving one route-table target.
fn page_route(target: RouteTarget) -> MethodRouter<AppState> {
    match target {
        RouteTarget::Redirect(to) => get(move || async move { Redirect::to(to) }),
        RouteTarget::View(View::Home) => get(handlers::home),
        RouteTarget::View(View::AdminDashboard) => get(handlers::admin_dashboard),
        RouteTarget::View(View::UserDashboard) => get(handlers::user_dashboard),
        RouteTarget::View(View::NotFound) => get(handlers::not_found),
    }
}
