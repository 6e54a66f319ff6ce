use crate::{
    AppState,
    guard::{RouteGuard, role_guard},
    navigation::ROUTES,
    session::SessionState,
};
use axum::{Router, middleware};

use super::page_route;

/// Protected Router Module
///
/// Builds one route per route-table entry that declares a required role and
/// wraps it in a `role_guard` layer bound to that role. The guard runs before
/// the page handler on every request; a denied request never reaches it.
pub fn protected_routes(session: SessionState) -> Router<AppState> {
    ROUTES
        .iter()
        .fold(Router::new(), |router, entry| match entry.required_role {
            Some(required) => {
                let guard = RouteGuard::new(session.clone(), required);
                router.route(
                    entry.path,
                    page_route(entry.target)
                        .route_layer(middleware::from_fn_with_state(guard, role_guard)),
                )
            }
            None => router,
        })
}
