use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::{
    models::{Role, Session},
    navigation::FALLBACK_PATH,
    session::SessionState,
};

/// DenyReason
///
/// Why the guard turned a navigation away. Only used for logging; the visitor
/// sees the same silent redirect either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    NotLoggedIn,
    RoleMismatch { required: Role, actual: Role },
}

/// GuardDecision
///
/// Outcome of evaluating a protected route against the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Deny(DenyReason),
}

impl GuardDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, GuardDecision::Allow)
    }
}

/// evaluate
///
/// The route-guard decision procedure. Pure over the session snapshot:
/// 1. not logged in: deny;
/// 2. logged in with the required role: allow;
/// 3. logged in with any other role: deny.
pub fn evaluate(session: &Session, required: Role) -> GuardDecision {
    match session.role() {
        None => GuardDecision::Deny(DenyReason::NotLoggedIn),
        Some(actual) if actual == required => GuardDecision::Allow,
        Some(actual) => GuardDecision::Deny(DenyReason::RoleMismatch { required, actual }),
    }
}

/// RouteGuard
///
/// Per-route middleware state: the shared session holder plus the role the
/// route declares. One instance is attached to each protected route.
#[derive(Clone)]
pub struct RouteGuard {
    pub session: SessionState,
    pub required: Role,
}

impl RouteGuard {
    pub fn new(session: SessionState, required: Role) -> Self {
        Self { session, required }
    }

    /// Takes a fresh snapshot and evaluates it. Never cached between requests.
    pub async fn check(&self) -> GuardDecision {
        let session = self.session.snapshot().await;
        evaluate(&session, self.required)
    }
}

/// role_guard
///
/// Middleware enforcing a `RouteGuard` in front of a protected view.
///
/// *Mechanism*: on `Allow` the request proceeds to the handler untouched. On
/// `Deny` the handler never runs and the visitor is sent to the fallback route
/// with a `303 See Other`, with no error body.
pub async fn role_guard(State(guard): State<RouteGuard>, request: Request, next: Next) -> Response {
    match guard.check().await {
        GuardDecision::Allow => {
            tracing::debug!(path = %request.uri().path(), required = %guard.required, "navigation allowed");
            next.run(request).await
        }
        GuardDecision::Deny(reason) => {
            tracing::info!(
                path = %request.uri().path(),
                required = %guard.required,
                ?reason,
                "navigation denied, redirecting to {}",
                FALLBACK_PATH
            );
            Redirect::to(FALLBACK_PATH).into_response()
        }
    }
}
