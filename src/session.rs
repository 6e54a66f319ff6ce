use crate::models::{LoginResponse, LogoutResponse, Role, Session};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// SessionService Trait
///
/// The contract of the session state holder. It is the single source of truth
/// for whether the portal is "logged in" and under which role; handlers and the
/// route guard only ever read it or go through `login`/`logout`.
///
/// **Send + Sync + async_trait** are required so the trait object
/// (`Arc<dyn SessionService>`) can be shared across Axum's request tasks.
#[async_trait]
pub trait SessionService: Send + Sync {
    /// Marks the session authenticated under `role`. Always succeeds.
    async fn login(&self, role: Role) -> LoginResponse;

    /// Clears the session back to the logged-out state.
    async fn logout(&self) -> LogoutResponse;

    async fn is_logged_in(&self) -> bool;

    /// The current role, `None` when logged out.
    async fn role(&self) -> Option<Role>;

    /// Both fields read under a single lock acquisition.
    async fn snapshot(&self) -> Session;
}

/// SessionState
///
/// The concrete type used to share the session holder across the application state.
pub type SessionState = Arc<dyn SessionService>;

/// InMemorySessionStore
///
/// The default `SessionService`: one session living for the lifetime of the
/// process, never persisted. Writers take the lock exclusively, so a reader
/// sees either the session before or after a login/logout, never a mix.
#[derive(Default)]
pub struct InMemorySessionStore {
    session: RwLock<Session>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor returning the store already wrapped as `SessionState`.
    pub fn shared() -> SessionState {
        Arc::new(Self::new())
    }
}

#[async_trait]
impl SessionService for InMemorySessionStore {
    async fn login(&self, role: Role) -> LoginResponse {
        let mut session = self.session.write().await;
        *session = Session::with_role(role);
        tracing::info!(role = %role, "session logged in");

        LoginResponse {
            success: session.is_authenticated(),
            role,
        }
    }

    async fn logout(&self) -> LogoutResponse {
        let mut session = self.session.write().await;
        let previous = session.role();
        *session = Session::anonymous();
        tracing::info!(previous_role = ?previous, "session logged out");

        LogoutResponse {
            still_logged_in: session.is_authenticated(),
        }
    }

    async fn is_logged_in(&self) -> bool {
        self.session.read().await.is_authenticated()
    }

    async fn role(&self) -> Option<Role> {
        self.session.read().await.role()
    }

    async fn snapshot(&self) -> Session {
        *self.session.read().await
    }
}
