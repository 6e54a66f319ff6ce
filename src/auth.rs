use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use std::convert::Infallible;

use crate::{models::Session, session::SessionState};

/// CurrentSession Extractor Result
///
/// A snapshot of the session taken when the request reached its handler.
/// Views use it to decide between the "Login" and "Logout" actions and to show
/// the active role.
#[derive(Debug, Clone, Copy)]
pub struct CurrentSession(pub Session);

/// CurrentSession Extractor Implementation
///
/// Pulls the `SessionState` from the application state and reads it. Unlike a
/// real authentication extractor this never rejects: an anonymous visitor is
/// simply a logged-out session. Access control lives in the route guard.
impl<S> FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
    SessionState: FromRef<S>,
{
    type Rejection = Infallible;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = SessionState::from_ref(state);
        Ok(CurrentSession(session.snapshot().await))
    }
}
