use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;
use ts_rs::TS;
use utoipa::ToSchema;

// --- Core Domain Types ---

/// Role
///
/// The closed set of roles a session may hold. The wire form is the
/// `ROLE_*` tag, both in JSON payloads and in the login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub enum Role {
    #[serde(rename = "ROLE_ADMIN")]
    Admin,
    #[serde(rename = "ROLE_USER")]
    User,
}

impl Role {
    /// Every role, in the order the login dialog offers them.
    pub const ALL: [Role; 2] = [Role::Admin, Role::User];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ROLE_ADMIN",
            Role::User => "ROLE_USER",
        }
    }

    /// dashboard_path
    ///
    /// Where a freshly logged-in session of this role is sent.
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Role::Admin => "/admin",
            Role::User => "/user",
        }
    }

    /// Human-readable label used by the views ("Admin", "User").
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::User => "User",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// UnknownRole
///
/// Raised when a role string coming from a form or JSON body is not one of
/// the `ROLE_*` tags. Handlers map it to `400 Bad Request`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role `{0}`")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "ROLE_ADMIN" => Ok(Role::Admin),
            "ROLE_USER" => Ok(Role::User),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// Session
///
/// The single authentication record of the running portal. Only the role is
/// stored: a session is authenticated exactly when it carries a role, so a
/// logged-out session can never keep a stale role around.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    role: Option<Role>,
}

impl Session {
    /// A logged-out session (the process start state).
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_role(role: Role) -> Self {
        Self { role: Some(role) }
    }

    pub fn is_authenticated(&self) -> bool {
        self.role.is_some()
    }

    /// The current role; `None` is the empty role of a logged-out session.
    pub fn role(&self) -> Option<Role> {
        self.role
    }

    /// The role tag, or an empty string when logged out.
    pub fn role_name(&self) -> &'static str {
        self.role.map(|role| role.as_str()).unwrap_or("")
    }
}

// --- Request Payloads (Input Schemas) ---

/// LoginRequest
///
/// Input payload for `POST /login` (form) and `POST /api/session/login` (JSON).
/// The role stays a raw string here so that an unknown tag surfaces as
/// `UnknownRole` instead of a generic deserialization rejection.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct LoginRequest {
    #[schema(example = "ROLE_ADMIN")]
    pub role: String,
}

impl LoginRequest {
    pub fn parse_role(&self) -> Result<Role, UnknownRole> {
        self.role.parse()
    }
}

// --- Response Payloads (Output Schemas) ---

/// LoginResponse
///
/// Result of a login: `success` is always true once the role has been accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct LoginResponse {
    pub success: bool,
    pub role: Role,
}

/// LogoutResponse
///
/// Result of a logout. `still_logged_in` is false once the session has been
/// cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct LogoutResponse {
    pub still_logged_in: bool,
}

/// SessionResponse
///
/// Read-only view of the session returned by `GET /api/session`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct SessionResponse {
    pub authenticated: bool,
    pub role: Option<Role>,
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        Self {
            authenticated: session.is_authenticated(),
            role: session.role(),
        }
    }
}
