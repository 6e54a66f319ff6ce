use crate::{
    auth::CurrentSession,
    models::{LoginRequest, LoginResponse, LogoutResponse, SessionResponse},
    navigation::{FALLBACK_PATH, View},
    session::SessionState,
    views,
};
use axum::{
    Form, Json,
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Redirect},
};

// --- Page Handlers ---

/// home
///
/// [Public Route] The landing view, holding the login dialog.
pub async fn home(CurrentSession(session): CurrentSession) -> Html<String> {
    views::render_view(View::Home, &session, FALLBACK_PATH)
}

/// admin_dashboard
///
/// [Guarded Route: ROLE_ADMIN] Only reached once `role_guard` has allowed the request.
pub async fn admin_dashboard(CurrentSession(session): CurrentSession) -> Html<String> {
    views::render_view(View::AdminDashboard, &session, "/admin")
}

/// user_dashboard
///
/// [Guarded Route: ROLE_USER] Only reached once `role_guard` has allowed the request.
pub async fn user_dashboard(CurrentSession(session): CurrentSession) -> Html<String> {
    views::render_view(View::UserDashboard, &session, "/user")
}

/// not_found
///
/// Router fallback for any path missing from the route table, whatever the
/// session state.
pub async fn not_found(CurrentSession(session): CurrentSession, uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        views::render_view(View::NotFound, &session, uri.path()),
    )
}

// --- UI Action Handlers ---

/// login
///
/// [Public Route] Target of the "Login as ..." buttons in the login dialog.
/// Logs in under the submitted role, then navigates to that role's dashboard.
///
/// *Validation*: the role must be one of the `ROLE_*` tags; anything else is
/// rejected with 400 and leaves the session untouched.
pub async fn login(
    State(session): State<SessionState>,
    Form(payload): Form<LoginRequest>,
) -> Result<Redirect, StatusCode> {
    let role = payload.parse_role().map_err(|e| {
        tracing::warn!(error = %e, "login rejected");
        StatusCode::BAD_REQUEST
    })?;

    tracing::info!("Login as {}", role.label());
    session.login(role).await;

    Ok(Redirect::to(role.dashboard_path()))
}

/// logout
///
/// [Public Route] Target of the "Logout" button. Always lands on the home view.
pub async fn logout(State(session): State<SessionState>) -> Redirect {
    session.logout().await;
    Redirect::to(FALLBACK_PATH)
}

// --- Session API Handlers ---

/// get_session
///
/// [Public Route] Reports whether the portal is logged in and under which role.
#[utoipa::path(
    get,
    path = "/api/session",
    responses((status = 200, description = "Current session", body = SessionResponse))
)]
pub async fn get_session(CurrentSession(session): CurrentSession) -> Json<SessionResponse> {
    Json(SessionResponse::from(session))
}

/// api_login
///
/// [Public Route] JSON counterpart of the login dialog. Does not navigate;
/// the caller decides where to go next.
#[utoipa::path(
    post,
    path = "/api/session/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = LoginResponse),
        (status = 400, description = "Unknown role")
    )
)]
pub async fn api_login(
    State(session): State<SessionState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, StatusCode> {
    let role = payload.parse_role().map_err(|e| {
        tracing::warn!(error = %e, "login rejected");
        StatusCode::BAD_REQUEST
    })?;

    Ok(Json(session.login(role).await))
}

/// api_logout
///
/// [Public Route] Clears the session. `still_logged_in` is false on return.
#[utoipa::path(
    post,
    path = "/api/session/logout",
    responses((status = 200, description = "Logged out", body = LogoutResponse))
)]
pub async fn api_logout(State(session): State<SessionState>) -> Json<LogoutResponse> {
    Json(session.logout().await)
}
