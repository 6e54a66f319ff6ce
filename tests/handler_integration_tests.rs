use axum::{
    Form, Json,
    body::{Body, to_bytes},
    extract::State,
    http::{Method, Request, StatusCode, header},
    response::Response,
};
use role_guard_portal::{
    AppConfig, AppState, SessionService, create_router, handlers,
    models::{LoginRequest, LoginResponse, LogoutResponse, Role, SessionResponse},
};
use tower::util::ServiceExt;

// --- TEST UTILITIES ---

fn create_test_state() -> AppState {
    AppState::new(AppConfig::default())
}

async fn get(app: &axum::Router, path: &str) -> Response {
    app.clone()
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post_form(app: &axum::Router, path: &str, body: &str) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri(path)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// --- ROUTING TESTS ---

#[tokio::test]
async fn test_root_redirects_to_home() {
    let app = create_router(create_test_state());

    let response = get(&app, "/").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/home");
}

#[tokio::test]
async fn test_home_renders_login_dialog_when_logged_out() {
    let app = create_router(create_test_state());

    let response = get(&app, "/home").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Login as Admin"));
    assert!(body.contains("Login as User"));
    assert!(!body.contains("Logout"));
}

#[tokio::test]
async fn test_fresh_session_admin_redirects_home() {
    let app = create_router(create_test_state());

    let response = get(&app, "/admin").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/home");
}

#[tokio::test]
async fn test_admin_session_renders_admin_dashboard() {
    let state = create_test_state();
    state.session.login(Role::Admin).await;
    let app = create_router(state);

    let response = get(&app, "/admin").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("<h1>Admin Dashboard</h1>"));
    assert!(body.contains("Signed in as Admin"));
}

#[tokio::test]
async fn test_admin_session_is_redirected_from_user_dashboard() {
    let state = create_test_state();
    state.session.login(Role::Admin).await;
    let app = create_router(state);

    let response = get(&app, "/user").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/home");
}

#[tokio::test]
async fn test_logged_out_user_is_redirected_from_user_dashboard() {
    let state = create_test_state();
    state.session.login(Role::User).await;
    state.session.logout().await;
    let app = create_router(state);

    let response = get(&app, "/user").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/home");
}

#[tokio::test]
async fn test_unknown_path_renders_not_found_in_any_state() {
    let state = create_test_state();
    let session = state.session.clone();
    let app = create_router(state);

    for role in [None, Some(Role::Admin), Some(Role::User)] {
        match role {
            Some(role) => {
                session.login(role).await;
            }
            None => {
                session.logout().await;
            }
        }

        let response = get(&app, "/unknown-path").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_text(response).await;
        assert!(body.contains("Page Not Found"));
        assert!(body.contains("unknown-path"));
    }
}

#[tokio::test]
async fn test_health_check() {
    let app = create_router(create_test_state());

    let response = get(&app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "ok");
}

// --- UI ACTION TESTS ---

#[tokio::test]
async fn test_login_form_navigates_to_role_dashboard() {
    let state = create_test_state();
    let session = state.session.clone();
    let app = create_router(state);

    let response = post_form(&app, "/login", "role=ROLE_USER").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/user");
    assert_eq!(session.role().await, Some(Role::User));

    let response = get(&app, "/user").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_login_form_rejects_unknown_role() {
    let state = create_test_state();
    let session = state.session.clone();
    let app = create_router(state);

    let response = post_form(&app, "/login", "role=ROLE_ROOT").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(!session.is_logged_in().await);
}

#[tokio::test]
async fn test_logout_form_returns_home_and_closes_dashboards() {
    let state = create_test_state();
    state.session.login(Role::Admin).await;
    let app = create_router(state);

    let response = post_form(&app, "/logout", "").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/home");

    let response = get(&app, "/admin").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

// --- DIRECT HANDLER TESTS ---

#[tokio::test]
async fn test_api_login_handler_returns_role() {
    let state = create_test_state();

    let result = handlers::api_login(
        State(state.session.clone()),
        Json(LoginRequest {
            role: "ROLE_ADMIN".to_string(),
        }),
    )
    .await;

    let Json(response) = result.unwrap();
    assert_eq!(
        response,
        LoginResponse {
            success: true,
            role: Role::Admin
        }
    );
}

#[tokio::test]
async fn test_api_login_handler_rejects_lowercase_role() {
    let state = create_test_state();

    let result = handlers::api_login(
        State(state.session.clone()),
        Json(LoginRequest {
            role: "admin".to_string(),
        }),
    )
    .await;

    assert_eq!(result.unwrap_err(), StatusCode::BAD_REQUEST);
    assert!(!state.session.is_logged_in().await);
}

#[tokio::test]
async fn test_login_handler_redirects_by_role() {
    let state = create_test_state();

    let result = handlers::login(
        State(state.session.clone()),
        Form(LoginRequest {
            role: "ROLE_ADMIN".to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());
    assert_eq!(state.session.role().await, Some(Role::Admin));
}

#[tokio::test]
async fn test_api_logout_handler_reports_logged_out() {
    let state = create_test_state();
    state.session.login(Role::User).await;

    let Json(response) = handlers::api_logout(State(state.session.clone())).await;

    assert_eq!(
        response,
        LogoutResponse {
            still_logged_in: false
        }
    );
}

#[tokio::test]
async fn test_session_endpoint_reflects_login() {
    let state = create_test_state();
    state.session.login(Role::User).await;
    let app = create_router(state);

    let response = get(&app, "/api/session").await;

    assert_eq!(response.status(), StatusCode::OK);
    let session: SessionResponse = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(
        session,
        SessionResponse {
            authenticated: true,
            role: Some(Role::User)
        }
    );
}
