use axum::{Router, extract::FromRef, http::HeaderName};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span};

// --- Module Structure ---

// Session holder, route guard and the request-side view of the session.
pub mod auth;
pub mod guard;
pub mod session;

// Route table, views and the handlers that render them.
pub mod handlers;
pub mod navigation;
pub mod views;

pub mod config;
pub mod models;

// Module for routing segregation (Public, Protected, API).
pub mod routes;
use routes::{api, protected, public};

// --- Public Re-exports ---

pub use config::AppConfig;
pub use session::{InMemorySessionStore, SessionService, SessionState};

/// ApiDoc
///
/// Generates the OpenAPI document for the JSON session API, served at
/// `/api-docs/openapi.json` and browsable under `/swagger-ui`.
#[derive(OpenApi)]
#[openapi(
    paths(handlers::get_session, handlers::api_login, handlers::api_logout),
    components(
        schemas(
            models::Role, models::LoginRequest, models::LoginResponse,
            models::LogoutResponse, models::SessionResponse,
        )
    ),
    tags(
        (name = "role-guard-portal", description = "Mock session API for the role guard demo")
    )
)]
struct ApiDoc;

/// AppState
///
/// The single state container shared by every request: the session holder and
/// the loaded configuration.
#[derive(Clone)]
pub struct AppState {
    /// Session Layer: the process-wide session holder.
    pub session: SessionState,
    /// Configuration: the loaded, immutable environment configuration.
    pub config: AppConfig,
}

impl AppState {
    /// A fresh, logged-out portal with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self {
            session: InMemorySessionStore::shared(),
            config,
        }
    }
}

// --- Axum FromRef Extractor Implementations ---

impl FromRef<AppState> for SessionState {
    fn from_ref(app_state: &AppState) -> SessionState {
        app_state.session.clone()
    }
}

impl FromRef<AppState> for AppConfig {
    fn from_ref(app_state: &AppState) -> AppConfig {
        app_state.config.clone()
    }
}

/// create_router
///
/// Assembles the portal's routes, applies the guard layers and the
/// observability stack, and registers the application state.
pub fn create_router(state: AppState) -> Router {
    // 1. CORS Configuration
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_origin(Any)
        .allow_headers(Any);

    // Header name constant for Request Correlation.
    let x_request_id = HeaderName::from_static("x-request-id");

    // 2. Base Router Assembly
    let base_router = Router::new()
        // Documentation: Serve the auto-generated Swagger UI.
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Public pages and form actions: no guard.
        .merge(public::public_routes())
        // Role-gated pages: each carries its own `role_guard` layer.
        .merge(protected::protected_routes(state.session.clone()))
        // JSON session API.
        .nest("/api", api::api_routes())
        // Anything else renders the not-found view.
        .fallback(handlers::not_found)
        .with_state(state);

    // 3. Observability and Correlation Layers
    base_router
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(x_request_id.clone(), MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(trace_span_logger)
                        .on_response(
                            DefaultOnResponse::new()
                                .level(Level::INFO)
                                .latency_unit(tower_http::LatencyUnit::Millis),
                        ),
                )
                .layer(PropagateRequestIdLayer::new(x_request_id)),
        )
        // 4. CORS Layer
        .layer(cors)
}

/// trace_span_logger
///
/// Builds the per-request tracing span, tagging it with the `x-request-id`
/// set by `SetRequestIdLayer` so every log line of a request can be correlated.
fn trace_span_logger(request: &axum::http::Request<axum::body::Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = ?request.method(),
        uri = ?request.uri(),
        req_id = %request_id,
    )
}
