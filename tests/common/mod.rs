#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Router, middleware};
use axum_test::TestServer;
use weather_dashboard::api;
use weather_dashboard::application::services::{AuthService, SessionService, WeatherService};
use weather_dashboard::infrastructure::session::MemorySessionRepository;
use weather_dashboard::infrastructure::weather::WeatherApiClient;
use weather_dashboard::state::AppState;
use weather_dashboard::web;

pub const TEST_USERNAME: &str = "admin";
pub const TEST_PASSWORD: &str = "secret";

/// Builds application state wired to a stub weather API at `weather_base`.
pub fn create_test_state(weather_base: &str) -> AppState {
    let provider = WeatherApiClient::new(weather_base, "test-key", Duration::from_secs(2))
        .expect("client construction cannot fail with a static config");

    let auth_service = Arc::new(AuthService::new(
        TEST_USERNAME.to_string(),
        TEST_PASSWORD.to_string(),
    ));
    let session_service = Arc::new(SessionService::new(
        Arc::new(MemorySessionRepository::new()),
        "test-signing-secret".to_string(),
    ));
    let weather_service = Arc::new(WeatherService::new(Arc::new(provider)));

    AppState::new(auth_service, session_service, weather_service)
}

/// Assembles the web and API routes with their auth middleware, without the
/// rate-limiting and path-normalization layers the full server adds.
pub fn test_app(state: AppState) -> Router {
    let api_router = api::routes::protected_routes().route_layer(
        middleware::from_fn_with_state(state.clone(), api::middleware::auth::layer),
    );

    let web_protected = web::routes::protected_routes().route_layer(
        middleware::from_fn_with_state(state.clone(), web::middleware::web_auth::layer),
    );

    Router::new()
        .route("/health", get(api::handlers::health_handler))
        .nest("/api", api_router)
        .merge(web_protected)
        .merge(web::routes::public_routes())
        .with_state(state)
}

/// Starts a test server that carries cookies across requests.
pub fn test_server(state: AppState) -> TestServer {
    TestServer::builder()
        .save_cookies()
        .build(test_app(state))
        .expect("test server should start")
}

/// Logs in with the test credentials; the session cookie is stored on the
/// server's cookie jar for subsequent requests.
pub async fn login(server: &TestServer) {
    let response = server
        .post("/login")
        .form(&[("username", TEST_USERNAME), ("password", TEST_PASSWORD)])
        .await;
    response.assert_status(StatusCode::SEE_OTHER);
}
