//! HTTP server initialization and runtime setup.
//!
//! Wires services to infrastructure and drives the Axum server lifecycle.

use crate::application::services::{AuthService, SessionService, WeatherService};
use crate::config::Config;
use crate::infrastructure::session::MemorySessionRepository;
use crate::infrastructure::weather::WeatherApiClient;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The upstream weather API client
/// - The in-memory session store
/// - Application services and shared state
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - The weather client cannot be constructed
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let provider = WeatherApiClient::new(
        config.weather_api_url.clone(),
        config.weather_api_key.clone(),
        Duration::from_secs(config.weather_timeout_seconds),
    )
    .map_err(|e| anyhow::anyhow!("failed to build weather client: {e}"))?;
    tracing::info!("Weather provider: {}", config.weather_api_url);

    let session_repository = Arc::new(MemorySessionRepository::new());

    let auth_service = Arc::new(AuthService::new(
        config.dashboard_username.clone(),
        config.dashboard_password.clone(),
    ));
    let session_service = Arc::new(SessionService::new(
        session_repository,
        config.session_signing_secret.clone(),
    ));
    let weather_service = Arc::new(WeatherService::new(Arc::new(provider)));

    let state = AppState::new(auth_service, session_service, weather_service);

    let app = app_router(state, config.behind_proxy);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

/// Resolves when SIGINT (or SIGTERM on Unix) is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("failed to install SIGTERM handler: {e}"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
