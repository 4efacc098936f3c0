//! Health check handler.

use axum::{Json, extract::State};

use crate::api::dto::health::HealthResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Reports service liveness.
///
/// # Endpoint
///
/// `GET /health` (public)
///
/// # Response
///
/// ```json
/// { "status": "ok", "active_sessions": 1 }
/// ```
///
/// The upstream weather API is deliberately not probed here: its failures
/// are per-city conditions on the dashboard, not service unavailability.
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, AppError> {
    let active_sessions = state.session_service.active_sessions().await?;

    Ok(Json(HealthResponse {
        status: "ok",
        active_sessions,
    }))
}
