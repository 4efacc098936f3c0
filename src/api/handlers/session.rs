//! Current-session handler.

use axum::{Extension, Json, extract::State};

use crate::api::dto::session::SessionResponse;
use crate::application::services::CurrentSession;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the authenticated session's username and city list.
///
/// # Endpoint
///
/// `GET /api/session` (session cookie required)
pub async fn session_handler(
    State(state): State<AppState>,
    Extension(session): Extension<CurrentSession>,
) -> Result<Json<SessionResponse>, AppError> {
    let cities = state.session_service.cities(&session.id).await?;

    Ok(Json(SessionResponse {
        username: session.username,
        cities,
    }))
}
