//! City list handlers.

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::api::dto::cities::{AddCityRequest, CityListResponse};
use crate::application::services::CurrentSession;
use crate::error::AppError;
use crate::state::AppState;

/// Lists the session's cities in insertion order.
///
/// # Endpoint
///
/// `GET /api/cities` (session cookie required)
pub async fn list_cities_handler(
    State(state): State<AppState>,
    Extension(session): Extension<CurrentSession>,
) -> Result<Json<CityListResponse>, AppError> {
    let cities = state.session_service.cities(&session.id).await?;

    Ok(Json(CityListResponse {
        cities,
        changed: None,
    }))
}

/// Adds a catalog city to the session's list.
///
/// # Endpoint
///
/// `POST /api/cities` (session cookie required)
///
/// # Request Body
///
/// ```json
/// { "name": "Manchester" }
/// ```
///
/// # Semantics
///
/// Adding an already-present city is a no-op answered with `200` and
/// `"changed": false`, not an error.
///
/// # Errors
///
/// Returns 400 Bad Request for an empty name or a city not in the catalog.
pub async fn add_city_handler(
    State(state): State<AppState>,
    Extension(session): Extension<CurrentSession>,
    Json(payload): Json<AddCityRequest>,
) -> Result<Json<CityListResponse>, AppError> {
    payload.validate()?;

    let changed = state
        .session_service
        .add_city(&session.id, &payload.name)
        .await?;
    let cities = state.session_service.cities(&session.id).await?;

    Ok(Json(CityListResponse {
        cities,
        changed: Some(changed),
    }))
}

/// Removes a city from the session's list.
///
/// # Endpoint
///
/// `DELETE /api/cities/{name}` (session cookie required)
///
/// # Semantics
///
/// Removing a city that is not in the list is a no-op answered with `200`
/// and `"changed": false`.
pub async fn remove_city_handler(
    State(state): State<AppState>,
    Extension(session): Extension<CurrentSession>,
    Path(name): Path<String>,
) -> Result<Json<CityListResponse>, AppError> {
    let changed = state
        .session_service
        .remove_city(&session.id, &name)
        .await?;
    let cities = state.session_service.cities(&session.id).await?;

    Ok(Json(CityListResponse {
        cities,
        changed: Some(changed),
    }))
}
