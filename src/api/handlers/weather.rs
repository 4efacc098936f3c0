//! Weather fetch-all handler.

use axum::{Extension, Json, extract::State};

use crate::api::dto::weather::{CityWeatherDto, WeatherResponse};
use crate::application::services::CurrentSession;
use crate::error::AppError;
use crate::state::AppState;

/// Runs a fetch-all batch for the session's city list.
///
/// # Endpoint
///
/// `GET /api/weather` (session cookie required)
///
/// # Batch Semantics
///
/// One upstream request per city, issued concurrently and awaited jointly;
/// the response carries per-city tagged outcomes. A failed city appears as
/// `"status": "failed"` with a reason; the endpoint itself succeeds as long
/// as the batch runs.
///
/// # Response
///
/// ```json
/// {
///   "cities": [
///     {
///       "city": "Manchester",
///       "status": "loaded",
///       "snapshot": {
///         "condition_text": "Cloudy",
///         "condition_icon_url": "https://cdn.weatherapi.com/64x64/cloudy.png",
///         "temperature_c": 14.0,
///         "humidity_pct": 80,
///         "precipitation_mm": 0.2,
///         "fetched_at": "2026-01-01T12:00:00Z"
///       }
///     },
///     { "city": "Glasgow", "status": "failed", "reason": "upstream returned HTTP 500" }
///   ]
/// }
/// ```
pub async fn weather_handler(
    State(state): State<AppState>,
    Extension(session): Extension<CurrentSession>,
) -> Result<Json<WeatherResponse>, AppError> {
    let cities = state.session_service.cities(&session.id).await?;
    let results = state.weather_service.fetch_all(&cities).await;

    Ok(Json(WeatherResponse {
        cities: results.into_iter().map(CityWeatherDto::from).collect(),
    }))
}
