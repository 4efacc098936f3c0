//! DTOs for the weather fetch endpoint.

use serde::Serialize;

use crate::application::services::CityWeather;
use crate::domain::snapshot::{FetchOutcome, WeatherSnapshot};

/// Response body for `GET /api/weather`.
#[derive(Debug, Serialize)]
pub struct WeatherResponse {
    pub cities: Vec<CityWeatherDto>,
}

/// Per-city tagged outcome. `status` is `"loaded"` or `"failed"`; exactly
/// one of `snapshot`/`reason` is present.
#[derive(Debug, Serialize)]
pub struct CityWeatherDto {
    pub city: String,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<WeatherSnapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl From<CityWeather> for CityWeatherDto {
    fn from(result: CityWeather) -> Self {
        match result.outcome {
            FetchOutcome::Loaded(snapshot) => Self {
                city: result.city,
                status: "loaded",
                snapshot: Some(snapshot),
                reason: None,
            },
            FetchOutcome::Failed(reason) => Self {
                city: result.city,
                status: "failed",
                snapshot: None,
                reason: Some(reason),
            },
        }
    }
}
