//! DTOs for the city list endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for `POST /api/cities`.
#[derive(Debug, Deserialize, Validate)]
pub struct AddCityRequest {
    /// Catalog city name, case-sensitive.
    #[validate(length(min = 1, max = 64))]
    pub name: String,
}

/// Response body for all city-list endpoints: the list after the operation.
#[derive(Debug, Serialize)]
pub struct CityListResponse {
    pub cities: Vec<String>,
    /// Whether the requested mutation changed the list. `false` marks the
    /// no-op cases (duplicate add, absent remove).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changed: Option<bool>,
}
