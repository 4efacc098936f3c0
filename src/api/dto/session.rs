//! DTO for the session endpoint.

use serde::Serialize;

/// Response body for `GET /api/session`.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub username: String,
    pub cities: Vec<String>,
}
