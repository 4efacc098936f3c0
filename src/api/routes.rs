//! JSON API route configuration.

use crate::api::handlers::{
    add_city_handler, list_cities_handler, remove_city_handler, session_handler, weather_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get},
};

/// Protected API routes requiring a session cookie.
///
/// Protected via [`crate::api::middleware::auth`].
///
/// # Endpoints
///
/// - `GET /session` - Current session info
/// - `GET /cities` - The session's city list
/// - `POST /cities` - Add a catalog city (duplicate add is a no-op)
/// - `DELETE /cities/{name}` - Remove a city (absent remove is a no-op)
/// - `GET /weather` - Fetch-all batch for the session's cities
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/session", get(session_handler))
        .route("/cities", get(list_cities_handler).post(add_city_handler))
        .route("/cities/{name}", delete(remove_city_handler))
        .route("/weather", get(weather_handler))
}
