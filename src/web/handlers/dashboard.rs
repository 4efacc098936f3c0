//! Dashboard page and city form handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Extension, Form,
    extract::State,
    http::header::SET_COOKIE,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::application::services::{CityWeather, CurrentSession};
use crate::domain::catalog;
use crate::domain::snapshot::FetchOutcome;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::cookie;

/// Template for the dashboard page.
///
/// Renders `templates/dashboard.html` with:
/// - One card per city: the weather card for a loaded outcome, the loading
///   placeholder (plus failure reason) otherwise
/// - The add-city dropdown, populated with the catalog minus added cities
/// - Refresh and logout controls
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
struct DashboardTemplate {
    username: String,
    cards: Vec<CityWeather>,
    available: Vec<&'static str>,
}

/// Submitted add/remove city form field.
#[derive(Debug, Deserialize)]
pub struct CityForm {
    #[serde(default)]
    pub city: String,
}

/// Renders the dashboard with fresh weather data.
///
/// # Endpoint
///
/// `GET /dashboard` (session cookie required)
///
/// # Fetch-All
///
/// Every render runs one complete fetch-all batch for the session's city
/// list: mount, add-city and manual refresh all arrive here, so each page
/// view reflects exactly one batch and stale results from an earlier batch
/// can never leak into a newer page.
pub async fn dashboard_handler(
    State(state): State<AppState>,
    Extension(session): Extension<CurrentSession>,
) -> Result<Response, AppError> {
    let cities = state.session_service.cities(&session.id).await?;
    let cards = state.weather_service.fetch_all(&cities).await;

    let available = catalog::UK_CITIES
        .iter()
        .copied()
        .filter(|city| !cities.iter().any(|added| added == city))
        .collect();

    Ok(DashboardTemplate {
        username: session.username,
        cards,
        available,
    }
    .into_response())
}

/// Adds the selected city and returns to the dashboard.
///
/// # Endpoint
///
/// `POST /dashboard/cities` (session cookie required)
///
/// # Semantics
///
/// Empty selection, unknown city, and duplicate city are all no-ops, not
/// errors: the browser is redirected back to `/dashboard` either way, and
/// the redirected render performs the fetch-all with the updated list.
pub async fn add_city_form_handler(
    State(state): State<AppState>,
    Extension(session): Extension<CurrentSession>,
    Form(form): Form<CityForm>,
) -> Result<Redirect, AppError> {
    match state.session_service.add_city(&session.id, &form.city).await {
        Ok(_) => {}
        // Unknown or empty selection: no-op, mirror the dropdown's behavior.
        Err(AppError::Validation { .. }) => {}
        Err(e) => return Err(e),
    }

    Ok(Redirect::to("/dashboard"))
}

/// Removes the named city and returns to the dashboard.
///
/// # Endpoint
///
/// `POST /dashboard/cities/delete` (session cookie required)
///
/// Removing a city that is not in the list is a no-op.
pub async fn remove_city_form_handler(
    State(state): State<AppState>,
    Extension(session): Extension<CurrentSession>,
    Form(form): Form<CityForm>,
) -> Result<Redirect, AppError> {
    state
        .session_service
        .remove_city(&session.id, &form.city)
        .await?;

    Ok(Redirect::to("/dashboard"))
}

/// Logs the user out.
///
/// # Endpoint
///
/// `POST /dashboard/logout` (session cookie required)
///
/// Destroys the session, clears the cookie, and redirects to `/login`.
pub async fn logout_handler(
    State(state): State<AppState>,
    Extension(session): Extension<CurrentSession>,
) -> Result<Response, AppError> {
    state.session_service.destroy(&session.id).await?;

    Ok((
        [(SET_COOKIE, cookie::clear_session())],
        Redirect::to("/login"),
    )
        .into_response())
}
