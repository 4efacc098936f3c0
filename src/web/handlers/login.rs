//! Login page and form submission handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::{HeaderMap, header::COOKIE, header::SET_COOKIE},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::domain::session::session_cookie_value;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::cookie;

/// Template for the login page.
///
/// Renders `templates/login.html` with:
/// - Username/password form
/// - Optional inline error banner (auto-dismissed after 5 seconds)
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
struct LoginTemplate {
    error: Option<String>,
}

/// Submitted login form fields.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Renders the login page.
///
/// # Endpoint
///
/// `GET /login` (public)
///
/// # Idempotent Redirect
///
/// A request that already carries a valid session cookie is sent straight
/// to `/dashboard` instead of seeing the form again.
pub async fn login_page_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Some(cookie) = headers
        .get(COOKIE)
        .and_then(|header| header.to_str().ok())
        .and_then(session_cookie_value)
        && state.session_service.authenticate(cookie).await.is_ok()
    {
        return Redirect::to("/dashboard").into_response();
    }

    LoginTemplate { error: None }.into_response()
}

/// Handles login form submission.
///
/// # Endpoint
///
/// `POST /login` (public)
///
/// # Behavior
///
/// - Credentials matching the configured pair: create a session, set the
///   session cookie, redirect to `/dashboard`.
/// - Anything else: re-render the login page with an error banner; no
///   session is created and no cookie is set.
pub async fn login_submit_handler(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    if !state
        .auth_service
        .verify_credentials(&form.username, &form.password)
    {
        tracing::info!(username = form.username, "rejected login attempt");
        return Ok(LoginTemplate {
            error: Some("Invalid username or password. Please try again.".to_string()),
        }
        .into_response());
    }

    let (_, cookie_value) = state.session_service.create(&form.username).await?;

    Ok((
        [(SET_COOKIE, cookie::set_session(&cookie_value))],
        Redirect::to("/dashboard"),
    )
        .into_response())
}
