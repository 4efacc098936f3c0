//! Session-cookie authentication middleware for the JSON API.

use axum::{
    extract::{Request, State},
    http::header::COOKIE,
    middleware::Next,
    response::Response,
};
use serde_json::json;

use crate::domain::session::session_cookie_value;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticates API requests using the session cookie.
///
/// # Authentication Flow
///
/// 1. Extract the `session` cookie from the request
/// 2. Validate signature and session liveness via
///    [`crate::application::services::SessionService`]
/// 3. On success, insert the [`CurrentSession`] into request extensions and
///    continue to the handler
/// 4. On failure or missing cookie, return `401 Unauthorized`
///
/// # Differences from Web Auth
///
/// Unlike the web middleware which redirects to the login page,
/// this middleware returns a JSON `401` suitable for programmatic clients.
///
/// [`CurrentSession`]: crate::application::services::CurrentSession
pub async fn layer(
    State(st): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let cookie = req
        .headers()
        .get(COOKIE)
        .and_then(|header| header.to_str().ok())
        .and_then(session_cookie_value)
        .map(str::to_string);

    match cookie {
        Some(cookie) => {
            let session = st.session_service.authenticate(&cookie).await?;
            req.extensions_mut().insert(session);
            Ok(next.run(req).await)
        }
        None => Err(AppError::unauthorized(
            "Unauthorized",
            json!({"reason": "Missing session cookie"}),
        )),
    }
}
