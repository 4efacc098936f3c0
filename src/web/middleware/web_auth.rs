//! Cookie-based authentication middleware for the HTML dashboard.

use axum::{
    extract::{Request, State},
    http::header::COOKIE,
    middleware::Next,
    response::{Redirect, Response},
};

use crate::domain::session::session_cookie_value;
use crate::state::AppState;

/// Authenticates dashboard page requests using the session cookie.
///
/// # Authentication Flow
///
/// 1. Extract the `session` cookie from the request
/// 2. Validate signature and session liveness via
///    [`crate::application::services::SessionService`]
/// 3. On success, insert the [`CurrentSession`] into request extensions and
///    continue to the handler
/// 4. On failure or missing cookie, redirect to `/login`
///
/// # Differences from API Auth
///
/// Unlike the API auth middleware which returns `401 Unauthorized`,
/// this middleware redirects to the login page for a better user experience
/// in a browser context.
///
/// [`CurrentSession`]: crate::application::services::CurrentSession
pub async fn layer(
    State(st): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Redirect> {
    let cookie = req
        .headers()
        .get(COOKIE)
        .and_then(|header| header.to_str().ok())
        .and_then(session_cookie_value)
        .map(str::to_string);

    match cookie {
        Some(cookie) => match st.session_service.authenticate(&cookie).await {
            Ok(session) => {
                req.extensions_mut().insert(session);
                Ok(next.run(req).await)
            }
            Err(_) => Err(Redirect::to("/login")),
        },
        None => Err(Redirect::to("/login")),
    }
}
