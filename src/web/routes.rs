//! Web page route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    add_city_form_handler, dashboard_handler, login_page_handler, login_submit_handler,
    logout_handler, remove_city_form_handler,
};
use axum::{
    Router,
    routing::{get, post},
};

/// Protected page routes requiring a session cookie.
///
/// Protected via [`crate::web::middleware::web_auth`].
///
/// # Endpoints
///
/// - `GET /dashboard` - Dashboard page with fresh weather cards
/// - `POST /dashboard/cities` - Add the selected city
/// - `POST /dashboard/cities/delete` - Remove a city
/// - `POST /dashboard/logout` - Destroy the session
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard_handler))
        .route("/dashboard/cities", post(add_city_form_handler))
        .route("/dashboard/cities/delete", post(remove_city_form_handler))
        .route("/dashboard/logout", post(logout_handler))
}

/// Public page routes without authentication.
///
/// # Endpoints
///
/// - `GET /login` - Login page (redirects to `/dashboard` when already
///   logged in)
/// - `POST /login` - Credential check
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/login", get(login_page_handler).post(login_submit_handler))
}
