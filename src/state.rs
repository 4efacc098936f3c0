use std::sync::Arc;

use crate::application::services::{AuthService, SessionService, WeatherService};

/// Shared application state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub session_service: Arc<SessionService>,
    pub weather_service: Arc<WeatherService>,
}

impl AppState {
    pub fn new(
        auth_service: Arc<AuthService>,
        session_service: Arc<SessionService>,
        weather_service: Arc<WeatherService>,
    ) -> Self {
        Self {
            auth_service,
            session_service,
            weather_service,
        }
    }
}
