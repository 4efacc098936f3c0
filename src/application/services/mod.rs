//! Business logic services.

mod auth_service;
mod session_service;
mod weather_service;

pub use auth_service::AuthService;
pub use session_service::{CurrentSession, SessionService};
pub use weather_service::{CityWeather, WeatherService};
