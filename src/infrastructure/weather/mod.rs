//! HTTP client for the upstream weather API.

mod weather_api_client;

pub use weather_api_client::WeatherApiClient;
