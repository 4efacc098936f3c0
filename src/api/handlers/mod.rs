//! JSON API request handlers.

mod cities;
mod health;
mod session;
mod weather;

pub use cities::{add_city_handler, list_cities_handler, remove_city_handler};
pub use health::health_handler;
pub use session::session_handler;
pub use weather::weather_handler;
