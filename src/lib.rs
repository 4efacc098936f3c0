//! # Weather Dashboard
//!
//! A small self-hosted weather dashboard built with Axum: a login gate in
//! front of an HTML page where a user picks UK cities and watches current
//! conditions fetched from an upstream weather API.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities (sessions, city lists,
//!   weather snapshots) and the provider/repository traits
//! - **Application Layer** ([`application`]) - Session lifecycle, credential
//!   checks, and fetch-all batch orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - The in-memory session
//!   store and the HTTP client for the upstream weather API
//! - **API Layer** ([`api`]) - JSON endpoints, DTOs, and middleware
//! - **Web Layer** ([`web`]) - Server-rendered HTML pages (login, dashboard)
//!
//! ## Quick Start
//!
//! ```bash
//! # Set required environment variables
//! export WEATHER_API_KEY="your-weatherapi-key"
//! export DASHBOARD_USERNAME="ipgautomotive"
//! export DASHBOARD_PASSWORD="carmaker"
//! export SESSION_SIGNING_SECRET="change-me"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AuthService, SessionService, WeatherService};
    pub use crate::domain::session::{CityList, Session, SessionId};
    pub use crate::domain::snapshot::{FetchOutcome, WeatherSnapshot};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
