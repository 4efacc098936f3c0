//! Domain layer containing core business entities and traits.
//!
//! This layer has no knowledge of HTTP, storage, or the upstream weather
//! provider. It defines the entities the rest of the application works with
//! and the interfaces infrastructure must implement.
//!
//! # Modules
//!
//! - [`catalog`] - The static catalog of selectable UK cities
//! - [`provider`] - The [`provider::WeatherProvider`] trait and its error type
//! - [`repositories`] - Repository traits for session storage
//! - [`session`] - Login sessions and per-session city lists
//! - [`snapshot`] - Decoded weather data and per-city fetch outcomes

pub mod catalog;
pub mod provider;
pub mod repositories;
pub mod session;
pub mod snapshot;
