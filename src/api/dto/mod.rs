//! Data Transfer Objects for JSON API requests and responses.

pub mod cities;
pub mod health;
pub mod session;
pub mod weather;
