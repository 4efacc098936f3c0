//! Infrastructure layer: concrete storage and upstream integrations.
//!
//! # Modules
//!
//! - [`session`] - In-memory session repository
//! - [`weather`] - HTTP client for the upstream weather API

pub mod session;
pub mod weather;
