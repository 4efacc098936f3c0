//! Web dashboard layer for browser-based UI.
//!
//! Provides the login page and the weather dashboard as server-rendered
//! HTML. Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`cookie`] - Session cookie construction
//! - [`handlers`] - Template rendering and form handlers
//! - [`middleware`] - Web-specific middleware (cookie auth)
//! - [`routes`] - Page route configuration

pub mod cookie;
pub mod handlers;
pub mod middleware;
pub mod routes;
