//! The upstream weather provider interface.

use crate::domain::snapshot::WeatherSnapshot;
use async_trait::async_trait;

/// Errors a weather provider can produce for a single city fetch.
///
/// Variants are deliberately transport-agnostic so the domain does not
/// depend on the HTTP client in use.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The upstream API answered with a non-2xx status.
    #[error("upstream returned HTTP {status}")]
    Upstream { status: u16 },
    /// The request did not complete within the configured timeout.
    #[error("request timed out")]
    Timeout,
    /// Connection-level failure (DNS, TLS, refused connection).
    #[error("network error: {0}")]
    Network(String),
    /// The response body was not the expected JSON shape.
    #[error("malformed weather payload: {0}")]
    Decode(String),
}

/// Interface for fetching current weather for a single city.
///
/// The unit of a fetch-all batch: callers issue one `current` call per city
/// and await them jointly.
///
/// # Implementations
///
/// - [`crate::infrastructure::weather::WeatherApiClient`] - HTTP implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetches current weather for `city`.
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderError`] on upstream failure, timeout, network
    /// error, or a malformed payload. Never panics on bad upstream data.
    async fn current(&self, city: &str) -> Result<WeatherSnapshot, ProviderError>;
}
