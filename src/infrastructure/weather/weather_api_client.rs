//! Reqwest-based implementation of [`WeatherProvider`].

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;

use crate::domain::provider::{ProviderError, WeatherProvider};
use crate::domain::snapshot::WeatherSnapshot;

/// Client for the weatherapi.com-style `current.json` endpoint.
///
/// Issues `GET {base_url}/v1/current.json?key={key}&q={city}&aqi=no` and
/// decodes the subset of the payload the dashboard renders.
#[derive(Debug, Clone)]
pub struct WeatherApiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

/// The slice of the upstream payload the dashboard cares about.
///
/// All fields are mandatory; serde rejects payloads missing any of them,
/// which surfaces as [`ProviderError::Decode`] instead of a crash at render
/// time.
#[derive(Debug, Deserialize)]
struct CurrentResponse {
    current: Current,
}

#[derive(Debug, Deserialize)]
struct Current {
    condition: Condition,
    temp_c: f64,
    /// The upstream occasionally reports fractional humidity; rounded to a
    /// whole percentage on decode.
    humidity: f64,
    precip_mm: f64,
}

#[derive(Debug, Deserialize)]
struct Condition {
    text: String,
    icon: String,
}

impl WeatherApiClient {
    /// Creates a client with a per-request timeout.
    ///
    /// # Arguments
    ///
    /// - `base_url` - upstream base URL without a trailing slash
    /// - `api_key` - static upstream credential
    /// - `timeout` - per-request deadline; a hung upstream fails the affected
    ///   city instead of stalling the whole batch
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Network`] if the underlying client cannot
    /// be constructed.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }
}

#[async_trait]
impl WeatherProvider for WeatherApiClient {
    async fn current(&self, city: &str) -> Result<WeatherSnapshot, ProviderError> {
        let url = format!("{}/v1/current.json", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("q", city), ("aqi", "no")])
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(city, status = %status, "weather fetch failed");
            return Err(ProviderError::Upstream {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(map_transport_error)?;
        let decoded: CurrentResponse = serde_json::from_str(&body)
            .map_err(|e| ProviderError::Decode(e.to_string()))?;

        Ok(WeatherSnapshot {
            condition_text: decoded.current.condition.text,
            condition_icon_url: normalize_icon_url(&decoded.current.condition.icon),
            temperature_c: decoded.current.temp_c,
            humidity_pct: decoded.current.humidity.round() as u8,
            precipitation_mm: decoded.current.precip_mm,
            fetched_at: Utc::now(),
        })
    }
}

fn map_transport_error(e: reqwest::Error) -> ProviderError {
    if e.is_timeout() {
        ProviderError::Timeout
    } else {
        ProviderError::Network(e.to_string())
    }
}

/// Normalizes the protocol-relative icon URLs the upstream API returns
/// (`//cdn.weatherapi.com/...`) to absolute `https:` URLs.
fn normalize_icon_url(icon: &str) -> String {
    if icon.starts_with("//") {
        format!("https:{icon}")
    } else {
        icon.to_string()
    }
}
