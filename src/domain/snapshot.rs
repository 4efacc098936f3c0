//! Decoded weather data and per-city fetch outcomes.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Current weather for one city at a point in time.
///
/// All fields are required; a payload missing any of them is treated as a
/// failed fetch, never a partial snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherSnapshot {
    pub condition_text: String,
    /// Absolute URL of the condition icon. The upstream API returns
    /// protocol-relative URLs; they are normalized to `https:` on decode.
    pub condition_icon_url: String,
    pub temperature_c: f64,
    pub humidity_pct: u8,
    pub precipitation_mm: f64,
    pub fetched_at: DateTime<Utc>,
}

/// The result of fetching weather for one city within a batch.
///
/// A tagged outcome rather than an `Option`: a failed fetch is observable
/// and carries its reason instead of being indistinguishable from
/// "still loading".
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Loaded(WeatherSnapshot),
    Failed(String),
}

impl FetchOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, FetchOutcome::Loaded(_))
    }
}
