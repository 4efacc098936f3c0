//! Fetch-all batch orchestration for the dashboard.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::task::JoinSet;

use crate::domain::provider::WeatherProvider;
use crate::domain::snapshot::FetchOutcome;

/// One city's position in a completed batch: the name plus its tagged
/// outcome. Results are paired by name, not by index, so a reordered or
/// partially failed batch can never mislabel a card.
#[derive(Debug, Clone, PartialEq)]
pub struct CityWeather {
    pub city: String,
    pub outcome: FetchOutcome,
}

/// Service running fetch-all batches against the weather provider.
///
/// A batch issues one provider call per city concurrently and awaits the
/// whole set before returning; callers render nothing until every city has
/// settled. Each batch is scoped to one request, so two batches never share
/// mutable state and a slow batch cannot overwrite a fresher one.
pub struct WeatherService {
    provider: Arc<dyn WeatherProvider>,
}

impl WeatherService {
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self { provider }
    }

    /// Fetches current weather for every city, concurrently.
    ///
    /// Returns one entry per input city, in input order. A provider error
    /// becomes a [`FetchOutcome::Failed`] carrying the reason; the batch
    /// itself never fails.
    pub async fn fetch_all(&self, cities: &[String]) -> Vec<CityWeather> {
        if cities.is_empty() {
            return Vec::new();
        }

        tracing::debug!(count = cities.len(), "starting weather fetch batch");

        let mut tasks = JoinSet::new();
        for city in cities {
            let provider = Arc::clone(&self.provider);
            let city = city.clone();
            tasks.spawn(async move {
                let outcome = match provider.current(&city).await {
                    Ok(snapshot) => FetchOutcome::Loaded(snapshot),
                    Err(e) => {
                        tracing::warn!(city, error = %e, "weather fetch failed");
                        FetchOutcome::Failed(e.to_string())
                    }
                };
                (city, outcome)
            });
        }

        let mut by_city: HashMap<String, FetchOutcome> = HashMap::with_capacity(cities.len());
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((city, outcome)) => {
                    by_city.insert(city, outcome);
                }
                Err(e) => tracing::error!(error = %e, "weather fetch task panicked"),
            }
        }

        cities
            .iter()
            .map(|city| CityWeather {
                city: city.clone(),
                outcome: by_city
                    .remove(city)
                    .unwrap_or_else(|| FetchOutcome::Failed("fetch task aborted".to_string())),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::provider::{MockWeatherProvider, ProviderError};
    use crate::domain::snapshot::WeatherSnapshot;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::time::Duration;

    fn snapshot(text: &str, temp_c: f64) -> WeatherSnapshot {
        WeatherSnapshot {
            condition_text: text.to_string(),
            condition_icon_url: "https://cdn.test/icon.png".to_string(),
            temperature_c: temp_c,
            humidity_pct: 80,
            precipitation_mm: 0.2,
            fetched_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_empty_city_list_is_empty_batch() {
        let service = WeatherService::new(Arc::new(MockWeatherProvider::new()));
        assert!(service.fetch_all(&[]).await.is_empty());
    }

    #[tokio::test]
    async fn test_failure_is_tagged_not_dropped() {
        let mut provider = MockWeatherProvider::new();
        provider
            .expect_current()
            .withf(|city| city == "Manchester")
            .returning(|_| Ok(snapshot("Cloudy", 14.0)));
        provider
            .expect_current()
            .withf(|city| city == "Glasgow")
            .returning(|_| Err(ProviderError::Upstream { status: 500 }));

        let service = WeatherService::new(Arc::new(provider));
        let results = service
            .fetch_all(&["Manchester".to_string(), "Glasgow".to_string()])
            .await;

        assert_eq!(results.len(), 2);
        assert!(results[0].outcome.is_loaded());
        assert_eq!(
            results[1].outcome,
            FetchOutcome::Failed("upstream returned HTTP 500".to_string())
        );
    }

    /// Provider whose first city answers slowest, so batch completion order
    /// is the reverse of input order.
    struct ReversedLatency;

    #[async_trait]
    impl WeatherProvider for ReversedLatency {
        async fn current(&self, city: &str) -> Result<WeatherSnapshot, ProviderError> {
            let delay = match city {
                "London" => 80,
                "Manchester" => 40,
                _ => 1,
            };
            tokio::time::sleep(Duration::from_millis(delay)).await;
            Ok(snapshot(city, delay as f64))
        }
    }

    #[tokio::test]
    async fn test_results_keyed_by_city_not_completion_order() {
        let service = WeatherService::new(Arc::new(ReversedLatency));
        let cities: Vec<String> = ["London", "Manchester", "Glasgow"]
            .iter()
            .map(ToString::to_string)
            .collect();

        let results = service.fetch_all(&cities).await;

        let names: Vec<&str> = results.iter().map(|r| r.city.as_str()).collect();
        assert_eq!(names, ["London", "Manchester", "Glasgow"]);
        for result in &results {
            match &result.outcome {
                FetchOutcome::Loaded(snap) => assert_eq!(snap.condition_text, result.city),
                FetchOutcome::Failed(reason) => panic!("unexpected failure: {reason}"),
            }
        }
    }

    #[tokio::test]
    async fn test_batches_are_independent() {
        let mut provider = MockWeatherProvider::new();
        provider
            .expect_current()
            .times(2)
            .returning(|_| Ok(snapshot("Sunny", 20.0)));

        let service = WeatherService::new(Arc::new(provider));
        let cities = vec!["London".to_string()];

        let first = service.fetch_all(&cities).await;
        let second = service.fetch_all(&cities).await;

        assert!(first[0].outcome.is_loaded());
        assert!(second[0].outcome.is_loaded());
    }
}
