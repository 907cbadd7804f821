//! Weather lookup for the property location.
//!
//! One outbound HTTP call per fetch, no internal retry. Failures degrade to
//! `None` — whether a missing summary aborts the pipeline is decided by the
//! orchestrator's `WeatherPolicy`, not here.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::warn;

use crate::pipeline::types::WeatherSummary;

const OPENWEATHERMAP_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Trait for weather lookups — pure I/O, no policy.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetch current weather for a US city and 2-letter state code.
    ///
    /// Returns `None` on any non-success condition (missing key, non-2xx
    /// status, network failure, malformed payload). Never errors.
    async fn fetch(&self, city: &str, state: &str) -> Option<WeatherSummary>;
}

/// OpenWeatherMap current-weather client.
pub struct OpenWeatherMap {
    api_key: Option<SecretString>,
    client: reqwest::Client,
}

impl OpenWeatherMap {
    pub fn new(api_key: Option<SecretString>) -> Self {
        Self {
            api_key,
            client: reqwest::Client::new(),
        }
    }

    /// Read the API key from `OPENWEATHERMAP_API_KEY`. A missing key is a
    /// valid, degraded configuration — every fetch returns `None`.
    pub fn from_env() -> Self {
        let api_key = std::env::var("OPENWEATHERMAP_API_KEY")
            .ok()
            .filter(|k| !k.is_empty())
            .map(SecretString::from);
        Self::new(api_key)
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherMap {
    async fn fetch(&self, city: &str, state: &str) -> Option<WeatherSummary> {
        let Some(api_key) = &self.api_key else {
            warn!("OPENWEATHERMAP_API_KEY not configured, skipping weather");
            return None;
        };

        let response = self
            .client
            .get(OPENWEATHERMAP_URL)
            .query(&[
                ("q", format!("{city},{state},US").as_str()),
                ("appid", api_key.expose_secret()),
                ("units", "imperial"),
            ])
            .send()
            .await;

        let response = match response {
            Ok(r) => r,
            Err(e) => {
                warn!(city, state, error = %e, "Weather request failed");
                return None;
            }
        };

        if !response.status().is_success() {
            warn!(
                city,
                state,
                status = %response.status(),
                "Weather API returned non-success status"
            );
            return None;
        }

        let payload: OwmResponse = match response.json().await {
            Ok(p) => p,
            Err(e) => {
                warn!(city, state, error = %e, "Malformed weather payload");
                return None;
            }
        };

        let condition = payload
            .weather
            .first()
            .map(|w| w.main.clone())
            .unwrap_or_else(|| "Unknown".to_string());
        let description = payload
            .weather
            .first()
            .map(|w| w.description.clone())
            .unwrap_or_else(|| "unknown conditions".to_string());
        let temperature = payload.main.temp.round() as i32;

        Some(WeatherSummary::from_parts(
            &condition,
            &description,
            temperature,
        ))
    }
}

/// OpenWeatherMap response payload (only the fields we read).
#[derive(Debug, Deserialize)]
struct OwmResponse {
    main: OwmMain,
    #[serde(default)]
    weather: Vec<OwmCondition>,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwmCondition {
    main: String,
    description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_api_key_returns_none() {
        let provider = OpenWeatherMap::new(None);
        assert!(provider.fetch("Austin", "TX").await.is_none());
    }

    #[test]
    fn payload_deserializes_expected_fields() {
        let raw = r#"{
            "main": { "temp": 71.6, "humidity": 40 },
            "weather": [{ "id": 800, "main": "Clear", "description": "clear sky" }]
        }"#;
        let payload: OwmResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(payload.weather[0].main, "Clear");
        assert_eq!(payload.main.temp.round() as i32, 72);
    }
}
