use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::{Config, Location, SearchError, WeatherSnapshot};

use super::{Geocoder, WeatherSource};

/// Fields requested from the forecast endpoint's `current` block.
pub const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,weather_code,wind_speed_10m";

/// Open-Meteo `current.time` format, e.g. "2026-10-16T12:00".
const OBSERVED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Client for the Open-Meteo geocoding and forecast APIs. No API key needed.
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    geocoding_url: String,
    forecast_url: String,
    http: Client,
}

impl OpenMeteoClient {
    pub fn new(geocoding_url: impl Into<String>, forecast_url: impl Into<String>) -> Self {
        Self {
            geocoding_url: geocoding_url.into(),
            forecast_url: forecast_url.into(),
            http: Client::new(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            geocoding_url: config.endpoints.geocoding.clone(),
            forecast_url: config.endpoints.forecast.clone(),
            http,
        })
    }
}

#[derive(Debug, Deserialize)]
struct OmGeocodingResponse {
    /// Kept loose so malformed later matches don't spoil the first one.
    #[serde(default)]
    results: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Deserialize)]
struct OmPlace {
    name: String,
    #[serde(default)]
    country: Option<String>,
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Deserialize)]
struct OmForecastResponse {
    #[serde(default)]
    current: Option<OmCurrent>,
}

#[derive(Debug, Deserialize)]
struct OmCurrent {
    #[serde(default)]
    time: Option<serde_json::Value>,
    temperature_2m: f64,
    relative_humidity_2m: f64,
    weather_code: i32,
    wind_speed_10m: f64,
}

#[async_trait]
impl Geocoder for OpenMeteoClient {
    async fn resolve_city(&self, name: &str) -> Result<Location, SearchError> {
        tracing::debug!(city = name, "Geocoding city");

        let res = self
            .http
            .get(&self.geocoding_url)
            .query(&[("name", name)])
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Failed to send request to Open-Meteo geocoding: {e}");
                SearchError::geocoding_unavailable()
            })?;

        let status = res.status();
        let body = res.text().await.map_err(|e| {
            tracing::warn!("Failed to read Open-Meteo geocoding response body: {e}");
            SearchError::geocoding_unavailable()
        })?;

        if !status.is_success() {
            tracing::warn!(
                "Open-Meteo geocoding request failed with status {}: {}",
                status,
                truncate_body(&body),
            );
            return Err(SearchError::geocoding_unavailable());
        }

        let parsed: OmGeocodingResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::debug!("Unusable geocoding response ({e}): {}", truncate_body(&body));
            SearchError::NotFound
        })?;

        // Single best match: anything after the first result is ignored.
        let first = parsed
            .results
            .and_then(|results| results.into_iter().next())
            .ok_or(SearchError::NotFound)?;

        let place: OmPlace = serde_json::from_value(first).map_err(|e| {
            tracing::debug!("Unusable first geocoding match ({e}): {}", truncate_body(&body));
            SearchError::NotFound
        })?;

        let location = Location {
            name: place.name,
            country: place.country.unwrap_or_default(),
            latitude: place.latitude,
            longitude: place.longitude,
        };

        tracing::info!(
            "Resolved '{}' to {} ({:.4}, {:.4})",
            name,
            location.display_name(),
            location.latitude,
            location.longitude
        );
        Ok(location)
    }
}

#[async_trait]
impl WeatherSource for OpenMeteoClient {
    async fn fetch_current(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<WeatherSnapshot, SearchError> {
        tracing::debug!(latitude, longitude, "Fetching current conditions");

        let res = self
            .http
            .get(&self.forecast_url)
            .query(&[
                ("latitude", latitude.to_string().as_str()),
                ("longitude", longitude.to_string().as_str()),
                ("current", CURRENT_FIELDS),
            ])
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Failed to send request to Open-Meteo forecast: {e}");
                SearchError::forecast_unavailable()
            })?;

        let status = res.status();
        let body = res.text().await.map_err(|e| {
            tracing::warn!("Failed to read Open-Meteo forecast response body: {e}");
            SearchError::forecast_unavailable()
        })?;

        if !status.is_success() {
            tracing::warn!(
                "Open-Meteo forecast request failed with status {}: {}",
                status,
                truncate_body(&body),
            );
            return Err(SearchError::forecast_unavailable());
        }

        let parsed: OmForecastResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::debug!("Unusable forecast response ({e}): {}", truncate_body(&body));
            SearchError::InvalidData
        })?;

        let current = parsed.current.ok_or_else(|| {
            tracing::debug!("Forecast response has no current block: {}", truncate_body(&body));
            SearchError::InvalidData
        })?;

        let observed_at = current
            .time
            .as_ref()
            .and_then(|t| t.as_str())
            .and_then(|t| NaiveDateTime::parse_from_str(t, OBSERVED_AT_FORMAT).ok());

        Ok(WeatherSnapshot {
            temperature_c: current.temperature_2m,
            relative_humidity_pct: current.relative_humidity_2m,
            wind_speed_kmh: current.wind_speed_10m,
            weather_code: current.weather_code,
            observed_at,
        })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
