use crate::{Location, SearchError, WeatherSnapshot};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openmeteo;

pub use openmeteo::OpenMeteoClient;

/// Resolves a free-text city name to coordinates.
#[async_trait]
pub trait Geocoder: Send + Sync + Debug {
    /// `name` is non-empty after trimming; callers validate before invoking.
    async fn resolve_city(&self, name: &str) -> Result<Location, SearchError>;
}

/// Fetches the current-conditions record for a pair of coordinates.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    async fn fetch_current(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<WeatherSnapshot, SearchError>;
}
