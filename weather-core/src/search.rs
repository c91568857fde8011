use parking_lot::Mutex;
use std::sync::Arc;

use crate::{
    Config,
    provider::{Geocoder, OpenMeteoClient, WeatherSource},
    state::{Effect, SearchEvent, SearchState},
};

/// Owns the search state and runs the effects the reducer asks for.
///
/// Several searches may be in flight on one controller; only the most recent
/// submission is allowed to commit its outcome.
#[derive(Debug)]
pub struct SearchController {
    geocoder: Arc<dyn Geocoder>,
    weather: Arc<dyn WeatherSource>,
    state: Mutex<SearchState>,
}

impl SearchController {
    pub fn new(geocoder: Arc<dyn Geocoder>, weather: Arc<dyn WeatherSource>) -> Self {
        Self { geocoder, weather, state: Mutex::new(SearchState::new()) }
    }

    /// Controller backed by Open-Meteo at the configured endpoints.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let client = Arc::new(OpenMeteoClient::from_config(config)?);
        Ok(Self::new(client.clone(), client))
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SearchState {
        self.state.lock().clone()
    }

    pub fn set_query(&self, query: impl Into<String>) {
        self.dispatch(SearchEvent::QueryChanged(query.into()));
    }

    /// Submit whatever is in the input and wait for the chain it starts.
    pub async fn submit(&self) -> SearchState {
        self.submit_observed(|_| {}).await
    }

    /// Like [`submit`](Self::submit), calling `observer` after every state change.
    pub async fn submit_observed<F>(&self, mut observer: F) -> SearchState
    where
        F: FnMut(&SearchState),
    {
        let (snapshot, mut next) = self.dispatch(SearchEvent::SubmitPressed);
        observer(&snapshot);

        while let Some(effect) = next {
            let event = self.run(effect).await;
            let (snapshot, effect) = self.dispatch(event);
            observer(&snapshot);
            next = effect;
        }

        self.state()
    }

    /// Type `query` into the input and submit it.
    pub async fn search(&self, query: &str) -> SearchState {
        self.set_query(query);
        self.submit().await
    }

    fn dispatch(&self, event: SearchEvent) -> (SearchState, Option<Effect>) {
        let mut guard = self.state.lock();
        let current = std::mem::take(&mut *guard);
        let (next, effect) = current.apply(event);
        *guard = next.clone();
        (next, effect)
    }

    async fn run(&self, effect: Effect) -> SearchEvent {
        match effect {
            Effect::Geocode { generation, query } => {
                match self.geocoder.resolve_city(&query).await {
                    Ok(location) => SearchEvent::GeocodeSucceeded { generation, location },
                    Err(error) => {
                        tracing::debug!(generation, "Geocoding '{}' failed: {}", query, error);
                        SearchEvent::GeocodeFailed { generation, error }
                    }
                }
            }
            Effect::FetchForecast { generation, latitude, longitude } => {
                match self.weather.fetch_current(latitude, longitude).await {
                    Ok(weather) => SearchEvent::ForecastSucceeded { generation, weather },
                    Err(error) => {
                        tracing::debug!(generation, "Forecast lookup failed: {}", error);
                        SearchEvent::ForecastFailed { generation, error }
                    }
                }
            }
        }
    }
}
