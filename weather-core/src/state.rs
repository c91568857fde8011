//! Search state machine.
//!
//! All UI state lives in one [`SearchState`] value. It only changes through
//! [`SearchState::apply`], which consumes the current state and an event and
//! returns the next state plus the side effect to run, if any. Effects carry
//! the generation that issued them and their completion events echo it back;
//! completions from a superseded generation are dropped.

use crate::{Location, SearchError, WeatherSnapshot};

/// Discrete inputs to the state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    QueryChanged(String),
    SubmitPressed,
    GeocodeSucceeded { generation: u64, location: Location },
    GeocodeFailed { generation: u64, error: SearchError },
    ForecastSucceeded { generation: u64, weather: WeatherSnapshot },
    ForecastFailed { generation: u64, error: SearchError },
}

/// Side effects requested by the reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Geocode { generation: u64, query: String },
    FetchForecast { generation: u64, latitude: f64, longitude: f64 },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    pub query: String,
    pub loading: bool,
    pub error: Option<String>,
    pub location: Option<Location>,
    pub weather: Option<WeatherSnapshot>,
    generation: u64,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generation of the most recent submission.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn apply(self, event: SearchEvent) -> (SearchState, Option<Effect>) {
        match event {
            SearchEvent::QueryChanged(query) => (SearchState { query, ..self }, None),
            SearchEvent::SubmitPressed => self.submit(),
            SearchEvent::GeocodeSucceeded { generation, location } => {
                if !self.is_current(generation) {
                    return (self, None);
                }
                let effect = Effect::FetchForecast {
                    generation,
                    latitude: location.latitude,
                    longitude: location.longitude,
                };
                (SearchState { location: Some(location), ..self }, Some(effect))
            }
            SearchEvent::ForecastSucceeded { generation, weather } => {
                // a forecast only counts once its geocode has landed
                if !self.is_current(generation) || self.location.is_none() {
                    return (self, None);
                }
                let next = SearchState {
                    query: String::new(),
                    loading: false,
                    error: None,
                    weather: Some(weather),
                    ..self
                };
                (next, None)
            }
            SearchEvent::GeocodeFailed { generation, error }
            | SearchEvent::ForecastFailed { generation, error } => {
                if !self.is_current(generation) {
                    return (self, None);
                }
                (self.fail(&error), None)
            }
        }
    }

    fn submit(self) -> (SearchState, Option<Effect>) {
        let generation = self.generation + 1;
        let query = self.query.trim().to_string();

        if query.is_empty() {
            let next = SearchState { generation, ..self }.fail(&SearchError::Validation);
            return (next, None);
        }

        let next = SearchState {
            loading: true,
            error: None,
            location: None,
            weather: None,
            generation,
            ..self
        };
        (next, Some(Effect::Geocode { generation, query }))
    }

    fn fail(self, error: &SearchError) -> SearchState {
        SearchState {
            loading: false,
            error: Some(error.to_string()),
            location: None,
            weather: None,
            ..self
        }
    }

    fn is_current(&self, generation: u64) -> bool {
        self.loading && generation == self.generation
    }
}
