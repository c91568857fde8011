/// Everything that can end a single search attempt.
///
/// The `Display` output is what the user sees in the error box.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("Please enter a city name.")]
    Validation,
    #[error("City not found. Please try another city.")]
    NotFound,
    #[error("{0}")]
    Network(String),
    #[error("Invalid weather data format received.")]
    InvalidData,
}

impl SearchError {
    pub fn geocoding_unavailable() -> Self {
        SearchError::Network("Failed to fetch coordinates.".to_string())
    }

    pub fn forecast_unavailable() -> Self {
        SearchError::Network("Failed to fetch weather data.".to_string())
    }
}
