use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// First geocoding match for a city query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    /// Empty when the geocoder reports no country.
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    /// "Paris, France", or just the name when no country is known.
    pub fn display_name(&self) -> String {
        if self.country.is_empty() {
            self.name.clone()
        } else {
            format!("{}, {}", self.name, self.country)
        }
    }
}

/// Current conditions at a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub temperature_c: f64,
    pub relative_humidity_pct: f64,
    pub wind_speed_kmh: f64,
    pub weather_code: i32,
    /// Observation time reported by the provider, in GMT.
    pub observed_at: Option<NaiveDateTime>,
}
