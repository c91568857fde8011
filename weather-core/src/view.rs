//! What the presentation layer draws for a given [`SearchState`].

use serde::Serialize;

use crate::{
    Location, SearchState, WeatherSnapshot,
    codes::{IconVariant, describe, icon_for},
};

/// Exactly one of these is shown below the input form.
#[derive(Debug, Clone, PartialEq)]
pub enum View<'a> {
    Idle,
    Loading,
    Error(&'a str),
    Result(ResultCard),
}

/// Pre-formatted contents of the result card, in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultCard {
    pub title: String,
    pub icon: IconVariant,
    pub temperature: String,
    pub description: String,
    pub humidity: String,
    pub wind: String,
    pub observed: Option<String>,
}

impl ResultCard {
    pub fn new(location: &Location, weather: &WeatherSnapshot) -> Self {
        Self {
            title: location.display_name(),
            icon: icon_for(weather.weather_code),
            temperature: format!("{}°C", reading(weather.temperature_c)),
            description: describe(weather.weather_code).to_string(),
            humidity: format!("{}%", reading(weather.relative_humidity_pct)),
            wind: format!("{} km/h", reading(weather.wind_speed_kmh)),
            observed: weather
                .observed_at
                .map(|t| format!("Updated {} GMT", t.format("%Y-%m-%d %H:%M"))),
        }
    }
}

/// Shortest decimal form, with `-0` shown as `0`.
fn reading(value: f64) -> f64 {
    value + 0.0
}

impl SearchState {
    pub fn view(&self) -> View<'_> {
        if self.loading {
            return View::Loading;
        }
        if let Some(message) = self.error.as_deref() {
            return View::Error(message);
        }
        match (&self.location, &self.weather) {
            (Some(location), Some(weather)) => View::Result(ResultCard::new(location, weather)),
            _ => View::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SearchEvent;
    use chrono::NaiveDate;

    fn paris() -> Location {
        Location {
            name: "Paris".into(),
            country: "France".into(),
            latitude: 48.8566,
            longitude: 2.3522,
        }
    }

    fn overcast() -> WeatherSnapshot {
        WeatherSnapshot {
            temperature_c: 18.5,
            relative_humidity_pct: 60.0,
            wind_speed_kmh: 12.4,
            weather_code: 3,
            observed_at: None,
        }
    }

    #[test]
    fn result_card_layout() {
        let card = ResultCard::new(&paris(), &overcast());

        assert_eq!(card.title, "Paris, France");
        assert_eq!(card.icon, IconVariant::Cloud);
        assert_eq!(card.temperature, "18.5°C");
        assert_eq!(card.description, "Overcast");
        assert_eq!(card.humidity, "60%");
        assert_eq!(card.wind, "12.4 km/h");
        assert_eq!(card.observed, None);
    }

    #[test]
    fn result_card_unknown_code_and_timestamp() {
        let weather = WeatherSnapshot {
            temperature_c: -2.0,
            weather_code: 77,
            observed_at: NaiveDate::from_ymd_opt(2026, 1, 5).and_then(|d| d.and_hms_opt(6, 15, 0)),
            ..overcast()
        };
        let card = ResultCard::new(&paris(), &weather);

        assert_eq!(card.temperature, "-2°C");
        assert_eq!(card.description, "Unknown weather condition");
        assert_eq!(card.icon, IconVariant::DefaultCloud);
        assert_eq!(card.observed.as_deref(), Some("Updated 2026-01-05 06:15 GMT"));
    }

    #[test]
    fn negative_zero_reads_as_zero() {
        let weather = WeatherSnapshot {
            temperature_c: -0.0,
            wind_speed_kmh: -0.0,
            ..overcast()
        };
        let card = ResultCard::new(&paris(), &weather);

        assert_eq!(card.temperature, "0°C");
        assert_eq!(card.wind, "0 km/h");
    }

    #[test]
    fn view_follows_state() {
        let state = SearchState::new();
        assert_eq!(state.view(), View::Idle);

        let (state, _) = state.apply(SearchEvent::SubmitPressed);
        assert_eq!(state.view(), View::Error("Please enter a city name."));

        let (state, _) = state
            .apply(SearchEvent::QueryChanged("Paris".into()))
            .0
            .apply(SearchEvent::SubmitPressed);
        assert_eq!(state.view(), View::Loading);

        let generation = state.generation();
        let (state, _) = state.apply(SearchEvent::GeocodeSucceeded { generation, location: paris() });
        // location alone is never shown
        assert_eq!(state.view(), View::Loading);

        let (state, _) = state.apply(SearchEvent::ForecastSucceeded { generation, weather: overcast() });
        assert_eq!(state.view(), View::Result(ResultCard::new(&paris(), &overcast())));
    }
}
