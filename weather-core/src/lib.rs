//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - The weather code table and icon selection
//! - Geocoding and current-conditions clients (Open-Meteo)
//! - The search state machine and the controller that drives it
//! - The view model the presentation layer renders
//! - Configuration handling
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod codes;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod search;
pub mod state;
pub mod view;

pub use codes::{IconVariant, describe, icon_for};
pub use config::{Config, EndpointConfig};
pub use error::SearchError;
pub use model::{Location, WeatherSnapshot};
pub use provider::{Geocoder, OpenMeteoClient, WeatherSource};
pub use search::SearchController;
pub use state::{Effect, SearchEvent, SearchState};
pub use view::{ResultCard, View};
