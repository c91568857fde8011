//! End-to-end search flow against a mocked Open-Meteo.

use weather_core::{Config, SearchController, View};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> Config {
    let mut cfg = Config::default();
    cfg.endpoints.geocoding = format!("{}/v1/search", server.uri());
    cfg.endpoints.forecast = format!("{}/v1/forecast", server.uri());
    cfg
}

async fn mount_paris(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("name", "Paris"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [
                {"name": "Paris", "country": "France", "latitude": 48.8566, "longitude": 2.3522}
            ]
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn paris_end_to_end() {
    let server = MockServer::start().await;
    mount_paris(&server).await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("latitude", "48.8566"))
        .and(query_param("longitude", "2.3522"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "current": {
                "time": "2026-10-16T12:00",
                "temperature_2m": 18.5,
                "relative_humidity_2m": 60,
                "weather_code": 3,
                "wind_speed_10m": 12.4
            }
        })))
        .mount(&server)
        .await;

    let controller = SearchController::from_config(&config_for(&server)).unwrap();
    let state = controller.search("Paris").await;

    let View::Result(card) = state.view() else {
        panic!("expected result, got {:?}", state.view());
    };
    assert_eq!(card.title, "Paris, France");
    assert_eq!(card.temperature, "18.5°C");
    assert_eq!(card.description, "Overcast");
    assert_eq!(card.humidity, "60%");
    assert_eq!(card.wind, "12.4 km/h");
    assert_eq!(card.observed.as_deref(), Some("Updated 2026-10-16 12:00 GMT"));
}

#[tokio::test]
async fn not_found_never_requests_forecast() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("name", "Zzzzqx"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "generationtime_ms": 0.2
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let controller = SearchController::from_config(&config_for(&server)).unwrap();
    let state = controller.search("Zzzzqx").await;

    assert_eq!(state.view(), View::Error("City not found. Please try another city."));
}

#[tokio::test]
async fn forecast_outage_clears_everything() {
    let server = MockServer::start().await;
    mount_paris(&server).await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let controller = SearchController::from_config(&config_for(&server)).unwrap();
    let state = controller.search("Paris").await;

    assert_eq!(state.view(), View::Error("Failed to fetch weather data."));
    assert_eq!(state.location, None);
    assert_eq!(state.query, "Paris");
}

#[tokio::test]
async fn blank_input_issues_no_requests() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let controller = SearchController::from_config(&config_for(&server)).unwrap();
    let state = controller.search("   ").await;

    assert_eq!(state.view(), View::Error("Please enter a city name."));
}
