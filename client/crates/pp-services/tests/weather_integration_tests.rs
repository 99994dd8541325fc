//! Integration tests for the weather lookup using a wiremock server

use pp_config::WeatherConfig;
use pp_services::{ServiceError, WeatherApiLookup, WeatherLookup};

use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn weather_config(server: &MockServer) -> WeatherConfig {
    WeatherConfig {
        api_key: Some(String::from("weather-key")),
        base_url: server.uri(),
        timeout_secs: 5,
    }
}

#[tokio::test]
async fn test_resolve_city_returns_report() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/current.json"))
        .and(query_param("key", "weather-key"))
        .and(query_param("q", "Paris"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "location": { "name": "Paris", "region": "Île-de-France", "country": "France" },
            "current": {
                "temp_c": 18.0,
                "temp_f": 64.4,
                "condition": { "text": "Sunny", "icon": "//cdn.weatherapi.com/113.png" }
            }
        })))
        .mount(&mock_server)
        .await;

    let lookup = WeatherApiLookup::new(&weather_config(&mock_server)).unwrap();
    let report = lookup.resolve("Paris").await.unwrap();

    assert_eq!(report.city, "Paris");
    assert_eq!(report.temp_f, 64.4);
    assert_eq!(report.icon, "//cdn.weatherapi.com/113.png");
    assert_eq!(
        report.canonical_location().as_deref(),
        Some("Paris, Île-de-France")
    );
}

#[tokio::test]
async fn test_resolve_coordinates_passes_lat_lon_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/current.json"))
        .and(query_param("q", "48.8566,2.3522"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "location": { "name": "Paris", "region": "Île-de-France", "country": "France" },
            "current": { "temp_c": 17.0, "temp_f": 62.6 }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let lookup = WeatherApiLookup::new(&weather_config(&mock_server)).unwrap();
    let report = lookup.resolve("48.8566,2.3522").await.unwrap();

    assert_eq!(report.icon, "");
}

#[tokio::test]
async fn test_resolve_without_city_has_no_canonical_location() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/current.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "location": { "name": "", "region": "", "country": "" },
            "current": { "temp_c": 1.0, "temp_f": 33.8 }
        })))
        .mount(&mock_server)
        .await;

    let lookup = WeatherApiLookup::new(&weather_config(&mock_server)).unwrap();
    let report = lookup.resolve("0,0").await.unwrap();

    assert!(report.canonical_location().is_none());
}

#[tokio::test]
async fn test_unknown_location_error_is_readable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": { "code": 1006, "message": "No matching location found." }
        })))
        .mount(&mock_server)
        .await;

    let lookup = WeatherApiLookup::new(&weather_config(&mock_server)).unwrap();
    let error = lookup.resolve("Atlantis").await.unwrap_err();

    match error {
        ServiceError::Api { ref code, .. } => assert_eq!(code, "1006"),
        ref other => panic!("expected api error, got {other:?}"),
    }
    assert_eq!(error.user_message(), "No matching location found.");
}

#[tokio::test]
async fn test_missing_key_fails_without_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut config = weather_config(&mock_server);
    config.api_key = None;
    let lookup = WeatherApiLookup::new(&config).unwrap();

    let result = lookup.resolve("Paris").await;

    assert!(matches!(result, Err(ServiceError::NotConfigured { .. })));
}

#[tokio::test]
async fn test_blank_query_is_rejected() {
    let mock_server = MockServer::start().await;
    let lookup = WeatherApiLookup::new(&weather_config(&mock_server)).unwrap();

    let result = lookup.resolve("   ").await;

    assert!(matches!(result, Err(ServiceError::Validation { .. })));
}
