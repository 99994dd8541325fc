use crate::location::{device_query, resolve_location};

use pp_core::Coordinates;
use pp_services::{FixedGeolocator, ServiceError, UnsupportedGeolocator};

use std::time::Duration;

use googletest::prelude::*;

use super::Fixture;

// =========================================================================
// Location Resolution Tests
// =========================================================================

#[tokio::test]
async fn given_city_text_when_resolved_then_canonical_is_city_and_region() {
    // Given
    let fixture = Fixture::new();

    // When
    let resolved = resolve_location(fixture.weather.as_ref(), "Paris")
        .await
        .unwrap();

    // Then
    assert_that!(resolved.canonical.as_str(), eq("Paris, Île-de-France"));
}

#[tokio::test]
async fn given_lookup_without_city_when_resolved_then_rejected() {
    // Given
    let fixture = Fixture::new();

    // When
    let result = resolve_location(fixture.weather.as_ref(), "Middle of the Ocean").await;

    // Then
    assert!(matches!(result, Err(ServiceError::Validation { .. })));
}

#[tokio::test]
async fn given_blank_text_when_resolved_then_lookup_is_not_called() {
    // Given
    let fixture = Fixture::new();

    // When
    let result = resolve_location(fixture.weather.as_ref(), "  ").await;

    // Then
    assert!(result.is_err());
    assert_that!(fixture.weather.calls(), eq(0));
}

#[tokio::test]
async fn given_device_position_when_queried_then_lat_lon_string() {
    // Given
    let geolocator = FixedGeolocator::new(Coordinates::new(51.5, -0.12));

    // When
    let query = device_query(&geolocator, Duration::from_secs(1))
        .await
        .unwrap();

    // Then
    assert_that!(query.as_str(), eq("51.5,-0.12"));
}

#[tokio::test]
async fn given_unsupported_device_when_queried_then_error() {
    // When
    let result = device_query(&UnsupportedGeolocator, Duration::from_secs(1)).await;

    // Then
    assert!(matches!(result, Err(ServiceError::Geolocation { .. })));
}
