use crate::{Coordinates, WeatherReport};

fn report(city: &str, region: &str) -> WeatherReport {
    WeatherReport {
        city: city.into(),
        region: region.into(),
        country: "France".into(),
        temp_c: 18.0,
        temp_f: 64.4,
        icon: "//cdn.weatherapi.com/weather/64x64/day/116.png".into(),
    }
}

#[test]
fn given_city_and_region_when_canonicalized_then_joined_with_comma() {
    assert_eq!(
        report("Paris", "Île-de-France").canonical_location().as_deref(),
        Some("Paris, Île-de-France")
    );
}

#[test]
fn given_missing_region_when_canonicalized_then_city_only() {
    assert_eq!(
        report("Singapore", " ").canonical_location().as_deref(),
        Some("Singapore")
    );
}

#[test]
fn given_missing_city_when_canonicalized_then_none() {
    assert_eq!(report("", "Île-de-France").canonical_location(), None);
}

#[test]
fn test_coordinates_query_string() {
    assert_eq!(Coordinates::new(48.85, 2.35).to_query(), "48.85,2.35");
}
