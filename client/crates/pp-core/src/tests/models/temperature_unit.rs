use crate::TemperatureUnit;

use std::str::FromStr;

#[test]
fn test_temperature_unit_from_str_accepts_either_case() {
    assert_eq!(TemperatureUnit::from_str("F").unwrap(), TemperatureUnit::F);
    assert_eq!(TemperatureUnit::from_str("c").unwrap(), TemperatureUnit::C);
    assert!(TemperatureUnit::from_str("K").is_err());
}

#[test]
fn test_temperature_unit_default_is_celsius() {
    assert_eq!(TemperatureUnit::default(), TemperatureUnit::C);
}

#[test]
fn test_temperature_unit_symbol() {
    assert_eq!(TemperatureUnit::F.symbol(), "°F");
    assert_eq!(TemperatureUnit::C.symbol(), "°C");
}

#[test]
fn test_temperature_unit_error_names_value() {
    let err = TemperatureUnit::from_str("kelvin").unwrap_err();
    assert!(err.to_string().contains("kelvin"));
}
