use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, ok, some};
use serial_test::serial;

#[test]
#[serial]
fn given_both_coordinates_when_load_then_position_available() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _lat = EnvGuard::set("PP_GEOLOCATION_LATITUDE", "48.8566");
    let _lon = EnvGuard::set("PP_GEOLOCATION_LONGITUDE", "2.3522");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.geolocation.position(), some(eq((48.8566, 2.3522))));
    assert_that!(config.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_only_latitude_when_validate_then_error_mentions_together() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _lat = EnvGuard::set("PP_GEOLOCATION_LATITUDE", "10.0");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("together"));
}

#[test]
#[serial]
fn given_latitude_out_of_range_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _lat = EnvGuard::set("PP_GEOLOCATION_LATITUDE", "91");
    let _lon = EnvGuard::set("PP_GEOLOCATION_LONGITUDE", "0");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}
