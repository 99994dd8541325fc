use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests
// =========================================================================

#[test]
#[serial]
fn given_non_http_weather_url_when_validate_then_error_names_field() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _url = EnvGuard::set("PP_WEATHER_BASE_URL", "ftp://weather.example");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("weather.base_url"));
}

#[test]
#[serial]
fn given_empty_project_id_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _project = EnvGuard::set("PP_FIREBASE_PROJECT_ID", "  ");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_weather_timeout_zero_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _timeout = EnvGuard::set("PP_WEATHER_TIMEOUT_SECS", "0");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_weather_timeout_at_max_when_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _timeout = EnvGuard::set("PP_WEATHER_TIMEOUT_SECS", "120");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_missing_weather_key_when_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();

    // Then
    assert!(config.weather.api_key.is_none());
    assert_that!(config.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_log_file_with_traversal_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _file = EnvGuard::set("PP_LOG_FILE", "../outside.log");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring(".."));
}
