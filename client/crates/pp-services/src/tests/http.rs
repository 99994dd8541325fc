use crate::http::{endpoint, form_body, with_query};

use googletest::prelude::*;

// =========================================================================
// Request Plumbing Tests
// =========================================================================

#[test]
fn given_segments_with_slashes_when_building_endpoint_then_they_are_encoded() {
    // When
    let url = endpoint(
        "https://storage.example.com/",
        &["v0", "b", "bucket", "o", "users/u-1/profile.jpg"],
    )
    .unwrap();

    // Then
    assert_that!(
        url.as_str(),
        eq("https://storage.example.com/v0/b/bucket/o/users%2Fu-1%2Fprofile.jpg")
    );
}

#[test]
fn given_base_with_path_when_building_endpoint_then_segments_are_appended() {
    // When
    let url = endpoint("http://127.0.0.1:9000/api", &["v1", "current.json"]).unwrap();

    // Then
    assert_that!(url.as_str(), eq("http://127.0.0.1:9000/api/v1/current.json"));
}

#[test]
fn given_invalid_base_when_building_endpoint_then_validation_error() {
    assert!(endpoint("not a url", &["v1"]).is_err());
}

#[test]
fn given_query_pairs_when_appended_then_values_are_form_encoded() {
    // Given
    let base = endpoint("https://api.example.com", &["v1", "current.json"]).unwrap();

    // When
    let url = with_query(base, &[("key", "k"), ("q", "San José")]);

    // Then
    assert_that!(url.query(), some(eq("key=k&q=San+Jos%C3%A9")));
}

#[test]
fn given_reserved_characters_when_building_form_body_then_each_value_stays_whole() {
    // When
    let body = form_body(&[("id_token", "a&b=c+d"), ("providerId", "google.com")]).unwrap();

    // Then
    assert_that!(body.as_str(), eq("id_token=a%26b%3Dc%2Bd&providerId=google.com"));
}
