use crate::{DEFAULT_LOCATION, Identity, Profile, ProfileUpdate, TemperatureUnit, Theme};

use chrono::{TimeZone, Utc};
use googletest::prelude::*;

fn identity() -> Identity {
    Identity::new("uid-1", "fern@example.com")
}

#[test]
fn given_new_identity_when_defaults_applied_then_matches_default_settings() {
    let created_at = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();

    let profile = Profile::with_defaults(&identity(), created_at);

    assert_that!(profile.uid.as_str(), eq("uid-1"));
    assert_that!(profile.email.as_str(), eq("fern@example.com"));
    assert_that!(profile.location.as_str(), eq(DEFAULT_LOCATION));
    assert_that!(profile.theme, eq(Theme::Dark));
    assert_that!(profile.temperature_unit, eq(TemperatureUnit::C));
    assert_that!(profile.profile_pic_url, none());
    assert_that!(profile.created_at, eq(created_at));
}

#[test]
fn given_unit_update_when_applied_then_sibling_fields_unchanged() {
    let mut profile = Profile::with_defaults(&identity(), Utc::now());
    profile.profile_pic_url = Some("https://cdn.example/p.jpg".into());
    let before = profile.clone();

    profile.apply(&ProfileUpdate::temperature_unit(TemperatureUnit::F));

    assert_that!(profile.temperature_unit, eq(TemperatureUnit::F));
    assert_that!(profile.location, eq(&before.location));
    assert_that!(profile.theme, eq(before.theme));
    assert_that!(profile.profile_pic_url, eq(&before.profile_pic_url));
    assert_that!(profile.created_at, eq(before.created_at));
}

#[test]
fn given_empty_update_when_applied_then_profile_unchanged() {
    let mut profile = Profile::with_defaults(&identity(), Utc::now());
    let before = profile.clone();

    profile.apply(&ProfileUpdate::default());

    assert_eq!(profile, before);
}

#[test]
fn given_email_when_deriving_display_then_uses_local_part_and_initial() {
    let profile = Profile::with_defaults(&identity(), Utc::now());

    assert_eq!(profile.username(), "fern");
    assert_eq!(profile.initials(), "F");
}

#[test]
fn given_empty_email_when_deriving_display_then_falls_back() {
    let profile = Profile::with_defaults(&Identity::new("uid-2", ""), Utc::now());

    assert_eq!(profile.username(), "PlantPal User");
    assert_eq!(profile.initials(), "P");
}

#[test]
fn given_stored_document_json_when_deserialized_then_reads_camel_case_names() {
    let json = r#"{
        "uid": "uid-1",
        "email": "fern@example.com",
        "location": "Paris, Île-de-France",
        "theme": "light",
        "temperatureUnit": "F",
        "profilePicURL": "https://cdn.example/p.jpg",
        "createdAt": "2025-03-01T12:00:00Z"
    }"#;

    let profile: Profile = serde_json::from_str(json).unwrap();

    assert_that!(profile.theme, eq(Theme::Light));
    assert_that!(profile.temperature_unit, eq(TemperatureUnit::F));
    assert_that!(profile.profile_pic_url.as_deref(), some(eq("https://cdn.example/p.jpg")));
}
