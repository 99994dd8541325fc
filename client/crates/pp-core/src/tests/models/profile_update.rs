use crate::{ProfileUpdate, TemperatureUnit, Theme};

#[test]
fn test_field_paths_only_lists_set_fields() {
    let update = ProfileUpdate::theme(Theme::Light);
    assert_eq!(update.field_paths(), vec!["theme"]);

    let update = ProfileUpdate {
        location: Some("Oslo, Oslo".into()),
        temperature_unit: Some(TemperatureUnit::F),
        ..ProfileUpdate::default()
    };
    assert_eq!(update.field_paths(), vec!["location", "temperatureUnit"]);
}

#[test]
fn test_empty_update() {
    assert!(ProfileUpdate::default().is_empty());
    assert!(!ProfileUpdate::profile_pic_url("https://x").is_empty());
}

#[test]
fn test_serialized_update_omits_unset_fields() {
    let json = serde_json::to_value(ProfileUpdate::temperature_unit(TemperatureUnit::F)).unwrap();
    assert_eq!(json, serde_json::json!({ "temperatureUnit": "F" }));
}

#[test]
fn test_merge_overlays_only_set_fields() {
    let mut pending = ProfileUpdate::theme(Theme::Light);

    pending.merge(&ProfileUpdate::temperature_unit(TemperatureUnit::F));
    pending.merge(&ProfileUpdate::theme(Theme::Dark));

    assert_eq!(pending.theme, Some(Theme::Dark));
    assert_eq!(pending.temperature_unit, Some(TemperatureUnit::F));
    assert_eq!(pending.location, None);
}
