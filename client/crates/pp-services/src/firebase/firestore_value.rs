//! Conversion between profiles and the document store's typed field values.
//!
//! Documents look like `{"fields": {"theme": {"stringValue": "dark"}, ...}}`.

use crate::{ServiceError, ServiceResult};

use pp_core::{DEFAULT_LOCATION, Profile, ProfileUpdate, TemperatureUnit, Theme};

use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use log::warn;
use serde_json::{Map, Value, json};

fn string_value(value: &str) -> Value {
    json!({ "stringValue": value })
}

fn timestamp_value(value: &DateTime<Utc>) -> Value {
    json!({ "timestampValue": value.to_rfc3339_opts(SecondsFormat::Micros, true) })
}

/// Field map for a full profile write
pub(crate) fn encode_profile(profile: &Profile) -> Map<String, Value> {
    let mut fields = Map::new();
    fields.insert("uid".into(), string_value(&profile.uid));
    fields.insert("email".into(), string_value(&profile.email));
    fields.insert("location".into(), string_value(&profile.location));
    fields.insert("theme".into(), string_value(profile.theme.as_str()));
    fields.insert(
        "temperatureUnit".into(),
        string_value(profile.temperature_unit.as_str()),
    );
    if let Some(ref url) = profile.profile_pic_url {
        fields.insert("profilePicURL".into(), string_value(url));
    }
    fields.insert("createdAt".into(), timestamp_value(&profile.created_at));
    fields
}

/// Field names written by [`encode_profile`], used as the merge mask
pub(crate) fn profile_field_paths(profile: &Profile) -> Vec<&'static str> {
    let mut paths = vec!["uid", "email", "location", "theme", "temperatureUnit"];
    if profile.profile_pic_url.is_some() {
        paths.push("profilePicURL");
    }
    paths.push("createdAt");
    paths
}

/// Field map holding only the fields set in `update`
pub(crate) fn encode_update(update: &ProfileUpdate) -> Map<String, Value> {
    let mut fields = Map::new();
    if let Some(ref location) = update.location {
        fields.insert("location".into(), string_value(location));
    }
    if let Some(theme) = update.theme {
        fields.insert("theme".into(), string_value(theme.as_str()));
    }
    if let Some(unit) = update.temperature_unit {
        fields.insert("temperatureUnit".into(), string_value(unit.as_str()));
    }
    if let Some(ref url) = update.profile_pic_url {
        fields.insert("profilePicURL".into(), string_value(url));
    }
    fields
}

fn read_string<'a>(fields: &'a Value, name: &str) -> Option<&'a str> {
    fields
        .get(name)
        .and_then(|f| f.get("stringValue"))
        .and_then(|v| v.as_str())
}

fn parse_timestamp(raw: &str) -> ServiceResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| ServiceError::decode(format!("invalid timestamp '{raw}': {e}")))
}

/// Build a profile from a stored document.
///
/// Settings missing from older documents fall back to the defaults; an
/// unreadable theme or unit is logged and defaulted rather than rejected.
pub(crate) fn decode_profile(uid: &str, document: &Value) -> ServiceResult<Profile> {
    let empty = Value::Object(Map::new());
    let fields = document.get("fields").unwrap_or(&empty);

    let theme = match read_string(fields, "theme") {
        Some(raw) => Theme::from_str(raw).unwrap_or_else(|e| {
            warn!("Stored theme unreadable for {uid}: {e}");
            Theme::default()
        }),
        None => Theme::default(),
    };

    let temperature_unit = match read_string(fields, "temperatureUnit") {
        Some(raw) => TemperatureUnit::from_str(raw).unwrap_or_else(|e| {
            warn!("Stored temperature unit unreadable for {uid}: {e}");
            TemperatureUnit::default()
        }),
        None => TemperatureUnit::default(),
    };

    let created_at = match fields
        .get("createdAt")
        .and_then(|f| f.get("timestampValue"))
        .and_then(|v| v.as_str())
        .or_else(|| document.get("createTime").and_then(|v| v.as_str()))
    {
        Some(raw) => parse_timestamp(raw)?,
        None => return Err(ServiceError::decode("profile document has no creation time")),
    };

    Ok(Profile {
        uid: read_string(fields, "uid").unwrap_or(uid).to_string(),
        email: read_string(fields, "email").unwrap_or_default().to_string(),
        location: read_string(fields, "location")
            .unwrap_or(DEFAULT_LOCATION)
            .to_string(),
        theme,
        temperature_unit,
        profile_pic_url: read_string(fields, "profilePicURL").map(String::from),
        created_at,
    })
}
