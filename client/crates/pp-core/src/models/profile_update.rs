use crate::{TemperatureUnit, Theme};

use serde::{Deserialize, Serialize};

/// Partial set of profile fields for a merge write.
///
/// Only fields that are `Some` are written; absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature_unit: Option<TemperatureUnit>,
    #[serde(rename = "profilePicURL", default, skip_serializing_if = "Option::is_none")]
    pub profile_pic_url: Option<String>,
}

impl ProfileUpdate {
    pub fn location(location: impl Into<String>) -> Self {
        Self {
            location: Some(location.into()),
            ..Self::default()
        }
    }

    pub fn theme(theme: Theme) -> Self {
        Self {
            theme: Some(theme),
            ..Self::default()
        }
    }

    pub fn temperature_unit(unit: TemperatureUnit) -> Self {
        Self {
            temperature_unit: Some(unit),
            ..Self::default()
        }
    }

    pub fn profile_pic_url(url: impl Into<String>) -> Self {
        Self {
            profile_pic_url: Some(url.into()),
            ..Self::default()
        }
    }

    /// Overlay the fields set in `other`
    pub fn merge(&mut self, other: &ProfileUpdate) {
        if other.location.is_some() {
            self.location.clone_from(&other.location);
        }
        if other.theme.is_some() {
            self.theme = other.theme;
        }
        if other.temperature_unit.is_some() {
            self.temperature_unit = other.temperature_unit;
        }
        if other.profile_pic_url.is_some() {
            self.profile_pic_url.clone_from(&other.profile_pic_url);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.field_paths().is_empty()
    }

    /// Stored field names touched by this update (the merge mask)
    pub fn field_paths(&self) -> Vec<&'static str> {
        let mut paths = Vec::with_capacity(4);
        if self.location.is_some() {
            paths.push("location");
        }
        if self.theme.is_some() {
            paths.push("theme");
        }
        if self.temperature_unit.is_some() {
            paths.push("temperatureUnit");
        }
        if self.profile_pic_url.is_some() {
            paths.push("profilePicURL");
        }
        paths
    }
}
