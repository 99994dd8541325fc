//! Per-user settings document.

use crate::{Identity, ProfileUpdate, TemperatureUnit, Theme};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_LOCATION: &str = "New York, NY";

/// Settings stored for one user, keyed by the identity's uid.
///
/// `uid`, `email` and `created_at` are written once at creation; the
/// remaining fields change through [`ProfileUpdate`] merges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub uid: String,
    pub email: String,
    pub location: String,
    pub theme: Theme,
    pub temperature_unit: TemperatureUnit,
    #[serde(rename = "profilePicURL", default, skip_serializing_if = "Option::is_none")]
    pub profile_pic_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Profile {
    /// Profile created for an identity seen for the first time
    pub fn with_defaults(identity: &Identity, created_at: DateTime<Utc>) -> Self {
        Self {
            uid: identity.uid.clone(),
            email: identity.email.clone(),
            location: String::from(DEFAULT_LOCATION),
            theme: Theme::default(),
            temperature_unit: TemperatureUnit::default(),
            profile_pic_url: None,
            created_at,
        }
    }

    /// Merge the set fields of `update`, leaving every other field untouched
    pub fn apply(&mut self, update: &ProfileUpdate) {
        if let Some(ref location) = update.location {
            self.location = location.clone();
        }
        if let Some(theme) = update.theme {
            self.theme = theme;
        }
        if let Some(unit) = update.temperature_unit {
            self.temperature_unit = unit;
        }
        if let Some(ref url) = update.profile_pic_url {
            self.profile_pic_url = Some(url.clone());
        }
    }

    /// Local part of the email, used as the display name
    pub fn username(&self) -> &str {
        match self.email.split('@').next() {
            Some(name) if !name.is_empty() => name,
            _ => "PlantPal User",
        }
    }

    /// Single uppercase letter for the avatar placeholder
    pub fn initials(&self) -> String {
        self.email
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| String::from("P"))
    }
}
