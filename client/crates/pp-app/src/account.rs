//! Account-screen gestures.
//!
//! Each gesture runs its service calls strictly in order (an avatar upload
//! finishes before the picture URL is written) and then re-reads the profile
//! so the screen can be redrawn from stored data.

use crate::collaborators::Collaborators;
use crate::intent::Intent;
use crate::location::{device_query, resolve_location};
use crate::screen::Control;

use pp_core::{Profile, ProfileUpdate, TemperatureUnit, Theme, WeatherReport};
use pp_services::{ServiceResult, Upload};

use log::warn;

#[derive(Debug, Clone, PartialEq)]
pub enum AccountAction {
    Theme(Theme),
    TemperatureUnit(TemperatureUnit),
    Location(String),
    DeviceLocation,
    Avatar(Upload),
    SignOut,
}

impl AccountAction {
    /// The account action behind `intent`, or the intent back if it is not one
    pub fn from_intent(intent: Intent) -> Result<Self, Intent> {
        match intent {
            Intent::SetTheme(theme) => Ok(Self::Theme(theme)),
            Intent::SetTemperatureUnit(unit) => Ok(Self::TemperatureUnit(unit)),
            Intent::SetLocation(query) => Ok(Self::Location(query)),
            Intent::UseDeviceLocation => Ok(Self::DeviceLocation),
            Intent::UploadAvatar(upload) => Ok(Self::Avatar(upload)),
            Intent::SignOut => Ok(Self::SignOut),
            other => Err(other),
        }
    }

    /// Both location sources share one control
    pub fn control(&self) -> Control {
        match self {
            Self::Theme(_) => Control::Theme,
            Self::TemperatureUnit(_) => Control::TemperatureUnit,
            Self::Location(_) | Self::DeviceLocation => Control::Location,
            Self::Avatar(_) => Control::Avatar,
            Self::SignOut => Control::SignOut,
        }
    }

    /// Value to show before the write completes.
    ///
    /// Only toggles are optimistic; locations and pictures are not known
    /// until their service calls return.
    pub fn optimistic(&self) -> Option<ProfileUpdate> {
        match self {
            Self::Theme(theme) => Some(ProfileUpdate::theme(*theme)),
            Self::TemperatureUnit(unit) => Some(ProfileUpdate::temperature_unit(*unit)),
            _ => None,
        }
    }
}

/// A profile write that was accepted
#[derive(Debug, Clone, PartialEq)]
pub struct Saved {
    pub update: ProfileUpdate,
    /// Document read back after the write, when the read succeeded
    pub refreshed: Option<Profile>,
    pub report: Option<WeatherReport>,
}

impl Saved {
    pub fn apply_to(&self, profile: &mut Profile) {
        match self.refreshed {
            Some(ref refreshed) => *profile = refreshed.clone(),
            None => profile.apply(&self.update),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Saved(Saved),
    SignedOut,
}

/// Clear the pending value `control` put on screen
pub(crate) fn clear_optimistic(pending: &mut ProfileUpdate, control: Control) {
    match control {
        Control::Theme => pending.theme = None,
        Control::TemperatureUnit => pending.temperature_unit = None,
        Control::Location => pending.location = None,
        Control::Avatar => pending.profile_pic_url = None,
        Control::SignOut => {}
    }
}

async fn save(
    collaborators: &Collaborators,
    uid: &str,
    update: ProfileUpdate,
    report: Option<WeatherReport>,
) -> ServiceResult<Outcome> {
    collaborators.profiles.update(uid, &update).await?;

    let refreshed = match collaborators.profiles.get(uid).await {
        Ok(profile) => profile,
        Err(e) => {
            warn!("Saved {:?} but could not re-read profile: {e}", update.field_paths());
            None
        }
    };

    Ok(Outcome::Saved(Saved {
        update,
        refreshed,
        report,
    }))
}

pub async fn perform(
    collaborators: &Collaborators,
    uid: &str,
    action: AccountAction,
) -> ServiceResult<Outcome> {
    match action {
        AccountAction::Theme(theme) => {
            save(collaborators, uid, ProfileUpdate::theme(theme), None).await
        }
        AccountAction::TemperatureUnit(unit) => {
            save(collaborators, uid, ProfileUpdate::temperature_unit(unit), None).await
        }
        AccountAction::Location(query) => {
            let resolved = resolve_location(collaborators.weather.as_ref(), &query).await?;
            let update = ProfileUpdate::location(resolved.canonical);
            save(collaborators, uid, update, Some(resolved.report)).await
        }
        AccountAction::DeviceLocation => {
            let query = device_query(
                collaborators.geolocator.as_ref(),
                collaborators.geolocation_timeout,
            )
            .await?;
            let resolved = resolve_location(collaborators.weather.as_ref(), &query).await?;
            let update = ProfileUpdate::location(resolved.canonical);
            save(collaborators, uid, update, Some(resolved.report)).await
        }
        AccountAction::Avatar(upload) => {
            let url = collaborators.blobs.upload(uid, upload).await?;
            save(collaborators, uid, ProfileUpdate::profile_pic_url(url), None).await
        }
        AccountAction::SignOut => {
            collaborators.session.sign_out().await?;
            Ok(Outcome::SignedOut)
        }
    }
}
