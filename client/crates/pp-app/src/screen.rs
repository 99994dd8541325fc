//! Screen view models.
//!
//! A [`Screen`] is the full description of what is attached to the page.
//! Rendering is declarative: the same state always yields the same screen,
//! and each render replaces the previous screen entirely.

use crate::route::{Route, RouteTarget};

use pp_core::{Identity, Profile, TemperatureUnit, Theme, WeatherReport};

use std::collections::BTreeMap;

/// Progress of an auth form submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthStatus {
    #[default]
    Idle,
    Processing,
    Failed(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub status: AuthStatus,
}

impl AuthForm {
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: AuthStatus::Failed(message.into()),
        }
    }
}

/// Interactive controls on the account screen that report inline status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Control {
    Theme,
    TemperatureUnit,
    Location,
    Avatar,
    SignOut,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ControlStatus {
    #[default]
    Idle,
    Pending,
    Saved,
    Failed(String),
}

/// Everything the account screen shows.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountView {
    pub initials: String,
    pub username: String,
    pub email: String,
    pub location: String,
    pub theme: Theme,
    pub temperature_unit: TemperatureUnit,
    pub profile_pic_url: Option<String>,
    /// Conditions at the location most recently saved on this screen
    pub weather: Option<WeatherReport>,
    pub statuses: BTreeMap<Control, ControlStatus>,
}

impl AccountView {
    pub fn new(profile: &Profile, identity: &Identity) -> Self {
        let email = if profile.email.is_empty() {
            identity.email.clone()
        } else {
            profile.email.clone()
        };

        Self {
            initials: profile.initials(),
            username: profile.username().to_string(),
            email,
            location: profile.location.clone(),
            theme: profile.theme,
            temperature_unit: profile.temperature_unit,
            profile_pic_url: profile.profile_pic_url.clone(),
            weather: None,
            statuses: BTreeMap::new(),
        }
    }

    pub fn status(&self, control: Control) -> ControlStatus {
        self.statuses.get(&control).cloned().unwrap_or_default()
    }

    /// Current temperature in the chosen unit, e.g. `18°C`
    pub fn temperature(&self) -> Option<String> {
        self.weather.as_ref().map(|report| {
            let value = match self.temperature_unit {
                TemperatureUnit::C => report.temp_c,
                TemperatureUnit::F => report.temp_f,
            };
            format!("{value:.0}{}", self.temperature_unit.symbol())
        })
    }
}

/// The screen attached to the page
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    SignIn(AuthForm),
    SignUp(AuthForm),
    Loading,
    Home,
    MyPlants,
    Search,
    Account(AccountView),
    NotFound { fragment: String },
}

impl Screen {
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::SignIn(_) | Self::SignUp(_))
    }
}

/// Screen for an authenticated route
pub fn render(target: &RouteTarget, profile: &Profile, identity: &Identity) -> Screen {
    match target {
        RouteTarget::Screen(Route::Home) => Screen::Home,
        RouteTarget::Screen(Route::MyPlants) => Screen::MyPlants,
        RouteTarget::Screen(Route::Search) => Screen::Search,
        RouteTarget::Screen(Route::Account) => {
            Screen::Account(AccountView::new(profile, identity))
        }
        RouteTarget::NotFound(fragment) => Screen::NotFound {
            fragment: fragment.clone(),
        },
    }
}
