mod location;

use crate::{AppHandle, Collaborators, Navigator, View};

use pp_core::{Coordinates, WeatherReport};
use pp_services::FixedGeolocator;
use pp_services::memory::{
    InMemoryBlobStore, InMemoryProfileStore, InMemorySessionAuthority, StaticWeatherLookup,
};

use std::sync::Arc;
use std::time::Duration;

pub(crate) const WAIT: Duration = Duration::from_secs(5);
pub(crate) const EMAIL: &str = "ivy@example.com";
pub(crate) const PASSWORD: &str = "secret1";

pub(crate) fn report(city: &str, region: &str) -> WeatherReport {
    WeatherReport {
        city: city.to_string(),
        region: region.to_string(),
        country: String::from("France"),
        temp_c: 18.0,
        temp_f: 64.4,
        icon: String::from("//cdn.example/113.png"),
    }
}

/// In-memory services with a few known places
pub(crate) struct Fixture {
    pub session: Arc<InMemorySessionAuthority>,
    pub profiles: Arc<InMemoryProfileStore>,
    pub blobs: Arc<InMemoryBlobStore>,
    pub weather: Arc<StaticWeatherLookup>,
}

impl Fixture {
    pub fn new() -> Self {
        let weather = StaticWeatherLookup::new()
            .with_report("Paris", report("Paris", "Île-de-France"))
            .with_report("48.8566,2.3522", report("Paris", "Île-de-France"))
            .with_report("Middle of the Ocean", report("", ""));

        Self {
            session: Arc::new(InMemorySessionAuthority::new()),
            profiles: Arc::new(InMemoryProfileStore::new()),
            blobs: Arc::new(InMemoryBlobStore::new()),
            weather: Arc::new(weather),
        }
    }

    pub fn collaborators(&self) -> Collaborators {
        Collaborators::new(
            self.session.clone(),
            self.profiles.clone(),
            self.blobs.clone(),
            self.weather.clone(),
        )
        .with_geolocator(
            Arc::new(FixedGeolocator::new(Coordinates::new(48.8566, 2.3522))),
            Duration::from_secs(1),
        )
    }

    pub fn start(&self, fragment: &str) -> AppHandle {
        Navigator::spawn(self.collaborators(), fragment)
    }

    /// Sign in a fresh account and wait for the authenticated shell
    pub async fn signed_in(&self, fragment: &str) -> (AppHandle, View) {
        self.session.add_account(EMAIL, PASSWORD);
        let app = self.start(fragment);
        app.dispatch(crate::Intent::SignIn {
            email: EMAIL.into(),
            password: PASSWORD.into(),
        })
        .await
        .unwrap();
        let view = app
            .wait_for("authenticated shell", WAIT, |v| v.chrome.nav_visible)
            .await
            .unwrap();
        (app, view)
    }
}
