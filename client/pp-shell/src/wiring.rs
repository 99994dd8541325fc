//! Builds the navigator's collaborators from configuration.

use crate::error::Result as ShellResult;

use pp_app::Collaborators;
use pp_config::Config;
use pp_core::{Coordinates, Identity, WeatherReport};
use pp_services::memory::{
    InMemoryBlobStore, InMemoryProfileStore, InMemorySessionAuthority, StaticWeatherLookup,
};
use pp_services::{
    CloudStorageBlobStore, FirestoreProfileStore, FixedGeolocator, Geolocator,
    IdentityToolkitAuthority, UnsupportedGeolocator, WeatherApiLookup,
};

use std::sync::Arc;
use std::time::Duration;

use log::info;

/// Google ID token accepted by the offline session authority
pub const OFFLINE_GOOGLE_TOKEN: &str = "offline-google-token";

fn geolocator(config: &Config) -> (Arc<dyn Geolocator>, Duration) {
    let timeout = Duration::from_secs(config.geolocation.timeout_secs);
    match config.geolocation.position() {
        Some((lat, lon)) => (
            Arc::new(FixedGeolocator::new(Coordinates::new(lat, lon))),
            timeout,
        ),
        None => (Arc::new(UnsupportedGeolocator), timeout),
    }
}

/// Collaborators talking to the managed backend and weather API
pub fn online(config: &Config) -> ShellResult<Collaborators> {
    let authority = Arc::new(IdentityToolkitAuthority::new(&config.firebase)?);
    let profiles = FirestoreProfileStore::new(&config.firebase, authority.clone())?;
    let blobs = CloudStorageBlobStore::new(&config.firebase, authority.clone())?;
    let weather = WeatherApiLookup::new(&config.weather)?;
    let (geolocator, timeout) = geolocator(config);

    info!("Using managed backend project '{}'", config.firebase.project_id);
    Ok(Collaborators::new(
        authority,
        Arc::new(profiles),
        Arc::new(blobs),
        Arc::new(weather),
    )
    .with_geolocator(geolocator, timeout))
}

fn place(city: &str, region: &str, country: &str, temp_c: f64) -> WeatherReport {
    WeatherReport {
        city: city.to_string(),
        region: region.to_string(),
        country: country.to_string(),
        temp_c,
        temp_f: temp_c * 9.0 / 5.0 + 32.0,
        icon: String::new(),
    }
}

/// In-memory collaborators with a few known places
pub fn offline(config: &Config) -> Collaborators {
    let session = Arc::new(InMemorySessionAuthority::new());
    session.register_provider_token(
        OFFLINE_GOOGLE_TOKEN,
        Identity::new("offline-google-user", "gardener@gmail.com"),
    );

    let mut weather = StaticWeatherLookup::new()
        .with_report("New York", place("New York", "New York", "United States of America", 21.0))
        .with_report("Paris", place("Paris", "Île-de-France", "France", 18.0))
        .with_report("London", place("London", "City of London, Greater London", "United Kingdom", 14.0));
    if let Some((lat, lon)) = config.geolocation.position() {
        weather = weather.with_report(
            &Coordinates::new(lat, lon).to_query(),
            place("Your Town", "Your Region", "Earth", 20.0),
        );
    }

    let (geolocator, timeout) = geolocator(config);
    info!("Using in-memory services (offline)");
    Collaborators::new(
        session,
        Arc::new(InMemoryProfileStore::new()),
        Arc::new(InMemoryBlobStore::new()),
        Arc::new(weather),
    )
    .with_geolocator(geolocator, timeout)
}
