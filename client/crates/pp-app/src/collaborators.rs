use pp_services::{
    BlobStore, Geolocator, ProfileStore, SessionAuthority, UnsupportedGeolocator, WeatherLookup,
};

use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_GEOLOCATION_TIMEOUT: Duration = Duration::from_secs(15);

/// External services the navigator talks to
#[derive(Clone)]
pub struct Collaborators {
    pub session: Arc<dyn SessionAuthority>,
    pub profiles: Arc<dyn ProfileStore>,
    pub blobs: Arc<dyn BlobStore>,
    pub weather: Arc<dyn WeatherLookup>,
    pub geolocator: Arc<dyn Geolocator>,
    pub geolocation_timeout: Duration,
}

impl Collaborators {
    /// Collaborators for a device without geolocation
    pub fn new(
        session: Arc<dyn SessionAuthority>,
        profiles: Arc<dyn ProfileStore>,
        blobs: Arc<dyn BlobStore>,
        weather: Arc<dyn WeatherLookup>,
    ) -> Self {
        Self {
            session,
            profiles,
            blobs,
            weather,
            geolocator: Arc::new(UnsupportedGeolocator),
            geolocation_timeout: DEFAULT_GEOLOCATION_TIMEOUT,
        }
    }

    pub fn with_geolocator(mut self, geolocator: Arc<dyn Geolocator>, timeout: Duration) -> Self {
        self.geolocator = geolocator;
        self.geolocation_timeout = timeout;
        self
    }
}
