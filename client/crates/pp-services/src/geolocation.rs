use crate::{GeolocationFailure, ServiceError, ServiceResult};

use pp_core::Coordinates;

use std::time::Duration;

use async_trait::async_trait;

/// Device position provider
#[async_trait]
pub trait Geolocator: Send + Sync {
    async fn current_position(&self) -> ServiceResult<Coordinates>;
}

/// Ask for the position, giving up after `timeout`.
///
/// This is the only bounded wait in the app; every other request runs to completion.
pub async fn locate_within(
    geolocator: &dyn Geolocator,
    timeout: Duration,
) -> ServiceResult<Coordinates> {
    match tokio::time::timeout(timeout, geolocator.current_position()).await {
        Ok(result) => result,
        Err(_) => Err(ServiceError::geolocation(GeolocationFailure::Timeout)),
    }
}

/// Reports a configured position
#[derive(Debug, Clone, Copy)]
pub struct FixedGeolocator {
    position: Coordinates,
}

impl FixedGeolocator {
    pub fn new(position: Coordinates) -> Self {
        Self { position }
    }
}

#[async_trait]
impl Geolocator for FixedGeolocator {
    async fn current_position(&self) -> ServiceResult<Coordinates> {
        Ok(self.position)
    }
}

/// Device without a position source
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedGeolocator;

#[async_trait]
impl Geolocator for UnsupportedGeolocator {
    async fn current_position(&self) -> ServiceResult<Coordinates> {
        Err(ServiceError::geolocation(GeolocationFailure::Unsupported))
    }
}
