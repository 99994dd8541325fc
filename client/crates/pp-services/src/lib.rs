//! Clients for the services PlantPal depends on: identity, the profile
//! document store, blob storage, weather lookup and device geolocation.
//!
//! Each collaborator is an async trait so the app core can run against the
//! managed backend over REST or against the in-memory implementations.

pub mod blob_store;
pub mod error;
pub mod firebase;
pub mod geolocation;
pub(crate) mod http;
pub mod memory;
pub mod profile_store;
pub mod session_authority;
pub mod weather_api;
pub mod weather_lookup;

#[cfg(test)]
mod tests;

pub use blob_store::{BlobStore, PROFILE_PICTURE_OBJECT, Upload, profile_picture_path};
pub use error::{GeolocationFailure, Result as ServiceResult, ServiceError};
pub use firebase::{CloudStorageBlobStore, FirestoreProfileStore, IdentityToolkitAuthority};
pub use geolocation::{FixedGeolocator, Geolocator, UnsupportedGeolocator, locate_within};
pub use profile_store::{ProfileStore, ensure_profile};
pub use session_authority::{AccessToken, SessionAuthority};
pub use weather_api::WeatherApiLookup;
pub use weather_lookup::WeatherLookup;
