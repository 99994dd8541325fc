use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_GEOLOCATION_TIMEOUT_SECS, MAX_TIMEOUT_SECS,
    MIN_TIMEOUT_SECS,
};

use serde::Deserialize;

/// Device position source.
///
/// With no coordinates configured the device reports geolocation as unsupported.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeolocationConfig {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Upper bound on how long a position request may take
    pub timeout_secs: u64,
}

impl Default for GeolocationConfig {
    fn default() -> Self {
        Self {
            latitude: None,
            longitude: None,
            timeout_secs: DEFAULT_GEOLOCATION_TIMEOUT_SECS,
        }
    }
}

impl GeolocationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => {
                if !(-90.0..=90.0).contains(&lat) {
                    return Err(ConfigError::geolocation(format!(
                        "geolocation.latitude must be -90..90, got {lat}"
                    )));
                }
                if !(-180.0..=180.0).contains(&lon) {
                    return Err(ConfigError::geolocation(format!(
                        "geolocation.longitude must be -180..180, got {lon}"
                    )));
                }
            }
            (None, None) => {}
            _ => {
                return Err(ConfigError::geolocation(
                    "geolocation.latitude and geolocation.longitude must be set together",
                ));
            }
        }

        if self.timeout_secs < MIN_TIMEOUT_SECS || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::geolocation(format!(
                "geolocation.timeout_secs must be {}-{}, got {}",
                MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }

    /// Configured position, if both coordinates are present
    pub fn position(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }
}
