use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("{category} error: {message} {location}")]
    Generic {
        category: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config directory could not be determined")]
    NoConfigDir,
}

impl ConfigError {
    /// Create a firebase section error
    #[track_caller]
    pub fn firebase<S: Into<String>>(message: S) -> Self {
        ConfigError::Generic {
            category: "Firebase",
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a weather section error
    #[track_caller]
    pub fn weather<S: Into<String>>(message: S) -> Self {
        ConfigError::Generic {
            category: "Weather",
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a geolocation section error
    #[track_caller]
    pub fn geolocation<S: Into<String>>(message: S) -> Self {
        ConfigError::Generic {
            category: "Geolocation",
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a logging error
    #[track_caller]
    pub fn logging<S: Into<String>>(message: S) -> Self {
        ConfigError::Generic {
            category: "Logging",
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;

/// Message describing why a `*_url` setting is unusable, if it is
pub(crate) fn base_url_problem(field: &str, value: &str) -> Option<String> {
    if value.starts_with("http://") || value.starts_with("https://") {
        None
    } else {
        Some(format!(
            "{field} must start with http:// or https://, got '{value}'"
        ))
    }
}
