use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Why the device could not report a position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeolocationFailure {
    Denied,
    Unsupported,
    Timeout,
    Unavailable,
}

impl GeolocationFailure {
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Denied => "permission denied",
            Self::Unsupported => "geolocation not supported on this device",
            Self::Timeout => "timed out waiting for a position",
            Self::Unavailable => "position unavailable",
        }
    }
}

/// Errors raised by external collaborators
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error: {message} (code: {code}) {location}")]
    Api {
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Malformed response: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },

    #[error("Not configured: {message} {location}")]
    NotConfigured {
        message: String,
        location: ErrorLocation,
    },

    #[error("No user is signed in {location}")]
    NotSignedIn { location: ErrorLocation },

    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Geolocation error: {} {location}", .failure.describe())]
    Geolocation {
        failure: GeolocationFailure,
        location: ErrorLocation,
    },
}

impl ServiceError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ServiceError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ServiceError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn api(code: impl Into<String>, message: impl Into<String>) -> Self {
        ServiceError::Api {
            code: code.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn decode(message: impl Into<String>) -> Self {
        ServiceError::Decode {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_configured(message: impl Into<String>) -> Self {
        ServiceError::NotConfigured {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_signed_in() -> Self {
        ServiceError::NotSignedIn {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        ServiceError::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn geolocation(failure: GeolocationFailure) -> Self {
        ServiceError::Geolocation {
            failure,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Short text shown next to the control that triggered the call.
    ///
    /// Never includes source locations.
    pub fn user_message(&self) -> String {
        match self {
            Self::Http { source, .. } if source.is_timeout() => {
                String::from("The request timed out. Please try again.")
            }
            Self::Http { .. } => String::from("Network error. Check your connection."),
            Self::Api { message, .. } => message.clone(),
            Self::Json { .. } | Self::Decode { .. } => {
                String::from("Unexpected response from the server.")
            }
            Self::NotConfigured { message, .. } => message.clone(),
            Self::NotSignedIn { .. } => String::from("You are not signed in."),
            Self::Validation { message, .. } => message.clone(),
            Self::Geolocation { failure, .. } => {
                format!("Geolocation error: {}", failure.describe())
            }
        }
    }
}

impl From<reqwest::Error> for ServiceError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ServiceError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ServiceError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ServiceError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
