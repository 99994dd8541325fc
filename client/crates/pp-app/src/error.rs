use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Navigator has stopped {location}")]
    Closed { location: ErrorLocation },

    #[error("Timed out waiting for {waiting_for} {location}")]
    Timeout {
        waiting_for: String,
        location: ErrorLocation,
    },
}

impl AppError {
    #[track_caller]
    pub fn closed() -> Self {
        Self::Closed {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn timeout(waiting_for: impl Into<String>) -> Self {
        Self::Timeout {
            waiting_for: waiting_for.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
