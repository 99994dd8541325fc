use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid theme: {value} {location}")]
    InvalidTheme {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid temperature unit: {value} {location}")]
    InvalidTemperatureUnit {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
