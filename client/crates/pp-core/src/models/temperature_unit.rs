use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Unit used when showing temperatures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TemperatureUnit {
    /// Fahrenheit
    F,
    /// Celsius
    #[default]
    C,
}

impl TemperatureUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::F => "F",
            Self::C => "C",
        }
    }

    /// Label shown next to a temperature value
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::F => "°F",
            Self::C => "°C",
        }
    }
}

impl FromStr for TemperatureUnit {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "F" | "f" => Ok(Self::F),
            "C" | "c" => Ok(Self::C),
            _ => Err(CoreError::InvalidTemperatureUnit {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
