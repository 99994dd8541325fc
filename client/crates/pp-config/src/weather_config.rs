use crate::error::base_url_problem;
use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_WEATHER_BASE_URL, DEFAULT_WEATHER_TIMEOUT_SECS,
    MAX_TIMEOUT_SECS, MIN_TIMEOUT_SECS,
};

use serde::Deserialize;

/// Weather lookup settings.
///
/// A missing `api_key` is allowed; each lookup then fails on its own.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: String::from(DEFAULT_WEATHER_BASE_URL),
            timeout_secs: DEFAULT_WEATHER_TIMEOUT_SECS,
        }
    }
}

impl WeatherConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(problem) = base_url_problem("weather.base_url", &self.base_url) {
            return Err(ConfigError::weather(problem));
        }

        if self.timeout_secs < MIN_TIMEOUT_SECS || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::weather(format!(
                "weather.timeout_secs must be {}-{}, got {}",
                MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }
}
