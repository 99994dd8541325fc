mod config;
mod error;
mod firebase_config;
mod geolocation_config;
mod log_level;
mod logging_config;
mod weather_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use firebase_config::FirebaseConfig;
pub use geolocation_config::GeolocationConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use weather_config::WeatherConfig;

const CONFIG_DIR_ENV: &str = "PP_CONFIG_DIR";
const CONFIG_DIR_NAME: &str = ".plantpal";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_FIREBASE_PROJECT_ID: &str = "plantpal";
const DEFAULT_FIREBASE_AUTH_URL: &str = "https://identitytoolkit.googleapis.com";
const DEFAULT_FIREBASE_FIRESTORE_URL: &str = "https://firestore.googleapis.com";
const DEFAULT_FIREBASE_STORAGE_URL: &str = "https://firebasestorage.googleapis.com";

const DEFAULT_WEATHER_BASE_URL: &str = "https://api.weatherapi.com";
const DEFAULT_WEATHER_TIMEOUT_SECS: u64 = 10;
const MIN_TIMEOUT_SECS: u64 = 1;
const MAX_TIMEOUT_SECS: u64 = 120;

const DEFAULT_GEOLOCATION_TIMEOUT_SECS: u64 = 15;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
