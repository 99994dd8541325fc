use crate::{
    CONFIG_DIR_ENV, CONFIG_DIR_NAME, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    FirebaseConfig, GeolocationConfig, LoggingConfig, WeatherConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub firebase: FirebaseConfig,
    pub weather: WeatherConfig,
    pub geolocation: GeolocationConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. PP_CONFIG_DIR env var, else ./.plantpal/
    /// 2. Auto-create the config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply PP_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;
        Self::load_from(&config_dir)
    }

    /// Same as [`Config::load`] with an explicit config directory.
    pub fn load_from(config_dir: &Path) -> ConfigErrorResult<Self> {
        if !config_dir.exists() {
            std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.to_path_buf(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: PP_CONFIG_DIR > ./.plantpal/ > <platform config dir>/plantpal
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        if let Ok(cwd) = std::env::current_dir() {
            return Ok(cwd.join(CONFIG_DIR_NAME));
        }

        dirs::config_dir()
            .map(|dir| dir.join("plantpal"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.firebase.validate()?;
        self.weather.validate()?;
        self.geolocation.validate()?;

        if let Some(ref file) = self.logging.file
            && (file.contains("..") || Path::new(file).is_absolute())
        {
            return Err(ConfigError::logging(
                "logging.file must be a relative name and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Absolute log file path, if file logging is configured
    pub fn log_file_path(&self, config_dir: &Path) -> Option<PathBuf> {
        self.logging
            .file
            .as_ref()
            .map(|file| config_dir.join(&self.logging.dir).join(file))
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  firebase: project={} bucket={} api_key={}",
            self.firebase.project_id,
            self.firebase.bucket(),
            Self::secret_state(&self.firebase.api_key)
        );
        info!(
            "  weather: {} (timeout {}s, api_key={})",
            self.weather.base_url,
            self.weather.timeout_secs,
            Self::secret_state(&self.weather.api_key)
        );
        info!(
            "  geolocation: {} (timeout {}s)",
            if self.geolocation.position().is_some() {
                "fixed position"
            } else {
                "unsupported"
            },
            self.geolocation.timeout_secs
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn secret_state(value: &Option<String>) -> &'static str {
        match value {
            Some(v) if !v.is_empty() => "set",
            _ => "unset",
        }
    }

    fn apply_env_overrides(&mut self) {
        // Firebase
        Self::apply_env_option_string("PP_FIREBASE_API_KEY", &mut self.firebase.api_key);
        Self::apply_env_string("PP_FIREBASE_PROJECT_ID", &mut self.firebase.project_id);
        Self::apply_env_option_string(
            "PP_FIREBASE_STORAGE_BUCKET",
            &mut self.firebase.storage_bucket,
        );
        Self::apply_env_string("PP_FIREBASE_AUTH_URL", &mut self.firebase.auth_url);
        Self::apply_env_string("PP_FIREBASE_FIRESTORE_URL", &mut self.firebase.firestore_url);
        Self::apply_env_string("PP_FIREBASE_STORAGE_URL", &mut self.firebase.storage_url);

        // Weather
        Self::apply_env_option_string("PP_WEATHER_API_KEY", &mut self.weather.api_key);
        Self::apply_env_string("PP_WEATHER_BASE_URL", &mut self.weather.base_url);
        Self::apply_env_parse("PP_WEATHER_TIMEOUT_SECS", &mut self.weather.timeout_secs);

        // Geolocation
        Self::apply_env_option_parse("PP_GEOLOCATION_LATITUDE", &mut self.geolocation.latitude);
        Self::apply_env_option_parse("PP_GEOLOCATION_LONGITUDE", &mut self.geolocation.longitude);
        Self::apply_env_parse(
            "PP_GEOLOCATION_TIMEOUT_SECS",
            &mut self.geolocation.timeout_secs,
        );

        // Logging
        Self::apply_env_parse("PP_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("PP_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("PP_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for optional parseable values
    fn apply_env_option_parse<T: std::str::FromStr>(var_name: &str, target: &mut Option<T>) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = Some(parsed);
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
