use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("Config error: {0}")]
    Config(#[from] pp_config::ConfigError),

    #[error("Service error: {0}")]
    Service(#[from] pp_services::ServiceError),

    #[error("App error: {0}")]
    App(#[from] pp_app::AppError),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("{message}")]
    Usage { message: String },
}

impl ShellError {
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ShellError>;
