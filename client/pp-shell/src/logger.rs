use crate::error::{Result as ShellResult, ShellError};

use std::path::PathBuf;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;

/// Initialize logger with fern
///
/// # Arguments
/// * `log_level` - Log level filter
/// * `log_file` - Optional path to log file. None = stderr, Some = file output
/// * `colored` - Enable colored output (ignored when logging to file)
///
/// Console logs go to stderr so they do not interleave with rendered screens.
pub fn initialize(
    log_level: pp_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ShellResult<()> {
    let level_filter = log_level.0;
    let colors = ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);
    let colored = colored && log_file.is_none();

    let output = Dispatch::new().format(move |out, message, record| {
        let level = if colored {
            colors.color(record.level()).to_string()
        } else {
            record.level().to_string()
        };
        out.finish(format_args!(
            "[{date} - {level}] {message} [{target}]",
            date = humantime::format_rfc3339_seconds(SystemTime::now()),
            target = record.target(),
        ))
    });

    let output = match log_file {
        Some(ref log_path) => {
            let file = fern::log_file(log_path).map_err(|e| ShellError::Io {
                path: log_path.clone(),
                source: e,
            })?;
            output.chain(file)
        }
        None => output.chain(std::io::stderr()),
    };

    Dispatch::new()
        .level(level_filter)
        // HTTP internals are noisy at debug
        .level_for("hyper_util", log::LevelFilter::Warn)
        .level_for("reqwest", log::LevelFilter::Warn)
        .chain(output)
        .apply()
        .map_err(|e| ShellError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    match log_file {
        Some(ref path) => info!(
            "Logger initialized: level={:?}, file={}",
            level_filter,
            path.display()
        ),
        None => info!("Logger initialized: level={:?}, stderr", level_filter),
    }

    Ok(())
}
