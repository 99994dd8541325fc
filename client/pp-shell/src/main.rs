//! plantpal - PlantPal terminal client
//!
//! ```bash
//! # Against the managed backend (PP_FIREBASE_API_KEY, PP_WEATHER_API_KEY)
//! plantpal --route "#account"
//!
//! # With in-memory services
//! plantpal --offline
//! ```

use pp_app::Navigator;
use pp_config::{Config, LogLevel};
use pp_shell::{Cli, ShellError, ShellResult, logger, shell, wiring};

use std::process::ExitCode;

use clap::Parser;
use log::info;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("plantpal: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> ShellResult<()> {
    let cli = Cli::parse();

    // .env is optional
    let _ = dotenvy::dotenv();

    let config_dir = match cli.config_dir {
        Some(ref dir) => dir.clone(),
        None => Config::config_dir()?,
    };
    let mut config = Config::load_from(&config_dir)?;
    if let Some(ref level) = cli.log_level {
        config.logging.level = LogLevel::parse_lenient(level);
    }
    config.validate()?;

    let log_file = config.log_file_path(&config_dir);
    if let Some(parent) = log_file.as_deref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(parent).map_err(|e| ShellError::Io {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file, config.logging.colored)?;

    info!("Starting plantpal v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let collaborators = if cli.offline {
        wiring::offline(&config)
    } else {
        wiring::online(&config)?
    };

    let app = Navigator::spawn(collaborators, cli.route.clone());
    let printer = tokio::spawn(shell::print_views(app.view.clone()));

    let result = shell::read_commands(&app).await;
    printer.abort();
    info!("Goodbye");
    result
}
