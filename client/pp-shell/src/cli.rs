use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "plantpal")]
#[command(about = "PlantPal plant-care assistant (terminal client)")]
#[command(version)]
pub struct Cli {
    /// Directory holding config.toml (defaults to PP_CONFIG_DIR or ./.plantpal)
    #[arg(long)]
    pub config_dir: Option<PathBuf>,

    /// Use in-memory services instead of the managed backend
    #[arg(long)]
    pub offline: bool,

    /// Override logging.level (error, warn, info, debug, trace)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Initial URL fragment, e.g. "#account"
    #[arg(long, default_value = "")]
    pub route: String,
}
