//! Terminal front end for the PlantPal client.

pub mod cli;
pub mod command;
pub mod error;
pub mod logger;
pub mod renderer;
pub mod shell;
pub mod wiring;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use command::ShellCommand;
pub use error::{Result as ShellResult, ShellError};
