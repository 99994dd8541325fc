//! Line commands typed at the prompt.

use crate::error::{Result as ShellResult, ShellError};

use pp_core::{TemperatureUnit, Theme};

use std::path::PathBuf;
use std::str::FromStr;

pub const HELP: &str = "\
Commands:
  go <fragment>                 navigate (home, myplants, search, account, or any #fragment)
  signin <email> <password>     sign in with email and password
  signup <email> <password>     create an account
  google <id_token>             sign in with a Google ID token
  switch                        toggle between the sign-in and sign-up forms
  theme light|dark              set the theme
  unit F|C                      set the temperature unit
  location <text>               look up and save a location
  locate                        save the device's current location
  avatar <path>                 upload a profile picture
  signout                       sign out
  help                          show this help
  quit                          exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Go(String),
    SignIn { email: String, password: String },
    SignUp { email: String, password: String },
    Google(String),
    Switch,
    Theme(Theme),
    Unit(TemperatureUnit),
    Location(String),
    Locate,
    Avatar(PathBuf),
    SignOut,
    Help,
    Quit,
}

/// Fragment for a `go` argument; a bare name gets a leading `#`
pub fn fragment(target: &str) -> String {
    let target = target.trim();
    if target.is_empty() || target.starts_with('#') {
        target.to_string()
    } else {
        format!("#{target}")
    }
}

fn credentials(rest: &str, usage: &str) -> ShellResult<(String, String)> {
    let mut parts = rest.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(email), Some(password), None) => Ok((email.to_string(), password.to_string())),
        _ => Err(ShellError::usage(format!("usage: {usage} <email> <password>"))),
    }
}

fn required<'a>(rest: &'a str, usage: &str) -> ShellResult<&'a str> {
    if rest.is_empty() {
        Err(ShellError::usage(format!("usage: {usage}")))
    } else {
        Ok(rest)
    }
}

impl FromStr for ShellCommand {
    type Err = ShellError;

    fn from_str(line: &str) -> ShellResult<Self> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_lowercase().as_str() {
            "go" => Ok(Self::Go(fragment(rest))),
            "signin" => {
                let (email, password) = credentials(rest, "signin")?;
                Ok(Self::SignIn { email, password })
            }
            "signup" => {
                let (email, password) = credentials(rest, "signup")?;
                Ok(Self::SignUp { email, password })
            }
            "google" => Ok(Self::Google(required(rest, "google <id_token>")?.to_string())),
            "switch" => Ok(Self::Switch),
            "theme" => Theme::from_str(rest)
                .map(Self::Theme)
                .map_err(|_| ShellError::usage("usage: theme light|dark")),
            "unit" => TemperatureUnit::from_str(rest)
                .map(Self::Unit)
                .map_err(|_| ShellError::usage("usage: unit F|C")),
            "location" => Ok(Self::Location(
                required(rest, "location <text>")?.to_string(),
            )),
            "locate" => Ok(Self::Locate),
            "avatar" => Ok(Self::Avatar(PathBuf::from(required(rest, "avatar <path>")?))),
            "signout" => Ok(Self::SignOut),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            "" => Err(ShellError::usage("type 'help' for commands")),
            other => Err(ShellError::usage(format!(
                "unknown command '{other}'; type 'help' for commands"
            ))),
        }
    }
}

/// Content type for an image upload, from the file extension
pub fn content_type(path: &std::path::Path) -> &'static str {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}
