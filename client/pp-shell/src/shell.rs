//! Prompt loop: turns line commands into navigator events and prints views.

use crate::command::{self, HELP, ShellCommand};
use crate::error::{Result as ShellResult, ShellError};
use crate::renderer;

use pp_app::{AppHandle, Intent, Screen, View};
use pp_core::FederatedCredential;
use pp_services::Upload;

use std::path::PathBuf;

use log::debug;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;

/// Whether the prompt should keep reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub async fn execute(app: &AppHandle, command: ShellCommand) -> ShellResult<Flow> {
    let intent = match command {
        ShellCommand::Quit => return Ok(Flow::Quit),
        ShellCommand::Help => {
            println!("{HELP}");
            return Ok(Flow::Continue);
        }
        ShellCommand::Go(fragment) => {
            app.navigate(fragment).await?;
            return Ok(Flow::Continue);
        }
        ShellCommand::Switch => match app.current().screen {
            Screen::SignUp(_) => Intent::ShowSignIn,
            _ => Intent::ShowSignUp,
        },
        ShellCommand::SignIn { email, password } => Intent::SignIn { email, password },
        ShellCommand::SignUp { email, password } => Intent::SignUp { email, password },
        ShellCommand::Google(id_token) => {
            Intent::SignInWithProvider(FederatedCredential::google(id_token))
        }
        ShellCommand::Theme(theme) => Intent::SetTheme(theme),
        ShellCommand::Unit(unit) => Intent::SetTemperatureUnit(unit),
        ShellCommand::Location(text) => Intent::SetLocation(text),
        ShellCommand::Locate => Intent::UseDeviceLocation,
        ShellCommand::Avatar(path) => {
            let bytes = tokio::fs::read(&path).await.map_err(|e| ShellError::Io {
                path: path.clone(),
                source: e,
            })?;
            Intent::UploadAvatar(Upload::new(bytes, command::content_type(&path)))
        }
        ShellCommand::SignOut => Intent::SignOut,
    };

    debug!("Dispatching {}", intent.name());
    app.dispatch(intent).await?;
    Ok(Flow::Continue)
}

/// Print every published view until the navigator stops
pub async fn print_views(mut view: watch::Receiver<View>) {
    loop {
        let frame = renderer::render(&view.borrow_and_update());
        println!("{frame}");
        if view.changed().await.is_err() {
            break;
        }
    }
}

/// Read commands from stdin until `quit` or end of input
pub async fn read_commands(app: &AppHandle) -> ShellResult<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    println!("Type 'help' for commands.");

    loop {
        let line = lines.next_line().await.map_err(|e| ShellError::Io {
            path: PathBuf::from("<stdin>"),
            source: e,
        })?;
        let Some(line) = line else {
            return Ok(());
        };

        let command = match line.parse::<ShellCommand>() {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{e}");
                continue;
            }
        };

        match execute(app, command).await {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => return Ok(()),
            Err(e) => eprintln!("{e}"),
        }
    }
}
