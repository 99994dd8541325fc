//! Session and navigation core of the PlantPal client.
//!
//! [`Navigator`] decides which screen is shown from the signed-in identity
//! and the current URL fragment, bootstraps the user's profile, and runs the
//! account-settings flows. Front ends drive it through an [`AppHandle`] and
//! draw each published [`View`].

pub mod account;
pub mod collaborators;
pub mod error;
pub mod intent;
pub mod location;
pub mod navigator;
pub mod route;
pub mod screen;
pub mod view;

#[cfg(test)]
mod tests;

pub use collaborators::Collaborators;
pub use error::{AppError, Result};
pub use intent::{Intent, UiEvent};
pub use navigator::{AppHandle, Navigator};
pub use route::{Route, RouteTarget, active_nav, resolve};
pub use screen::{AccountView, AuthForm, AuthStatus, Control, ControlStatus, Screen, render};
pub use view::{Chrome, View};
