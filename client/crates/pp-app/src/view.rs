use crate::route::Route;
use crate::screen::{AuthForm, Screen};

use pp_core::Theme;

/// Persistent page chrome around the screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chrome {
    pub nav_visible: bool,
    pub active_nav: Option<Route>,
    pub theme: Theme,
}

impl Chrome {
    /// Chrome of the signed-out and loading screens
    pub fn hidden() -> Self {
        Self {
            nav_visible: false,
            active_nav: None,
            theme: Theme::default(),
        }
    }
}

/// One rendered frame.
///
/// `epoch` identifies the render; intents must carry the epoch of the view
/// they were issued from.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub epoch: u64,
    pub screen: Screen,
    pub chrome: Chrome,
}

impl Default for View {
    fn default() -> Self {
        Self {
            epoch: 0,
            screen: Screen::SignIn(AuthForm::default()),
            chrome: Chrome::hidden(),
        }
    }
}
