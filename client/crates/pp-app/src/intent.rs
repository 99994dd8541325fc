use pp_core::{FederatedCredential, TemperatureUnit, Theme};
use pp_services::Upload;

/// User gestures reported by a screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    ShowSignIn,
    ShowSignUp,
    SignIn { email: String, password: String },
    SignUp { email: String, password: String },
    SignInWithProvider(FederatedCredential),
    SetTheme(Theme),
    SetTemperatureUnit(TemperatureUnit),
    SetLocation(String),
    UseDeviceLocation,
    UploadAvatar(Upload),
    SignOut,
}

/// Input to the navigator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The URL fragment changed
    HashChanged(String),
    /// Re-render the current route
    Renavigate,
    /// A gesture on the view rendered at `epoch`
    Intent { epoch: u64, intent: Intent },
}

impl Intent {
    /// Short name for logs; never includes credentials or file contents
    pub fn name(&self) -> &'static str {
        match self {
            Self::ShowSignIn => "show-sign-in",
            Self::ShowSignUp => "show-sign-up",
            Self::SignIn { .. } => "sign-in",
            Self::SignUp { .. } => "sign-up",
            Self::SignInWithProvider(_) => "sign-in-with-provider",
            Self::SetTheme(_) => "set-theme",
            Self::SetTemperatureUnit(_) => "set-temperature-unit",
            Self::SetLocation(_) => "set-location",
            Self::UseDeviceLocation => "use-device-location",
            Self::UploadAvatar(_) => "upload-avatar",
            Self::SignOut => "sign-out",
        }
    }
}
