pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::coordinates::Coordinates;
pub use models::federated_credential::FederatedCredential;
pub use models::identity::Identity;
pub use models::profile::{DEFAULT_LOCATION, Profile};
pub use models::profile_update::ProfileUpdate;
pub use models::temperature_unit::TemperatureUnit;
pub use models::theme::Theme;
pub use models::weather_report::WeatherReport;
