pub mod coordinates;
pub mod federated_credential;
pub mod identity;
pub mod profile;
pub mod profile_update;
pub mod temperature_unit;
pub mod theme;
pub mod weather_report;
