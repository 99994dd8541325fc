mod profile;
mod profile_update;
mod temperature_unit;
mod theme;
mod weather_report;
