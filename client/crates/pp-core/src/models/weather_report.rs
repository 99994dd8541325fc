use serde::{Deserialize, Serialize};

/// Current conditions for a resolved place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub city: String,
    pub region: String,
    pub country: String,
    pub temp_c: f64,
    pub temp_f: f64,
    pub icon: String,
}

impl WeatherReport {
    /// The `city, region` form stored as a profile location.
    ///
    /// Falls back to the bare city when the service reports no region.
    /// Returns `None` when the lookup resolved no city at all.
    pub fn canonical_location(&self) -> Option<String> {
        let city = self.city.trim();
        if city.is_empty() {
            return None;
        }

        let region = self.region.trim();
        if region.is_empty() {
            Some(city.to_string())
        } else {
            Some(format!("{city}, {region}"))
        }
    }
}
