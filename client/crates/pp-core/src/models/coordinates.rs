use serde::{Deserialize, Serialize};

/// Device position in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Query string accepted by the weather lookup (`"lat,lon"`)
    pub fn to_query(&self) -> String {
        format!("{},{}", self.lat, self.lon)
    }
}
