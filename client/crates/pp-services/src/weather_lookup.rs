use crate::ServiceResult;

use pp_core::WeatherReport;

use async_trait::async_trait;

/// Geocoding-capable current-weather lookup.
///
/// Accepts free text (`"Paris"`) or a `"lat,lon"` pair.
#[async_trait]
pub trait WeatherLookup: Send + Sync {
    async fn resolve(&self, query: &str) -> ServiceResult<WeatherReport>;
}
