//! Resolving a location to the canonical `city, region` string.
//!
//! Free text and device coordinates both go through the weather lookup; the
//! stored value is always what the service reports, never the raw input.

use pp_core::WeatherReport;
use pp_services::{Geolocator, ServiceError, ServiceResult, WeatherLookup, locate_within};

use std::time::Duration;

use log::{debug, info};

/// A lookup that produced a storable location
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLocation {
    pub canonical: String,
    pub report: WeatherReport,
}

pub async fn resolve_location(
    weather: &dyn WeatherLookup,
    query: &str,
) -> ServiceResult<ResolvedLocation> {
    let query = query.trim();
    if query.is_empty() {
        return Err(ServiceError::validation("Please enter a location."));
    }

    let report = weather.resolve(query).await?;
    let Some(canonical) = report.canonical_location() else {
        debug!("Lookup for '{query}' returned no city");
        return Err(ServiceError::validation(
            "Could not find a city for that location.",
        ));
    };

    info!("Resolved '{query}' to '{canonical}'");
    Ok(ResolvedLocation { canonical, report })
}

/// Device position as a `lat,lon` lookup query
pub async fn device_query(geolocator: &dyn Geolocator, timeout: Duration) -> ServiceResult<String> {
    let position = locate_within(geolocator, timeout).await?;
    Ok(position.to_query())
}
