//! Current-weather lookup over the weather REST API.

use crate::http::{build_client, endpoint, read_json, with_query};
use crate::{ServiceError, ServiceResult, WeatherLookup};

use pp_config::WeatherConfig;
use pp_core::WeatherReport;

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, error};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    location: LocationBody,
    current: CurrentBody,
}

#[derive(Debug, Deserialize)]
struct LocationBody {
    #[serde(default)]
    name: String,
    #[serde(default)]
    region: String,
    #[serde(default)]
    country: String,
}

#[derive(Debug, Deserialize)]
struct CurrentBody {
    temp_c: f64,
    temp_f: f64,
    #[serde(default)]
    condition: Option<ConditionBody>,
}

#[derive(Debug, Deserialize)]
struct ConditionBody {
    #[serde(default)]
    icon: String,
}

impl From<CurrentResponse> for WeatherReport {
    fn from(body: CurrentResponse) -> Self {
        WeatherReport {
            city: body.location.name,
            region: body.location.region,
            country: body.location.country,
            temp_c: body.current.temp_c,
            temp_f: body.current.temp_f,
            icon: body.current.condition.map(|c| c.icon).unwrap_or_default(),
        }
    }
}

pub struct WeatherApiLookup {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl WeatherApiLookup {
    pub fn new(config: &WeatherConfig) -> ServiceResult<Self> {
        Ok(Self {
            client: build_client(Some(Duration::from_secs(config.timeout_secs)))?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone().filter(|k| !k.is_empty()),
        })
    }
}

#[async_trait]
impl WeatherLookup for WeatherApiLookup {
    async fn resolve(&self, query: &str) -> ServiceResult<WeatherReport> {
        let Some(ref key) = self.api_key else {
            error!("Weather API key not defined. Cannot fetch weather.");
            return Err(ServiceError::not_configured(
                "Weather API key not configured.",
            ));
        };

        let query = query.trim();
        if query.is_empty() {
            return Err(ServiceError::validation("Please enter a location."));
        }

        let url = with_query(
            endpoint(&self.base_url, &["v1", "current.json"])?,
            &[("key", key.as_str()), ("q", query)],
        );

        let response = self.client.get(url).send().await?;
        let body: CurrentResponse = serde_json::from_value(read_json(response).await?)?;
        let report = WeatherReport::from(body);
        debug!(
            "Weather for '{query}': {}, {} {}°C",
            report.city, report.region, report.temp_c
        );
        Ok(report)
    }
}
