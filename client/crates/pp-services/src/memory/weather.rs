use crate::memory::lock;
use crate::{ServiceError, ServiceResult, WeatherLookup};

use pp_core::WeatherReport;

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

/// Lookup answering from a fixed table of queries
#[derive(Debug, Default)]
pub struct StaticWeatherLookup {
    reports: Mutex<HashMap<String, WeatherReport>>,
    calls: AtomicUsize,
}

fn normalize(query: &str) -> String {
    query.trim().to_lowercase()
}

impl StaticWeatherLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_report(self, query: &str, report: WeatherReport) -> Self {
        self.add_report(query, report);
        self
    }

    pub fn add_report(&self, query: &str, report: WeatherReport) {
        lock(&self.reports).insert(normalize(query), report);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WeatherLookup for StaticWeatherLookup {
    async fn resolve(&self, query: &str) -> ServiceResult<WeatherReport> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        lock(&self.reports)
            .get(&normalize(query))
            .cloned()
            .ok_or_else(|| ServiceError::api("1006", "No matching location found."))
    }
}
