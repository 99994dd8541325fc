use crate::error::base_url_problem;
use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_FIREBASE_AUTH_URL, DEFAULT_FIREBASE_FIRESTORE_URL,
    DEFAULT_FIREBASE_PROJECT_ID, DEFAULT_FIREBASE_STORAGE_URL,
};

use serde::Deserialize;

/// Managed backend settings (identity, document store, blob storage).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FirebaseConfig {
    /// Web API key sent with identity requests
    pub api_key: Option<String>,
    pub project_id: String,
    /// Defaults to `<project_id>.appspot.com` when unset
    pub storage_bucket: Option<String>,
    pub auth_url: String,
    pub firestore_url: String,
    pub storage_url: String,
}

impl Default for FirebaseConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            project_id: String::from(DEFAULT_FIREBASE_PROJECT_ID),
            storage_bucket: None,
            auth_url: String::from(DEFAULT_FIREBASE_AUTH_URL),
            firestore_url: String::from(DEFAULT_FIREBASE_FIRESTORE_URL),
            storage_url: String::from(DEFAULT_FIREBASE_STORAGE_URL),
        }
    }
}

impl FirebaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.project_id.trim().is_empty() {
            return Err(ConfigError::firebase("firebase.project_id must not be empty"));
        }

        for (field, value) in [
            ("firebase.auth_url", &self.auth_url),
            ("firebase.firestore_url", &self.firestore_url),
            ("firebase.storage_url", &self.storage_url),
        ] {
            if let Some(problem) = base_url_problem(field, value) {
                return Err(ConfigError::firebase(problem));
            }
        }

        Ok(())
    }

    /// Bucket used for profile pictures
    pub fn bucket(&self) -> String {
        self.storage_bucket
            .clone()
            .unwrap_or_else(|| format!("{}.appspot.com", self.project_id))
    }
}
