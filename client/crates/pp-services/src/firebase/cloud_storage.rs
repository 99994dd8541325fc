//! Profile pictures in object storage.

use crate::http::{build_client, endpoint, read_json, with_query};
use crate::{AccessToken, BlobStore, ServiceError, ServiceResult, Upload, profile_picture_path};

use pp_config::FirebaseConfig;

use std::sync::Arc;

use async_trait::async_trait;
use log::info;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ObjectMetadata {
    name: String,
    bucket: String,
    #[serde(default)]
    download_tokens: Option<String>,
}

pub struct CloudStorageBlobStore {
    client: reqwest::Client,
    storage_url: String,
    bucket: String,
    token: Arc<dyn AccessToken>,
}

impl CloudStorageBlobStore {
    pub fn new(config: &FirebaseConfig, token: Arc<dyn AccessToken>) -> ServiceResult<Self> {
        Ok(Self {
            client: build_client(None)?,
            storage_url: config.storage_url.trim_end_matches('/').to_string(),
            bucket: config.bucket(),
            token,
        })
    }

    /// Public URL for a stored object.
    ///
    /// The object name is a single path segment, so its `/` separators are encoded.
    fn download_url(&self, metadata: &ObjectMetadata) -> ServiceResult<String> {
        let url = endpoint(
            &self.storage_url,
            &["v0", "b", &metadata.bucket, "o", &metadata.name],
        )?;

        let url = match metadata.download_tokens.as_deref() {
            Some(tokens) => {
                let token = tokens.split(',').next().unwrap_or(tokens);
                with_query(url, &[("alt", "media"), ("token", token)])
            }
            None => with_query(url, &[("alt", "media")]),
        };

        Ok(url.to_string())
    }
}

#[async_trait]
impl BlobStore for CloudStorageBlobStore {
    async fn upload(&self, uid: &str, upload: Upload) -> ServiceResult<String> {
        if upload.bytes.is_empty() {
            return Err(ServiceError::validation("The selected file is empty."));
        }

        let object = profile_picture_path(uid);
        let url = with_query(
            endpoint(&self.storage_url, &["v0", "b", &self.bucket, "o"])?,
            &[("name", object.as_str())],
        );
        let token = self.token.bearer_token().await?;

        let response = self
            .client
            .post(url)
            .bearer_auth(token)
            .header(CONTENT_TYPE, upload.content_type)
            .body(upload.bytes)
            .send()
            .await?;

        let metadata: ObjectMetadata = serde_json::from_value(read_json(response).await?)?;
        let download_url = self.download_url(&metadata)?;
        info!("Uploaded {} ({})", metadata.name, metadata.bucket);
        Ok(download_url)
    }
}
