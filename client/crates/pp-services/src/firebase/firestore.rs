//! Profile documents in the `users` collection of the document store.

use crate::firebase::firestore_value::{
    decode_profile, encode_profile, encode_update, profile_field_paths,
};
use crate::http::{build_client, endpoint, read_json, with_query};
use crate::{AccessToken, ProfileStore, ServiceError, ServiceResult};

use pp_config::FirebaseConfig;
use pp_core::{Profile, ProfileUpdate};

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use reqwest::{StatusCode, Url};
use serde_json::{Map, Value, json};

const USERS_COLLECTION: &str = "users";

pub struct FirestoreProfileStore {
    client: reqwest::Client,
    firestore_url: String,
    project_id: String,
    token: Arc<dyn AccessToken>,
}

impl FirestoreProfileStore {
    pub fn new(config: &FirebaseConfig, token: Arc<dyn AccessToken>) -> ServiceResult<Self> {
        Ok(Self {
            client: build_client(None)?,
            firestore_url: config.firestore_url.trim_end_matches('/').to_string(),
            project_id: config.project_id.clone(),
            token,
        })
    }

    fn document_url(&self, uid: &str) -> ServiceResult<Url> {
        endpoint(
            &self.firestore_url,
            &[
                "v1",
                "projects",
                &self.project_id,
                "databases",
                "(default)",
                "documents",
                USERS_COLLECTION,
                uid,
            ],
        )
    }

    /// PATCH with an update mask, so only the listed fields are written
    async fn merge_write(
        &self,
        uid: &str,
        fields: Map<String, Value>,
        field_paths: &[&str],
    ) -> ServiceResult<Value> {
        let mask: Vec<(&str, &str)> = field_paths
            .iter()
            .map(|path| ("updateMask.fieldPaths", *path))
            .collect();
        let url = with_query(self.document_url(uid)?, &mask);
        let token = self.token.bearer_token().await?;

        let response = self
            .client
            .patch(url)
            .bearer_auth(token)
            .json(&json!({ "fields": fields }))
            .send()
            .await?;

        read_json(response).await
    }
}

#[async_trait]
impl ProfileStore for FirestoreProfileStore {
    async fn get(&self, uid: &str) -> ServiceResult<Option<Profile>> {
        let url = self.document_url(uid)?;
        let token = self.token.bearer_token().await?;

        let response = self.client.get(url).bearer_auth(token).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            debug!("No profile document for {uid}");
            return Ok(None);
        }

        let document = read_json(response).await?;
        decode_profile(uid, &document).map(Some)
    }

    async fn create(&self, uid: &str, profile: &Profile) -> ServiceResult<Profile> {
        let document = self
            .merge_write(uid, encode_profile(profile), &profile_field_paths(profile))
            .await?;

        if document.get("fields").is_some() {
            decode_profile(uid, &document)
        } else {
            Ok(profile.clone())
        }
    }

    async fn update(&self, uid: &str, update: &ProfileUpdate) -> ServiceResult<()> {
        if update.is_empty() {
            return Ok(());
        }
        if update.location.as_deref().is_some_and(|l| l.trim().is_empty()) {
            return Err(ServiceError::validation("Location must not be empty."));
        }

        self.merge_write(uid, encode_update(update), &update.field_paths())
            .await?;
        Ok(())
    }
}
