//! Session authority backed by the identity toolkit REST API.

use crate::firebase::auth_messages::friendly_auth_message;
use crate::http::{build_client, endpoint, form_body, read_json, with_query};
use crate::{AccessToken, ServiceError, ServiceResult, SessionAuthority};

use pp_config::FirebaseConfig;
use pp_core::{FederatedCredential, Identity};

use async_trait::async_trait;
use log::{info, warn};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use tokio::sync::{RwLock, watch};

const IDP_REQUEST_URI: &str = "http://localhost";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthResponse {
    local_id: String,
    #[serde(default)]
    email: Option<String>,
    id_token: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct IdpRequest<'a> {
    post_body: String,
    request_uri: &'a str,
    return_idp_credential: bool,
    return_secure_token: bool,
}

/// Email/password and federated sign-in against the identity toolkit.
///
/// Holds the current session in a watch channel; every successful sign-in
/// and every sign-out is published to subscribers.
pub struct IdentityToolkitAuthority {
    client: reqwest::Client,
    auth_url: String,
    api_key: Option<String>,
    session: watch::Sender<Option<Identity>>,
    id_token: RwLock<Option<String>>,
}

impl IdentityToolkitAuthority {
    pub fn new(config: &FirebaseConfig) -> ServiceResult<Self> {
        let (session, _) = watch::channel(None);
        Ok(Self {
            client: build_client(None)?,
            auth_url: config.auth_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            session,
            id_token: RwLock::new(None),
        })
    }

    fn accounts_url(&self, action: &str) -> ServiceResult<Url> {
        let key = self
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| ServiceError::not_configured("Firebase API key not configured"))?;

        let url = endpoint(&self.auth_url, &["v1", &format!("accounts:{action}")])?;
        Ok(with_query(url, &[("key", key)]))
    }

    async fn post_accounts<B: Serialize + Sync>(
        &self,
        action: &str,
        body: &B,
    ) -> ServiceResult<Identity> {
        let url = self.accounts_url(action)?;
        let response = self.client.post(url).json(body).send().await?;

        let value = match read_json(response).await {
            Ok(value) => value,
            Err(ServiceError::Api { code, message, .. }) => {
                warn!("accounts:{action} rejected: {message}");
                return Err(ServiceError::api(code, friendly_auth_message(&message)));
            }
            Err(e) => return Err(e),
        };

        let auth: AuthResponse = serde_json::from_value(value)?;
        let identity = Identity::new(auth.local_id, auth.email.unwrap_or_default());

        *self.id_token.write().await = Some(auth.id_token);
        self.session.send_replace(Some(identity.clone()));

        info!("accounts:{action} succeeded for {}", identity.uid);
        Ok(identity)
    }
}

#[async_trait]
impl SessionAuthority for IdentityToolkitAuthority {
    fn subscribe(&self) -> watch::Receiver<Option<Identity>> {
        self.session.subscribe()
    }

    async fn sign_up(&self, email: &str, password: &str) -> ServiceResult<Identity> {
        let body = PasswordRequest {
            email,
            password,
            return_secure_token: true,
        };
        self.post_accounts("signUp", &body).await
    }

    async fn sign_in(&self, email: &str, password: &str) -> ServiceResult<Identity> {
        let body = PasswordRequest {
            email,
            password,
            return_secure_token: true,
        };
        self.post_accounts("signInWithPassword", &body).await
    }

    async fn sign_in_with_provider(
        &self,
        credential: &FederatedCredential,
    ) -> ServiceResult<Identity> {
        let post_body = form_body(&[
            ("id_token", credential.id_token.as_str()),
            ("providerId", credential.provider_id.as_str()),
        ])?;

        let body = IdpRequest {
            post_body,
            request_uri: IDP_REQUEST_URI,
            return_idp_credential: true,
            return_secure_token: true,
        };
        self.post_accounts("signInWithIdp", &body).await
    }

    async fn sign_out(&self) -> ServiceResult<()> {
        *self.id_token.write().await = None;
        self.session.send_replace(None);
        info!("Signed out");
        Ok(())
    }
}

#[async_trait]
impl AccessToken for IdentityToolkitAuthority {
    async fn bearer_token(&self) -> ServiceResult<String> {
        self.id_token
            .read()
            .await
            .clone()
            .ok_or_else(ServiceError::not_signed_in)
    }
}
