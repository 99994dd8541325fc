use serde::{Deserialize, Serialize};

pub const GOOGLE_PROVIDER_ID: &str = "google.com";

/// Token obtained from a third-party identity provider's own sign-in flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FederatedCredential {
    pub provider_id: String,
    pub id_token: String,
}

impl FederatedCredential {
    pub fn google(id_token: impl Into<String>) -> Self {
        Self {
            provider_id: String::from(GOOGLE_PROVIDER_ID),
            id_token: id_token.into(),
        }
    }
}
