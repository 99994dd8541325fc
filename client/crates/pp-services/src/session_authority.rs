use crate::ServiceResult;

use pp_core::{FederatedCredential, Identity};

use async_trait::async_trait;
use tokio::sync::watch;

/// Source of truth for who is signed in.
///
/// Consumers never poll: [`SessionAuthority::subscribe`] hands out a receiver
/// whose current value is the present session and which changes on every
/// sign-in and sign-out for the lifetime of the authority.
#[async_trait]
pub trait SessionAuthority: Send + Sync {
    fn subscribe(&self) -> watch::Receiver<Option<Identity>>;

    async fn sign_up(&self, email: &str, password: &str) -> ServiceResult<Identity>;

    async fn sign_in(&self, email: &str, password: &str) -> ServiceResult<Identity>;

    /// Sign in (or up) with a token from an external identity provider
    async fn sign_in_with_provider(&self, credential: &FederatedCredential)
    -> ServiceResult<Identity>;

    async fn sign_out(&self) -> ServiceResult<()>;
}

/// Bearer token of the signed-in user, used by the REST stores
#[async_trait]
pub trait AccessToken: Send + Sync {
    async fn bearer_token(&self) -> ServiceResult<String>;
}
