use crate::ServiceResult;

use pp_core::{Identity, Profile, ProfileUpdate};

use async_trait::async_trait;
use chrono::Utc;
use log::info;

/// Per-user settings documents keyed by uid.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// `None` when no document exists for `uid`
    async fn get(&self, uid: &str) -> ServiceResult<Option<Profile>>;

    /// Merge-write a full profile and return the stored document
    async fn create(&self, uid: &str, profile: &Profile) -> ServiceResult<Profile>;

    /// Merge-write only the fields set in `update`
    async fn update(&self, uid: &str, update: &ProfileUpdate) -> ServiceResult<()>;
}

/// Fetch the profile for `identity`, creating it with defaults if absent.
///
/// An existing document is returned as stored and never rewritten.
pub async fn ensure_profile(
    store: &dyn ProfileStore,
    identity: &Identity,
) -> ServiceResult<Profile> {
    if let Some(profile) = store.get(&identity.uid).await? {
        info!("Profile exists for {}", identity.uid);
        return Ok(profile);
    }

    let defaults = Profile::with_defaults(identity, Utc::now());
    let created = store.create(&identity.uid, &defaults).await?;
    info!("New profile created for {}", identity.email);
    Ok(created)
}
