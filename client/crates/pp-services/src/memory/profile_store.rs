use crate::memory::lock;
use crate::{ProfileStore, ServiceError, ServiceResult};

use pp_core::{Profile, ProfileUpdate};

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

#[derive(Debug, Default)]
struct Failures {
    get: Option<String>,
    create: Option<String>,
    update: Option<String>,
}

/// Profile documents held in a map, with merge-write semantics.
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    documents: Mutex<HashMap<String, Profile>>,
    failures: Mutex<Failures>,
    latency: Mutex<Duration>,
    get_calls: AtomicUsize,
    create_calls: AtomicUsize,
    update_calls: AtomicUsize,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, profile: Profile) {
        lock(&self.documents).insert(profile.uid.clone(), profile);
    }

    /// Stored document, read without counting as a `get`
    pub fn document(&self, uid: &str) -> Option<Profile> {
        lock(&self.documents).get(uid).cloned()
    }

    pub fn document_count(&self) -> usize {
        lock(&self.documents).len()
    }

    pub fn fail_gets(&self, message: impl Into<String>) {
        lock(&self.failures).get = Some(message.into());
    }

    pub fn fail_creates(&self, message: impl Into<String>) {
        lock(&self.failures).create = Some(message.into());
    }

    pub fn fail_updates(&self, message: impl Into<String>) {
        lock(&self.failures).update = Some(message.into());
    }

    pub fn clear_failures(&self) {
        *lock(&self.failures) = Failures::default();
    }

    /// Delay applied to every call before it touches the documents
    pub fn set_latency(&self, latency: Duration) {
        *lock(&self.latency) = latency;
    }

    async fn simulate_latency(&self) {
        let latency = *lock(&self.latency);
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }
    }

    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }
}

fn unavailable(message: &str) -> ServiceError {
    ServiceError::api("UNAVAILABLE", message)
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn get(&self, uid: &str) -> ServiceResult<Option<Profile>> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        self.simulate_latency().await;
        if let Some(ref message) = lock(&self.failures).get {
            return Err(unavailable(message));
        }
        Ok(self.document(uid))
    }

    async fn create(&self, uid: &str, profile: &Profile) -> ServiceResult<Profile> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.simulate_latency().await;
        if let Some(ref message) = lock(&self.failures).create {
            return Err(unavailable(message));
        }

        // Merge: an unset picture keeps the stored one.
        let mut documents = lock(&self.documents);
        let mut stored = profile.clone();
        stored.uid = uid.to_string();
        if stored.profile_pic_url.is_none() {
            stored.profile_pic_url = documents
                .get(uid)
                .and_then(|existing| existing.profile_pic_url.clone());
        }
        documents.insert(uid.to_string(), stored.clone());
        Ok(stored)
    }

    async fn update(&self, uid: &str, update: &ProfileUpdate) -> ServiceResult<()> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        self.simulate_latency().await;

        if let Some(ref message) = lock(&self.failures).update {
            return Err(unavailable(message));
        }

        let mut documents = lock(&self.documents);
        match documents.get_mut(uid) {
            Some(profile) => {
                profile.apply(update);
                Ok(())
            }
            None => Err(ServiceError::api("NOT_FOUND", format!("No document for {uid}"))),
        }
    }
}
