use crate::memory::lock;
use crate::{BlobStore, ServiceError, ServiceResult, Upload, profile_picture_path};

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct InMemoryBlobStore {
    objects: Mutex<HashMap<String, Upload>>,
    failure: Mutex<Option<String>>,
}

impl InMemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn object(&self, path: &str) -> Option<Upload> {
        lock(&self.objects).get(path).cloned()
    }

    pub fn fail_uploads(&self, message: impl Into<String>) {
        *lock(&self.failure) = Some(message.into());
    }
}

#[async_trait]
impl BlobStore for InMemoryBlobStore {
    async fn upload(&self, uid: &str, upload: Upload) -> ServiceResult<String> {
        if let Some(ref message) = *lock(&self.failure) {
            return Err(ServiceError::api("UPLOAD_FAILED", message.clone()));
        }
        if upload.bytes.is_empty() {
            return Err(ServiceError::validation("The selected file is empty."));
        }

        let path = profile_picture_path(uid);
        lock(&self.objects).insert(path.clone(), upload);
        Ok(format!(
            "memory://plantpal/{path}?token={}",
            Uuid::new_v4().simple()
        ))
    }
}
