use crate::ServiceResult;

use async_trait::async_trait;

pub const PROFILE_PICTURE_OBJECT: &str = "profile.jpg";

/// File picked by the user for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

impl Upload {
    pub fn new(bytes: Vec<u8>, content_type: impl Into<String>) -> Self {
        Self {
            bytes,
            content_type: content_type.into(),
        }
    }
}

/// Binary storage returning publicly fetchable URLs.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Store the user's profile picture and return its download URL
    async fn upload(&self, uid: &str, upload: Upload) -> ServiceResult<String>;
}

/// Object path of a user's profile picture
pub fn profile_picture_path(uid: &str) -> String {
    format!("users/{uid}/{PROFILE_PICTURE_OBJECT}")
}
