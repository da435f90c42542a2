//! Blob-storage seam for profile badge images.
//!
//! One object per principal at `profileImages/{principal}.jpg`; uploading
//! again overwrites. The store hands back a durable fetch URL which the
//! profile document carries in `image_url`.

use async_trait::async_trait;
use dashmap::DashMap;
use thiserror::Error;

use matchday_storage::PrincipalId;

/// Error type for media operations
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("backend error: {0}")]
    Backend(String),
}

/// Storage key for a principal's badge image.
pub fn badge_key(id: &PrincipalId) -> String {
    format!("profileImages/{}.jpg", id.0)
}

/// Blob-storage trait for badge images.
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Upload (overwrite) the badge image and return its durable fetch URL.
    async fn upload_badge(
        &self,
        id: &PrincipalId,
        bytes: Vec<u8>,
    ) -> Result<String, MediaError>;

    /// Fetch URL of a previously uploaded badge, if one exists.
    async fn badge_url(&self, id: &PrincipalId) -> Result<Option<String>, MediaError>;
}

/// In-memory blob store for tests and single-process runs.
#[derive(Default)]
pub struct MemoryMediaStore {
    objects: DashMap<String, Vec<u8>>,
}

impl MemoryMediaStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn url_for(key: &str) -> String {
        format!("memory://{key}")
    }
}

#[async_trait]
impl MediaStore for MemoryMediaStore {
    async fn upload_badge(
        &self,
        id: &PrincipalId,
        bytes: Vec<u8>,
    ) -> Result<String, MediaError> {
        let key = badge_key(id);
        self.objects.insert(key.clone(), bytes);
        Ok(Self::url_for(&key))
    }

    async fn badge_url(&self, id: &PrincipalId) -> Result<Option<String>, MediaError> {
        let key = badge_key(id);
        Ok(self.objects.contains_key(&key).then(|| Self::url_for(&key)))
    }
}
