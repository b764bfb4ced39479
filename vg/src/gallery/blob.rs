//! Session-scoped storage for user-supplied images
//!
//! Blob handles stand in for what a browser calls object URLs: valid
//! only for the running session, and released explicitly when replaced
//! or when the session ends so the backing bytes do not accumulate.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

/// Handle to an image held in the session blob store
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlobId(String);

impl BlobId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BlobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "blob:{}", self.0)
    }
}

/// One stored image
#[derive(Debug, Clone)]
pub struct Blob {
    pub mime_type: String,
    pub bytes: Vec<u8>,
    pub created_at: DateTime<Utc>,
}

/// In-memory image store; contents live for the session only
#[derive(Debug, Default)]
pub struct BlobStore {
    blobs: HashMap<BlobId, Blob>,
}

impl BlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store image bytes and hand back a session-scoped handle
    pub fn insert(&mut self, mime_type: impl Into<String>, bytes: Vec<u8>) -> BlobId {
        let id = BlobId(Uuid::now_v7().to_string());
        debug!(%id, size = bytes.len(), "insert: blob stored");
        self.blobs.insert(
            id.clone(),
            Blob {
                mime_type: mime_type.into(),
                bytes,
                created_at: Utc::now(),
            },
        );
        id
    }

    pub fn get(&self, id: &BlobId) -> Option<&Blob> {
        self.blobs.get(id)
    }

    /// Release a blob; unknown handles are ignored
    pub fn revoke(&mut self, id: &BlobId) {
        if self.blobs.remove(id).is_some() {
            debug!(%id, "revoke: blob released");
        }
    }

    /// Release everything (session teardown)
    pub fn clear(&mut self) {
        debug!(count = self.blobs.len(), "clear: releasing all blobs");
        self.blobs.clear();
    }

    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }
}
