use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::traits::{BlobStore, SavedBlob, StorageError, StorageResult};
use crate::{keys, StorageBackend};

/// In-memory blob store.
///
/// Backs unit and integration tests, and lets the API run without any
/// durable storage configured. Contents are lost on process exit.
#[derive(Default)]
pub struct InMemoryBlobStore {
    blobs: Mutex<HashMap<String, Vec<u8>>>,
}

impl InMemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.blobs.lock().expect("blob map poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl BlobStore for InMemoryBlobStore {
    async fn save_bytes(&self, key: &str, data: Vec<u8>) -> StorageResult<SavedBlob> {
        keys::validate_key(key)?;

        self.blobs
            .lock()
            .expect("blob map poisoned")
            .insert(key.to_string(), data);

        tracing::debug!(key = %key, "In-memory blob save successful");

        Ok(SavedBlob {
            storage_identifier: key.to_string(),
        })
    }

    async fn get_bytes(&self, storage_identifier: &str) -> StorageResult<Vec<u8>> {
        self.blobs
            .lock()
            .expect("blob map poisoned")
            .get(storage_identifier)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(storage_identifier.to_string()))
    }

    async fn exists(&self, storage_identifier: &str) -> StorageResult<bool> {
        Ok(self
            .blobs
            .lock()
            .expect("blob map poisoned")
            .contains_key(storage_identifier))
    }

    async fn delete(&self, storage_identifier: &str) -> StorageResult<()> {
        self.blobs
            .lock()
            .expect("blob map poisoned")
            .remove(storage_identifier);
        Ok(())
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Memory
    }
}
