use std::sync::Arc;

#[cfg(feature = "storage-local")]
use crate::LocalBlobStore;
use crate::{BlobStore, InMemoryBlobStore, StorageBackend, StorageError, StorageResult};
use safesender_core::Config;

/// Create a blob store backend based on configuration
pub async fn create_blob_store(config: &Config) -> StorageResult<Arc<dyn BlobStore>> {
    match config.storage_backend() {
        #[cfg(feature = "storage-local")]
        StorageBackend::Local => {
            let base_path = config.local_storage_path().map(String::from).ok_or_else(|| {
                StorageError::ConfigError("LOCAL_STORAGE_PATH not configured".to_string())
            })?;

            let store = LocalBlobStore::new(base_path).await?;
            Ok(Arc::new(store))
        }

        #[cfg(not(feature = "storage-local"))]
        StorageBackend::Local => Err(StorageError::ConfigError(
            "Local storage backend not available (storage-local feature not enabled)".to_string(),
        )),

        StorageBackend::Memory => Ok(Arc::new(InMemoryBlobStore::new())),

        StorageBackend::S3 => Err(StorageError::ConfigError(
            "S3 storage backend not yet implemented".to_string(),
        )),
    }
}
