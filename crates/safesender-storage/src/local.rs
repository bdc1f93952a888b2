use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::traits::{BlobStore, SavedBlob, StorageError, StorageResult};
use crate::{keys, StorageBackend};

/// Local filesystem blob store implementation
#[derive(Clone)]
pub struct LocalBlobStore {
    base_path: PathBuf,
}

impl LocalBlobStore {
    /// Create a new LocalBlobStore instance
    ///
    /// # Arguments
    /// * `base_path` - Root directory for file storage (e.g., "/var/lib/safesender/files")
    pub async fn new(base_path: impl Into<PathBuf>) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create storage directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(LocalBlobStore { base_path })
    }

    /// Convert storage key to filesystem path with traversal validation.
    fn key_to_path(&self, storage_key: &str) -> StorageResult<PathBuf> {
        keys::validate_key(storage_key)?;
        Ok(self.base_path.join(storage_key))
    }

    /// Ensure parent directory exists
    async fn ensure_parent_dir(&self, path: &Path) -> StorageResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    async fn save_bytes(&self, key: &str, data: Vec<u8>) -> StorageResult<SavedBlob> {
        let path = self.key_to_path(key)?;
        let size = data.len();

        self.ensure_parent_dir(&path).await?;

        let start = std::time::Instant::now();

        let mut file = fs::File::create(&path).await.map_err(|e| {
            StorageError::SaveFailed(format!("Failed to create file {}: {}", path.display(), e))
        })?;

        file.write_all(&data).await.map_err(|e| {
            StorageError::SaveFailed(format!("Failed to write file {}: {}", path.display(), e))
        })?;

        file.sync_all().await.map_err(|e| {
            StorageError::SaveFailed(format!("Failed to sync file {}: {}", path.display(), e))
        })?;

        tracing::info!(
            path = %path.display(),
            key = %key,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local blob save successful"
        );

        Ok(SavedBlob {
            storage_identifier: key.to_string(),
        })
    }

    async fn get_bytes(&self, storage_identifier: &str) -> StorageResult<Vec<u8>> {
        let path = self.key_to_path(storage_identifier)?;
        let start = std::time::Instant::now();

        if !fs::try_exists(&path).await.unwrap_or(false) {
            return Err(StorageError::NotFound(storage_identifier.to_string()));
        }

        let data = fs::read(&path).await.map_err(|e| {
            StorageError::ReadFailed(format!("Failed to read file {}: {}", path.display(), e))
        })?;

        tracing::info!(
            path = %path.display(),
            key = %storage_identifier,
            size_bytes = data.len(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local blob read successful"
        );

        Ok(data)
    }

    async fn exists(&self, storage_identifier: &str) -> StorageResult<bool> {
        let path = self.key_to_path(storage_identifier)?;
        Ok(fs::try_exists(&path).await.unwrap_or(false))
    }

    async fn delete(&self, storage_identifier: &str) -> StorageResult<()> {
        let path = self.key_to_path(storage_identifier)?;

        if !fs::try_exists(&path).await.unwrap_or(false) {
            return Ok(());
        }

        fs::remove_file(&path).await.map_err(|e| {
            StorageError::DeleteFailed(format!("Failed to delete file {}: {}", path.display(), e))
        })?;

        tracing::info!(
            path = %path.display(),
            key = %storage_identifier,
            "Local blob delete successful"
        );

        Ok(())
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Local
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_local_store_save_get() {
        let dir = tempdir().unwrap();
        let store = LocalBlobStore::new(dir.path()).await.unwrap();

        let data = b"test data".to_vec();
        let saved = store.save_bytes("tok-1.txt", data.clone()).await.unwrap();
        assert_eq!(saved.storage_identifier, "tok-1.txt");

        let fetched = store.get_bytes(&saved.storage_identifier).await.unwrap();
        assert_eq!(data, fetched);
    }

    #[tokio::test]
    async fn test_get_unknown_identifier_is_not_found() {
        let dir = tempdir().unwrap();
        let store = LocalBlobStore::new(dir.path()).await.unwrap();

        let result = store.get_bytes("missing.txt").await;
        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_path_traversal_rejected() {
        let dir = tempdir().unwrap();
        let store = LocalBlobStore::new(dir.path()).await.unwrap();

        let result = store.get_bytes("../../../etc/passwd").await;
        assert!(matches!(result, Err(StorageError::InvalidKey(_))));

        let result = store.delete("../etc/passwd").await;
        assert!(matches!(result, Err(StorageError::InvalidKey(_))));

        let result = store.exists("/etc/passwd").await;
        assert!(matches!(result, Err(StorageError::InvalidKey(_))));
    }

    #[tokio::test]
    async fn test_delete_nonexistent_is_ok() {
        let dir = tempdir().unwrap();
        let store = LocalBlobStore::new(dir.path()).await.unwrap();

        assert!(store.delete("nonexistent.txt").await.is_ok());
    }

    #[tokio::test]
    async fn test_exists() {
        let dir = tempdir().unwrap();
        let store = LocalBlobStore::new(dir.path()).await.unwrap();

        store.save_bytes("tok-2.bin", b"x".to_vec()).await.unwrap();

        assert!(store.exists("tok-2.bin").await.unwrap());
        assert!(!store.exists("tok-3.bin").await.unwrap());
    }
}
