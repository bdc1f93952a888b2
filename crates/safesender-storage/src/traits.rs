//! Blob store abstraction trait
//!
//! This module defines the BlobStore trait that all storage backends must
//! implement.

use async_trait::async_trait;
use thiserror::Error;

use crate::StorageBackend;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Save failed: {0}")]
    SaveFailed(String),

    #[error("Read failed: {0}")]
    ReadFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("Blob not found: {0}")]
    NotFound(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Storage backend error: {0}")]
    BackendError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Outcome of a successful blob save.
///
/// The storage identifier is the backend-internal key the saved bytes can be
/// fetched with later. It is recorded in the file's metadata record and never
/// exposed to external callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedBlob {
    pub storage_identifier: String,
}

/// Blob store abstraction trait
///
/// All storage backends (local filesystem, in-memory) must implement this
/// trait. The files service works against it without coupling to backend
/// implementation details.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Persist raw bytes under the given key.
    ///
    /// Returns the backend-assigned storage identifier on success; any
    /// failure means nothing retrievable was stored for this key.
    async fn save_bytes(&self, key: &str, data: Vec<u8>) -> StorageResult<SavedBlob>;

    /// Fetch raw bytes by storage identifier.
    async fn get_bytes(&self, storage_identifier: &str) -> StorageResult<Vec<u8>>;

    /// Check if a blob exists
    async fn exists(&self, storage_identifier: &str) -> StorageResult<bool>;

    /// Delete a blob by its storage identifier
    async fn delete(&self, storage_identifier: &str) -> StorageResult<()>;

    /// Get the storage backend type
    fn backend_type(&self) -> StorageBackend;
}
