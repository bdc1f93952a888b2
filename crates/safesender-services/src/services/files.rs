//! Files service: the indirection layer between external file tokens and
//! backend storage identifiers.
//!
//! Upload runs as a two-phase sequence: bytes are saved first, and the
//! metadata record is committed only after the blob store confirms the save.
//! A failed or cancelled save therefore never leaves a resolvable token
//! behind; the metadata commit is unreachable without a storage identifier.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use safesender_core::models::{DownloadedFile, FileRecordDraft, UploadFile};
use safesender_core::{AppError, StorageOptions, TokenGenerator};
use safesender_db::MetadataStore;
use safesender_storage::{storage_key, BlobStore};

/// Coordinates the metadata store and the blob store for file upload and
/// download.
///
/// The service holds no mutable state of its own; all durable state lives in
/// the injected stores, so concurrent invocations are independent.
#[derive(Clone)]
pub struct FilesService {
    metadata: Arc<dyn MetadataStore>,
    blobs: Arc<dyn BlobStore>,
    tokens: Arc<dyn TokenGenerator>,
    options: Arc<dyn StorageOptions>,
}

impl FilesService {
    pub fn new(
        metadata: Arc<dyn MetadataStore>,
        blobs: Arc<dyn BlobStore>,
        tokens: Arc<dyn TokenGenerator>,
        options: Arc<dyn StorageOptions>,
    ) -> Self {
        Self {
            metadata,
            blobs,
            tokens,
            options,
        }
    }

    /// Store file content and metadata; returns the external token.
    ///
    /// The storage-type label is read from the options accessor once per
    /// call, so a hot-reloaded configuration takes effect on the next upload.
    pub async fn upload(
        &self,
        request: UploadFile,
        cancel: &CancellationToken,
    ) -> Result<String, AppError> {
        if request.file_name.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "file_name must not be empty".to_string(),
            ));
        }

        let token = self.tokens.generate();
        let key = storage_key(&token, &request.file_name);

        let draft = FileRecordDraft {
            token: token.clone(),
            file_name: request.file_name,
            password_hash: request.password_hash,
            storage_type: self.options.current_storage_type(),
            original_file_size: request.original_file_size,
        };

        let saved = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                return Err(AppError::Cancelled(
                    "upload aborted before bytes were saved".to_string(),
                ));
            }
            result = self.blobs.save_bytes(&key, request.file_data) => {
                result.map_err(|e| AppError::StorageWrite(e.to_string()))?
            }
        };

        // Bytes are durable but nothing references them yet. If the caller
        // went away during the save, back the blob out instead of committing.
        if cancel.is_cancelled() {
            self.cleanup_blob(&saved.storage_identifier).await;
            return Err(AppError::Cancelled(
                "upload aborted before metadata was committed".to_string(),
            ));
        }

        let record = draft.into_record(saved.storage_identifier);
        let storage_file_identifier = record.storage_file_identifier.clone();

        if let Err(e) = self.metadata.add(record).await {
            self.cleanup_blob(&storage_file_identifier).await;
            return Err(e);
        }

        tracing::info!(
            storage_identifier = %storage_file_identifier,
            token = %token,
            "File record committed"
        );

        Ok(token)
    }

    /// Resolve a token to the stored content and its metadata.
    ///
    /// The password hash is returned unchanged; verification is a caller
    /// concern.
    pub async fn download(
        &self,
        token: &str,
        cancel: &CancellationToken,
    ) -> Result<DownloadedFile, AppError> {
        let record = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                return Err(AppError::Cancelled("download aborted".to_string()));
            }
            result = self.metadata.get_by_token(token) => result?,
        };

        let record = record.ok_or_else(|| {
            AppError::NotFound(format!("No file found for the specified token: {}", token))
        })?;

        let file_data = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                return Err(AppError::Cancelled("download aborted".to_string()));
            }
            result = self.blobs.get_bytes(&record.storage_file_identifier) => {
                result.map_err(|e| AppError::StorageRead(e.to_string()))?
            }
        };

        Ok(DownloadedFile::from_record(record, file_data))
    }

    /// Best-effort removal of a blob that will never be referenced by a
    /// metadata record.
    async fn cleanup_blob(&self, storage_identifier: &str) {
        if let Err(e) = self.blobs.delete(storage_identifier).await {
            tracing::debug!(
                error = %e,
                storage_identifier = %storage_identifier,
                "Failed to clean up blob without a metadata record"
            );
        }
    }
}
