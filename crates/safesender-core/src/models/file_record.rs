use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::storage_types::StorageBackend;

/// Metadata record for a stored file.
///
/// A `FileRecord` always carries a populated `storage_file_identifier`; a
/// record whose bytes have not been saved yet only exists as a
/// [`FileRecordDraft`]. Records are inserted exactly once and never updated
/// or deleted by this layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRecord {
    /// Opaque external identifier, generated at upload time.
    pub token: String,
    /// Original caller-supplied file name.
    pub file_name: String,
    /// Caller-supplied credential hash; opaque to this layer.
    pub password_hash: String,
    /// Backend configuration active when the file was stored.
    pub storage_type: StorageBackend,
    /// Size in bytes as reported by the caller.
    pub original_file_size: i64,
    /// Backend-assigned identifier for the persisted bytes.
    pub storage_file_identifier: String,
    pub created_at: DateTime<Utc>,
}

/// In-memory precursor of a [`FileRecord`], created at the start of an upload.
///
/// The draft has no storage identifier and therefore cannot be handed to the
/// metadata store; [`FileRecordDraft::into_record`] is the only way to obtain
/// a persistable record, and it requires the identifier the blob store
/// returned for a successful save.
#[derive(Debug, Clone)]
pub struct FileRecordDraft {
    pub token: String,
    pub file_name: String,
    pub password_hash: String,
    pub storage_type: StorageBackend,
    pub original_file_size: i64,
}

impl FileRecordDraft {
    /// Bind the backend-assigned identifier and produce the persistable record.
    pub fn into_record(self, storage_file_identifier: String) -> FileRecord {
        FileRecord {
            token: self.token,
            file_name: self.file_name,
            password_hash: self.password_hash,
            storage_type: self.storage_type,
            original_file_size: self.original_file_size,
            storage_file_identifier,
            created_at: Utc::now(),
        }
    }
}

/// Upload request as seen by the files service.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub file_name: String,
    pub password_hash: String,
    pub original_file_size: i64,
    pub file_data: Vec<u8>,
}

/// Download result: content plus the metadata captured at upload time.
///
/// The password hash is returned unchanged; verification is a caller concern.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DownloadedFile {
    #[serde(with = "base64_bytes")]
    pub file_data: Vec<u8>,
    pub file_name: String,
    pub password_hash: String,
    pub original_file_size: i64,
}

impl DownloadedFile {
    pub fn from_record(record: FileRecord, file_data: Vec<u8>) -> Self {
        DownloadedFile {
            file_data,
            file_name: record.file_name,
            password_hash: record.password_hash,
            original_file_size: record.original_file_size,
        }
    }
}

/// Serde adapter rendering byte content as base64 in JSON payloads.
mod base64_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD
            .decode(encoded.as_bytes())
            .map_err(serde::de::Error::custom)
    }
}
