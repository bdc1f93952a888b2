//! Shared key composition for storage backends.
//!
//! Key format: `{token}.{ext}` where the extension comes from the original
//! file name, or the bare token when the name has no extension. All backends
//! must use this format for consistency.

use std::path::Path;

use crate::traits::{StorageError, StorageResult};

/// Compose the storage key for a file token and its original file name.
pub fn storage_key(token: &str, file_name: &str) -> String {
    match Path::new(file_name).extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{}.{}", token, ext.to_lowercase()),
        None => token.to_string(),
    }
}

/// Validate a storage key before handing it to a backend.
///
/// Keys must not escape the backend's namespace: no path traversal, no
/// absolute paths, no empty keys.
pub fn validate_key(key: &str) -> StorageResult<()> {
    if key.is_empty() {
        return Err(StorageError::InvalidKey("Storage key is empty".to_string()));
    }
    if key.contains("..") || key.starts_with('/') {
        return Err(StorageError::InvalidKey(
            "Storage key contains invalid characters".to_string(),
        ));
    }
    Ok(())
}
