//! SafeSender Storage Library
//!
//! This crate provides the blob store abstraction and implementations for the
//! SafeSender Storage API: the `BlobStore` trait plus local-filesystem and
//! in-memory backends.
//!
//! # Storage key format
//!
//! Blob keys are composed from the file token and the extension of the
//! original file name: `{token}.{ext}`, or the bare token when the name has
//! no extension. Keys must not contain `..` or a leading `/`. Key generation
//! is centralized in the `keys` module so all backends stay consistent.

pub mod factory;
pub mod keys;
#[cfg(feature = "storage-local")]
pub mod local;
pub mod memory;
pub mod traits;

// Re-export commonly used types
pub use factory::create_blob_store;
pub use keys::storage_key;
#[cfg(feature = "storage-local")]
pub use local::LocalBlobStore;
pub use memory::InMemoryBlobStore;
pub use safesender_core::StorageBackend;
pub use traits::{BlobStore, SavedBlob, StorageError, StorageResult};
