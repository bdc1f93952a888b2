//! SafeSender Core Library
//!
//! This crate provides core domain models, error types, configuration, and
//! token generation shared across all SafeSender Storage API components.

pub mod config;
pub mod error;
pub mod models;
pub mod storage_types;
pub mod token;

// Re-export commonly used types
pub use config::{Config, StorageOptions};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use storage_types::StorageBackend;
pub use token::{TokenGenerator, UuidTokenGenerator};
