//! Data models for the application
//!
//! This module contains the file record entity and the request/response
//! models used by the files service.

mod file_record;

// Re-export all models for convenient imports
pub use file_record::*;
