//! SafeSender Services Library
//!
//! Business services for the SafeSender Storage API. The files service is the
//! indirection layer between external file tokens and backend storage
//! identifiers.

pub mod services;

pub use services::FilesService;
