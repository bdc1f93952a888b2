//! SafeSender API Library
//!
//! This crate provides the HTTP handlers, error mapping, and application
//! setup for the SafeSender Storage API.

mod api_doc;
mod handlers;
mod telemetry;

pub mod error;
pub mod setup;
pub mod state;

// Re-exports
pub use error::ErrorResponse;
