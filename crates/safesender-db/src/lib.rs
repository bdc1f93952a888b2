//! SafeSender Database Library
//!
//! Metadata store for file records: the `MetadataStore` trait, the Postgres
//! repository, and an in-memory repository for tests and storage-free runs.

mod db;

pub use db::{InMemoryFileRecordRepository, MetadataStore, PgFileRecordRepository};

/// Embedded migrations for the file_records schema.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();
