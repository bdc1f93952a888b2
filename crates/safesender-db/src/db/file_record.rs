//! File record repository: insert/lookup for the file_records table.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use safesender_core::models::FileRecord;
use safesender_core::{AppError, StorageBackend};
use sqlx::{PgPool, Postgres};

/// Metadata store abstraction.
///
/// Records are written once, after their bytes are confirmed stored, and
/// resolved later by token. There is no update or delete surface; the record
/// lifecycle ends at insertion.
#[async_trait]
pub trait MetadataStore: Send + Sync {
    /// Persist a completed file record.
    async fn add(&self, record: FileRecord) -> Result<(), AppError>;

    /// Resolve a record by its external token, if one was ever committed.
    async fn get_by_token(&self, token: &str) -> Result<Option<FileRecord>, AppError>;
}

/// Row type for file_records table (for FromRow).
#[derive(Debug, sqlx::FromRow)]
struct FileRecordRow {
    token: String,
    file_name: String,
    password_hash: String,
    storage_type: StorageBackend,
    original_file_size: i64,
    storage_file_identifier: String,
    created_at: DateTime<Utc>,
}

impl FileRecordRow {
    fn to_file_record(self) -> FileRecord {
        FileRecord {
            token: self.token,
            file_name: self.file_name,
            password_hash: self.password_hash,
            storage_type: self.storage_type,
            original_file_size: self.original_file_size,
            storage_file_identifier: self.storage_file_identifier,
            created_at: self.created_at,
        }
    }
}

/// Repository for file_records table.
#[derive(Clone)]
pub struct PgFileRecordRepository {
    pool: PgPool,
}

impl PgFileRecordRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MetadataStore for PgFileRecordRepository {
    #[tracing::instrument(skip(self, record), fields(db.table = "file_records", token = %record.token))]
    async fn add(&self, record: FileRecord) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO file_records
                (token, file_name, password_hash, storage_type, original_file_size,
                 storage_file_identifier, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(&record.token)
        .bind(&record.file_name)
        .bind(&record.password_hash)
        .bind(record.storage_type)
        .bind(record.original_file_size)
        .bind(&record.storage_file_identifier)
        .bind(record.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    #[tracing::instrument(skip(self), fields(db.table = "file_records", token = %token))]
    async fn get_by_token(&self, token: &str) -> Result<Option<FileRecord>, AppError> {
        let row: Option<FileRecordRow> = sqlx::query_as::<Postgres, FileRecordRow>(
            r#"
            SELECT token, file_name, password_hash, storage_type, original_file_size,
                   storage_file_identifier, created_at
            FROM file_records
            WHERE token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(|r| r.to_file_record()))
    }
}
