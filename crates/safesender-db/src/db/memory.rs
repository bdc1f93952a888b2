use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use safesender_core::models::FileRecord;
use safesender_core::AppError;

use super::MetadataStore;

/// In-memory metadata store.
///
/// Backs unit and integration tests, and lets the API run without Postgres.
/// Contents are lost on process exit.
#[derive(Default)]
pub struct InMemoryFileRecordRepository {
    records: Mutex<HashMap<String, FileRecord>>,
}

impl InMemoryFileRecordRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.lock().expect("record map poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl MetadataStore for InMemoryFileRecordRepository {
    async fn add(&self, record: FileRecord) -> Result<(), AppError> {
        let mut records = self.records.lock().expect("record map poisoned");
        if records.contains_key(&record.token) {
            // Same uniqueness guarantee the Postgres primary key provides.
            return Err(AppError::Internal(format!(
                "Duplicate file token: {}",
                record.token
            )));
        }
        records.insert(record.token.clone(), record);
        Ok(())
    }

    async fn get_by_token(&self, token: &str) -> Result<Option<FileRecord>, AppError> {
        Ok(self
            .records
            .lock()
            .expect("record map poisoned")
            .get(token)
            .cloned())
    }
}
