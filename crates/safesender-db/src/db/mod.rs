mod file_record;
mod memory;

pub use file_record::{MetadataStore, PgFileRecordRepository};
pub use memory::InMemoryFileRecordRepository;
