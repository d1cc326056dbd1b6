#![forbid(unsafe_code)]

pub mod records;
pub mod repository;
pub mod sqlite;

pub use records::{RecordKey, SessionRecords};
pub use repository::{InMemoryStore, SessionStore, Storage, StorageError};
