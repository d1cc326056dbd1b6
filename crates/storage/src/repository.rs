use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Durable key/value store holding JSON text.
///
/// Keys are scoped to the application; values are opaque to the store and
/// decoded by [`crate::records::SessionRecords`].
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Fetch the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, overwriting any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be stored.
    async fn put_raw(&self, key: &str, value: String) -> Result<(), StorageError>;

    /// Store several entries so that either all or none become visible.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the write cannot be completed.
    async fn put_many(&self, entries: Vec<(String, String)>) -> Result<(), StorageError>;

    /// Remove several keys so that no partially-cleared state is observable.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the removal cannot be completed.
    async fn remove_many(&self, keys: &[&str]) -> Result<(), StorageError>;
}

/// Simple in-memory store for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl SessionStore for InMemoryStore {
    async fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    async fn put_raw(&self, key: &str, value: String) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_owned(), value);
        Ok(())
    }

    async fn put_many(&self, entries: Vec<(String, String)>) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.extend(entries);
        Ok(())
    }

    async fn remove_many(&self, keys: &[&str]) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        for key in keys {
            guard.remove(*key);
        }
        Ok(())
    }
}

/// Aggregates the session store behind a trait object for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub sessions: Arc<dyn SessionStore>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let sessions: Arc<dyn SessionStore> = Arc::new(InMemoryStore::new());
        Self { sessions }
    }
}
