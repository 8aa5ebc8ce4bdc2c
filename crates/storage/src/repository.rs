use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use crate::credentials::CredentialStore;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Opaque string values under fixed keys, the client's only persisted state.
#[async_trait]
pub trait KeyValueRepository: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Insert or overwrite the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be stored.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Write several entries. Backends that support it apply them atomically.
    ///
    /// # Errors
    ///
    /// Returns the first `StorageError` encountered.
    async fn set_many(&self, entries: &[(&str, &str)]) -> Result<(), StorageError> {
        for (key, value) in entries {
            self.set(key, value).await?;
        }
        Ok(())
    }

    /// Remove several keys. Backends that support it apply the removal atomically.
    ///
    /// # Errors
    ///
    /// Returns the first `StorageError` encountered.
    async fn remove_many(&self, keys: &[&str]) -> Result<(), StorageError> {
        for key in keys {
            self.remove(key).await?;
        }
        Ok(())
    }
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl KeyValueRepository for InMemoryRepository {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.remove(key);
        Ok(())
    }

    async fn set_many(&self, entries: &[(&str, &str)]) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        for (key, value) in entries {
            guard.insert((*key).to_owned(), (*value).to_owned());
        }
        Ok(())
    }
}

/// Aggregates the key-value backend behind a trait object for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub key_values: Arc<dyn KeyValueRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let key_values: Arc<dyn KeyValueRepository> = Arc::new(InMemoryRepository::new());
        Self { key_values }
    }

    /// Credential accessor over this backend.
    #[must_use]
    pub fn credentials(&self) -> CredentialStore {
        CredentialStore::new(Arc::clone(&self.key_values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_get_and_remove() {
        let repo = InMemoryRepository::new();
        assert_eq!(repo.get("accessToken").await.unwrap(), None);

        repo.set("accessToken", "abc").await.unwrap();
        repo.set("accessToken", "def").await.unwrap();
        assert_eq!(repo.get("accessToken").await.unwrap().as_deref(), Some("def"));

        repo.remove("accessToken").await.unwrap();
        repo.remove("accessToken").await.unwrap();
        assert_eq!(repo.get("accessToken").await.unwrap(), None);
    }

    #[tokio::test]
    async fn clones_share_entries() {
        let repo = InMemoryRepository::new();
        let other = repo.clone();
        repo.set_many(&[("a", "1"), ("b", "2")]).await.unwrap();
        assert_eq!(other.get("b").await.unwrap().as_deref(), Some("2"));
        other.remove_many(&["a", "b"]).await.unwrap();
        assert_eq!(repo.get("a").await.unwrap(), None);
    }
}
