use std::sync::Arc;

use classroom_core::model::CredentialPair;

use crate::repository::{KeyValueRepository, StorageError};

pub const ACCESS_TOKEN_KEY: &str = "accessToken";
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

/// Accessor for the access/refresh credential pair. Holds no logic beyond key naming.
///
/// Cloning is cheap; every clone reads and writes the same backend.
#[derive(Clone)]
pub struct CredentialStore {
    repo: Arc<dyn KeyValueRepository>,
}

impl CredentialStore {
    #[must_use]
    pub fn new(repo: Arc<dyn KeyValueRepository>) -> Self {
        Self { repo }
    }

    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    pub async fn access_token(&self) -> Result<Option<String>, StorageError> {
        self.repo.get(ACCESS_TOKEN_KEY).await
    }

    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    pub async fn refresh_token(&self) -> Result<Option<String>, StorageError> {
        self.repo.get(REFRESH_TOKEN_KEY).await
    }

    /// Both stored credentials, or `None` unless both are present.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    pub async fn load(&self) -> Result<Option<CredentialPair>, StorageError> {
        let access = self.access_token().await?;
        let refresh = self.refresh_token().await?;
        Ok(match (access, refresh) {
            (Some(access), Some(refresh)) => Some(CredentialPair::new(access, refresh)),
            _ => None,
        })
    }

    /// Overwrite both credentials.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the pair cannot be written.
    pub async fn store(&self, pair: &CredentialPair) -> Result<(), StorageError> {
        self.repo
            .set_many(&[
                (ACCESS_TOKEN_KEY, pair.access_token.as_str()),
                (REFRESH_TOKEN_KEY, pair.refresh_token.as_str()),
            ])
            .await
    }

    /// Remove both credentials.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    pub async fn clear(&self) -> Result<(), StorageError> {
        self.repo
            .remove_many(&[ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY])
            .await
    }
}
