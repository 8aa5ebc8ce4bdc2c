use async_trait::async_trait;
use chrono::Utc;
use sqlx::Row;

use crate::repository::{KeyValueRepository, StorageError};

use super::SqliteRepository;

const UPSERT: &str = r"
    INSERT INTO key_values (key, value, updated_at)
    VALUES (?1, ?2, ?3)
    ON CONFLICT(key) DO UPDATE SET
        value = excluded.value,
        updated_at = excluded.updated_at
";

fn connection_error(err: sqlx::Error) -> StorageError {
    StorageError::Connection(err.to_string())
}

#[async_trait]
impl KeyValueRepository for SqliteRepository {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let row = sqlx::query("SELECT value FROM key_values WHERE key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(connection_error)?;

        let Some(row) = row else {
            return Ok(None);
        };
        let value: String = row
            .try_get("value")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        Ok(Some(value))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        sqlx::query(UPSERT)
            .bind(key)
            .bind(value)
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(connection_error)?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM key_values WHERE key = ?1")
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(connection_error)?;
        Ok(())
    }

    async fn set_many(&self, entries: &[(&str, &str)]) -> Result<(), StorageError> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await.map_err(connection_error)?;
        for (key, value) in entries {
            sqlx::query(UPSERT)
                .bind(*key)
                .bind(*value)
                .bind(now)
                .execute(&mut *tx)
                .await
                .map_err(connection_error)?;
        }
        tx.commit().await.map_err(connection_error)?;
        Ok(())
    }

    async fn remove_many(&self, keys: &[&str]) -> Result<(), StorageError> {
        let mut tx = self.pool.begin().await.map_err(connection_error)?;
        for key in keys {
            sqlx::query("DELETE FROM key_values WHERE key = ?1")
                .bind(*key)
                .execute(&mut *tx)
                .await
                .map_err(connection_error)?;
        }
        tx.commit().await.map_err(connection_error)?;
        Ok(())
    }
}
