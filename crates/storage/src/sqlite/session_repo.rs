use chrono::Utc;
use sqlx::Row;

use super::SqliteRepository;
use crate::repository::{SessionStore, StorageError};

fn conn<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Connection(e.to_string())
}

const UPSERT: &str = r"
    INSERT INTO session_records (key, value, updated_at)
    VALUES (?1, ?2, ?3)
    ON CONFLICT(key) DO UPDATE SET
        value = excluded.value,
        updated_at = excluded.updated_at
";

#[async_trait::async_trait]
impl SessionStore for SqliteRepository {
    async fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        let row = sqlx::query("SELECT value FROM session_records WHERE key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(conn)?;

        row.map(|row| {
            row.try_get::<String, _>("value")
                .map_err(|e| StorageError::Serialization(e.to_string()))
        })
        .transpose()
    }

    async fn put_raw(&self, key: &str, value: String) -> Result<(), StorageError> {
        sqlx::query(UPSERT)
            .bind(key)
            .bind(value)
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(conn)?;
        Ok(())
    }

    async fn put_many(&self, entries: Vec<(String, String)>) -> Result<(), StorageError> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await.map_err(conn)?;
        for (key, value) in entries {
            sqlx::query(UPSERT)
                .bind(key)
                .bind(value)
                .bind(now)
                .execute(&mut *tx)
                .await
                .map_err(conn)?;
        }
        tx.commit().await.map_err(conn)?;
        Ok(())
    }

    async fn remove_many(&self, keys: &[&str]) -> Result<(), StorageError> {
        let mut tx = self.pool.begin().await.map_err(conn)?;
        for key in keys {
            sqlx::query("DELETE FROM session_records WHERE key = ?1")
                .bind(*key)
                .execute(&mut *tx)
                .await
                .map_err(conn)?;
        }
        tx.commit().await.map_err(conn)?;
        Ok(())
    }
}
