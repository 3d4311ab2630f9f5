use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

use super::{KeyValueStore, ScalarValue};
use crate::StorageError;

const UPSERT: &str =
    "INSERT INTO key_values (key, value) VALUES (?, ?) ON CONFLICT(key) DO UPDATE SET value = excluded.value";

/// Scalars persisted one row per key, the value JSON-encoded.
#[derive(Debug)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn init(&self) -> Result<(), StorageError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS key_values (key TEXT PRIMARY KEY, value TEXT NOT NULL)",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::Query(e.to_string()))?;
        tracing::debug!("key_values table ready");
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl KeyValueStore for SqliteStore {
    async fn get(&self, key: &str) -> Result<Option<ScalarValue>, StorageError> {
        let row = sqlx::query("SELECT value FROM key_values WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StorageError::Query(e.to_string()))?;

        Ok(match row {
            Some(r) => {
                let value: String = r.get("value");
                Some(serde_json::from_str(&value).map_err(StorageError::Serialization)?)
            }
            None => None,
        })
    }

    async fn set(&mut self, key: &str, value: ScalarValue) -> Result<(), StorageError> {
        let value_json = serde_json::to_string(&value).map_err(StorageError::Serialization)?;
        sqlx::query(UPSERT)
        .bind(key)
        .bind(value_json)
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::Query(e.to_string()))?;
        Ok(())
    }

    async fn set_many(&mut self, values: Vec<(&'static str, ScalarValue)>) -> Result<(), StorageError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| StorageError::Transaction(e.to_string()))?;

        for (key, value) in &values {
            let value_json = serde_json::to_string(value).map_err(StorageError::Serialization)?;
            sqlx::query(UPSERT)
                .bind(*key)
                .bind(value_json)
                .execute(&mut *tx)
                .await
                .map_err(|e| StorageError::Query(e.to_string()))?;
        }

        tx.commit()
            .await
            .map_err(|e| StorageError::Transaction(e.to_string()))?;
        tracing::debug!("Committed {} values", values.len());
        Ok(())
    }

    async fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM key_values WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::Query(e.to_string()))?;
        Ok(())
    }
}
