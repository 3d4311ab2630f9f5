use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::StorageError;

/// A single stored scalar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScalarValue {
    Int(i64),
    Date(DateTime<Utc>),
}

/// Durable key-value namespace that outlives a session.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<ScalarValue>, StorageError>;
    async fn set(&mut self, key: &str, value: ScalarValue) -> Result<(), StorageError>;
    async fn remove(&mut self, key: &str) -> Result<(), StorageError>;

    /// Writes every pair or none of them.
    async fn set_many(&mut self, values: Vec<(&'static str, ScalarValue)>) -> Result<(), StorageError>;
}
