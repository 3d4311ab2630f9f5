use std::collections::HashMap;

use async_trait::async_trait;

use super::{KeyValueStore, ScalarValue};
use crate::StorageError;

/// Keeps the scalars in a map; nothing outlives the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, ScalarValue>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<ScalarValue>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    async fn set(&mut self, key: &str, value: ScalarValue) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.values.remove(key);
        Ok(())
    }

    async fn set_many(&mut self, values: Vec<(&'static str, ScalarValue)>) -> Result<(), StorageError> {
        self.values
            .extend(values.into_iter().map(|(key, value)| (key.to_string(), value)));
        Ok(())
    }
}
