pub mod config;
pub mod error;
pub mod service;
pub mod stores;

pub use config::{StorageConfig, DEFAULT_DATABASE};
pub use error::StorageError;
pub use service::StatisticService;
pub use stores::{KeyValueStore, MemoryStore, ScalarValue, SqliteStore};
