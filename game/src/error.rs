use catalog::CatalogError;
use statistics::StorageError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuizError {
    #[error("Failed to load movies: {0}")]
    Load(#[from] CatalogError),

    #[error("No movies available")]
    NoMoviesAvailable,

    #[error("Failed to save statistics: {0}")]
    Storage(#[from] StorageError),

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("Unable to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Player task failed: {0}")]
    Player(#[from] tokio::task::JoinError),
}
