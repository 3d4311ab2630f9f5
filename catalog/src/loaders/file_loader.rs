use std::path::PathBuf;

use async_trait::async_trait;
use types::MostPopularMovies;

use super::MoviesLoader;
use crate::{parse_movies, CatalogError};

/// Reads a catalog payload saved to disk, for offline play.
#[derive(Debug, Clone)]
pub struct FileMoviesLoader {
    path: PathBuf,
}

impl FileMoviesLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl MoviesLoader for FileMoviesLoader {
    async fn load_movies(&self) -> Result<MostPopularMovies, CatalogError> {
        log::info!("Loading movies from {}", self.path.display());
        let contents = tokio::fs::read(&self.path).await?;
        parse_movies(&contents)
    }
}
