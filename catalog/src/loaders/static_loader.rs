use async_trait::async_trait;
use types::{Movie, MostPopularMovies};

use super::{ImageLoader, MoviesLoader};
use crate::CatalogError;

/// Hands out a fixed payload, run through the same error check as the
/// network loader.
#[derive(Debug, Clone)]
pub struct StaticMoviesLoader {
    payload: MostPopularMovies,
}

impl StaticMoviesLoader {
    pub fn new(movies: Vec<Movie>) -> Self {
        Self {
            payload: MostPopularMovies {
                error_message: String::new(),
                items: movies,
            },
        }
    }

    pub fn failing(error_message: &str) -> Self {
        Self {
            payload: MostPopularMovies {
                error_message: error_message.to_string(),
                items: Vec::new(),
            },
        }
    }
}

#[async_trait]
impl MoviesLoader for StaticMoviesLoader {
    async fn load_movies(&self) -> Result<MostPopularMovies, CatalogError> {
        if self.payload.is_error() {
            return Err(CatalogError::Api(self.payload.error_message.clone()));
        }
        Ok(self.payload.clone())
    }
}

/// Never fetches anything; every poster comes back empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopImageLoader;

#[async_trait]
impl ImageLoader for NoopImageLoader {
    async fn load_image(&self, _url: &str) -> Result<Vec<u8>, CatalogError> {
        Ok(Vec::new())
    }
}
