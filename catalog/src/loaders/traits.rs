use async_trait::async_trait;
use types::MostPopularMovies;

use crate::CatalogError;

#[async_trait]
pub trait MoviesLoader: Send + Sync {
    async fn load_movies(&self) -> Result<MostPopularMovies, CatalogError>;
}

#[async_trait]
pub trait ImageLoader: Send + Sync {
    async fn load_image(&self, url: &str) -> Result<Vec<u8>, CatalogError>;
}
