pub mod config;
pub mod error;
pub mod loaders;

pub use config::{CatalogConfig, DEFAULT_API_URL};
pub use error::CatalogError;
pub use loaders::{
    FileMoviesLoader, HttpImageLoader, HttpMoviesLoader, ImageLoader, MoviesLoader,
    NoopImageLoader, StaticMoviesLoader,
};

use types::MostPopularMovies;

/// Decodes a catalog payload. A non-empty `errorMessage` is a failure even
/// though the transport succeeded.
pub fn parse_movies(body: &[u8]) -> Result<MostPopularMovies, CatalogError> {
    let movies: MostPopularMovies = serde_json::from_slice(body)?;
    if movies.is_error() {
        log::error!("Catalog service returned an error: {}", movies.error_message);
        return Err(CatalogError::Api(movies.error_message));
    }
    log::info!("Loaded {} movies", movies.items.len());
    Ok(movies)
}
