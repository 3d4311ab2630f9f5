use async_trait::async_trait;
use reqwest::Client;
use types::MostPopularMovies;

use super::{ImageLoader, MoviesLoader};
use crate::{parse_movies, CatalogConfig, CatalogError};

/// Fetches the catalog once per call. No retries; the caller decides.
#[derive(Debug, Clone)]
pub struct HttpMoviesLoader {
    client: Client,
    url: String,
}

impl HttpMoviesLoader {
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            client: Client::new(),
            url: config.url.clone(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

async fn fetch(client: &Client, url: &str) -> Result<Vec<u8>, CatalogError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CatalogError::Status(status.as_u16()));
    }
    Ok(response.bytes().await?.to_vec())
}

#[async_trait]
impl MoviesLoader for HttpMoviesLoader {
    async fn load_movies(&self) -> Result<MostPopularMovies, CatalogError> {
        log::info!("Loading movies from {}", self.url);
        let body = fetch(&self.client, &self.url).await?;
        parse_movies(&body)
    }
}

#[derive(Debug, Clone, Default)]
pub struct HttpImageLoader {
    client: Client,
}

#[async_trait]
impl ImageLoader for HttpImageLoader {
    async fn load_image(&self, url: &str) -> Result<Vec<u8>, CatalogError> {
        log::debug!("Loading image {url}");
        fetch(&self.client, url).await
    }
}
