use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server responded with status {0}")]
    Status(u16),

    #[error("Malformed catalog payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("Catalog service error: {0}")]
    Api(String),

    #[error("Unable to read catalog file: {0}")]
    Io(#[from] std::io::Error),
}
