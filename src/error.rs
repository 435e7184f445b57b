use thiserror::Error;

/// Errors that can occur while loading or querying the item catalog
#[derive(Error, Debug)]
pub enum LookupError {
    /// Failed to fetch the catalog over HTTP
    #[error("Failed to fetch catalog: {0}")]
    FetchError(#[from] reqwest::Error),

    /// Catalog payload has the wrong shape (e.g. not a JSON array)
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Payload is not valid JSON
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Failed to read or write a local file
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Persisted state could not be written
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
