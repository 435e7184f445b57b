use async_trait::async_trait;
use std::path::PathBuf;

use super::CatalogSource;
use crate::error::LookupError;

/// Reads the catalog from a local JSON file.
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<String, LookupError> {
        Ok(tokio::fs::read_to_string(&self.path).await?)
    }
}
