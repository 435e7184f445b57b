use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use std::time::Duration;

use super::CatalogSource;
use crate::error::LookupError;

/// Loads the catalog with a single GET request. No retries.
pub struct HttpCatalogSource {
    url: String,
    timeout: Duration,
}

impl HttpCatalogSource {
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Self {
        Self {
            url: url.into(),
            timeout: timeout.unwrap_or(Duration::from_secs(30)),
        }
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<String, LookupError> {
        let client = Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("salvage-lookup/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let response = client.get(&self.url).send().await?.error_for_status()?;
        debug!("Catalog response status: {}", response.status());
        Ok(response.text().await?)
    }
}
