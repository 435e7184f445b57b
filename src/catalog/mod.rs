mod file;
mod http;

pub use self::file::FileCatalogSource;
pub use self::http::HttpCatalogSource;

use async_trait::async_trait;
use log::{debug, info, warn};
use serde_json::Value;
use std::time::Duration;

use crate::error::LookupError;
use crate::index::{MaterialIndex, ProducingItem, SortPolicy};
use crate::model::Item;

/// Upper bound on catalog entries kept from a single payload.
pub const DEFAULT_MAX_ITEMS: usize = 1000;

/// Where the raw catalog JSON comes from.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Human-readable location, used in logs and error messages.
    fn describe(&self) -> String;

    /// Fetch the raw catalog body.
    async fn fetch(&self) -> Result<String, LookupError>;
}

/// Pick a source for `location`: `http(s)://` URLs go over the network,
/// anything else is read from disk.
pub fn source_for(location: &str, timeout: Option<Duration>) -> Box<dyn CatalogSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpCatalogSource::new(location, timeout))
    } else {
        Box::new(FileCatalogSource::new(location))
    }
}

/// Validate and decode a catalog payload.
///
/// The top level must be a JSON array; anything else is rejected. Only the
/// first `max_items` entries are kept, and entries that do not decode as an
/// [`Item`] are skipped.
pub fn parse_catalog(body: &str, max_items: usize) -> Result<Vec<Item>, LookupError> {
    let value: Value = serde_json::from_str(body)?;
    let Value::Array(entries) = value else {
        return Err(LookupError::InvalidCatalog(
            "expected a JSON array of items".to_string(),
        ));
    };

    if entries.len() > max_items {
        warn!(
            "Catalog has {} entries, keeping the first {}",
            entries.len(),
            max_items
        );
    }

    let mut items = Vec::with_capacity(entries.len().min(max_items));
    for (position, entry) in entries.into_iter().take(max_items).enumerate() {
        match serde_json::from_value::<Item>(entry) {
            Ok(item) => items.push(item),
            Err(e) => warn!("Skipping catalog entry {}: {}", position, e),
        }
    }

    Ok(items)
}

/// Fetch and decode a catalog from `source`.
pub async fn fetch_catalog(
    source: &dyn CatalogSource,
    max_items: usize,
) -> Result<Catalog, LookupError> {
    info!("Loading catalog from {}", source.describe());
    let body = source.fetch().await?;
    debug!("Fetched {} bytes", body.len());

    let items = parse_catalog(&body, max_items)?;
    info!("Items loaded: {}", items.len());
    Ok(Catalog::new(items))
}

/// Fetch a catalog and fold the outcome into a [`LoadState`].
pub async fn load(source: &dyn CatalogSource, max_items: usize) -> LoadState {
    match fetch_catalog(source, max_items).await {
        Ok(catalog) => LoadState::Ready(catalog),
        Err(e) => {
            log::error!("Failed to load items: {}", e);
            LoadState::Failed(e.to_string())
        }
    }
}

/// Presentation state of the one-time catalog load.
#[derive(Debug, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready(Catalog),
    Failed(String),
}

impl LoadState {
    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready(_))
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        match self {
            LoadState::Ready(catalog) => Some(catalog),
            _ => None,
        }
    }

    pub fn into_result(self) -> Result<Catalog, LookupError> {
        match self {
            LoadState::Ready(catalog) => Ok(catalog),
            LoadState::Failed(message) => Err(LookupError::InvalidCatalog(message)),
            LoadState::Loading => Err(LookupError::InvalidCatalog(
                "catalog is still loading".to_string(),
            )),
        }
    }
}

/// A loaded catalog together with its material index.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
    index: MaterialIndex,
}

impl Catalog {
    pub fn new(items: Vec<Item>) -> Self {
        let index = MaterialIndex::build(&items);
        Self { items, index }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn index(&self) -> &MaterialIndex {
        &self.index
    }

    /// Sorted unique material names.
    pub fn materials(&self) -> &[String] {
        self.index.vocabulary()
    }

    pub fn item(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Items that recycle into `material`, ranked by `policy`.
    pub fn producing(
        &self,
        material: &str,
        policy: SortPolicy,
        target: u32,
    ) -> Vec<ProducingItem<'_>> {
        self.index.lookup(&self.items, material, policy, target)
    }
}
