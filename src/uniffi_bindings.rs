//! UniFFI bindings for salvage-lookup
//!
//! This module provides FFI-compatible types and functions for use with iOS and Android.
//! Catalog-based calls take the raw catalog JSON so the host app can cache it however
//! it likes; the network fetch wraps the async API in its own tokio runtime.

use std::fmt;
use std::time::Duration;

use crate::catalog::{parse_catalog, Catalog, DEFAULT_MAX_ITEMS};
use crate::index::SortPolicy;
use crate::search::{rank_materials, Candidate, MatchTier, DEFAULT_MAX_RESULTS};
use crate::{Item, LookupError, MaterialQuantity};

// Re-export UniFFI macro
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

/// FFI-compatible catalog item
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiItem {
    pub name: String,
    /// Rarity name, with the `Uncomon` spelling normalized
    pub rarity: String,
    pub recycles: String,
    pub sell_price: String,
    pub category: String,
    /// Image URL (empty string if none)
    pub image: String,
}

impl From<&Item> for FfiItem {
    fn from(item: &Item) -> Self {
        FfiItem {
            name: item.name.clone(),
            rarity: item.rarity.to_string(),
            recycles: item.recycles.clone(),
            sell_price: item.sell_price.clone(),
            category: item.category.clone(),
            image: item.image.clone().unwrap_or_default(),
        }
    }
}

/// FFI-compatible recycle yield
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiMaterialQuantity {
    pub material: String,
    pub quantity: u32,
}

impl From<MaterialQuantity> for FfiMaterialQuantity {
    fn from(m: MaterialQuantity) -> Self {
        FfiMaterialQuantity {
            material: m.material,
            quantity: m.quantity,
        }
    }
}

/// FFI-compatible reverse lookup row
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiProducingItem {
    pub item: FfiItem,
    pub quantity: u32,
    pub items_needed: u32,
}

/// FFI-compatible sort policy
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum FfiSortPolicy {
    YieldDesc,
    YieldDescThenItemsNeeded,
    Catalog,
}

impl From<FfiSortPolicy> for SortPolicy {
    fn from(policy: FfiSortPolicy) -> Self {
        match policy {
            FfiSortPolicy::YieldDesc => SortPolicy::YieldDesc,
            FfiSortPolicy::YieldDescThenItemsNeeded => SortPolicy::YieldDescThenItemsNeeded,
            FfiSortPolicy::Catalog => SortPolicy::Catalog,
        }
    }
}

/// FFI-compatible match tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum FfiMatchTier {
    Exact,
    Prefix,
    Substring,
    Subsequence,
}

impl From<MatchTier> for FfiMatchTier {
    fn from(tier: MatchTier) -> Self {
        match tier {
            MatchTier::Exact => FfiMatchTier::Exact,
            MatchTier::Prefix => FfiMatchTier::Prefix,
            MatchTier::Substring => FfiMatchTier::Substring,
            MatchTier::Subsequence => FfiMatchTier::Subsequence,
        }
    }
}

/// FFI-compatible autocomplete entry
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiMatch {
    pub material: String,
    pub tier: FfiMatchTier,
}

/// FFI-compatible error type
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum FfiLookupError {
    /// Failed to fetch the catalog
    FetchError { message: String },
    /// Catalog payload was not a JSON array of items
    InvalidCatalog { message: String },
    /// Local IO or storage failure
    StorageError { message: String },
    /// Configuration or builder error
    ConfigError { message: String },
    /// Runtime error (tokio)
    RuntimeError { message: String },
}

impl fmt::Display for FfiLookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FfiLookupError::FetchError { message } => write!(f, "Fetch error: {}", message),
            FfiLookupError::InvalidCatalog { message } => {
                write!(f, "Invalid catalog: {}", message)
            }
            FfiLookupError::StorageError { message } => write!(f, "Storage error: {}", message),
            FfiLookupError::ConfigError { message } => write!(f, "Config error: {}", message),
            FfiLookupError::RuntimeError { message } => write!(f, "Runtime error: {}", message),
        }
    }
}

impl std::error::Error for FfiLookupError {}

impl From<LookupError> for FfiLookupError {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::FetchError(e) => FfiLookupError::FetchError {
                message: e.to_string(),
            },
            LookupError::InvalidCatalog(msg) => FfiLookupError::InvalidCatalog { message: msg },
            LookupError::JsonError(e) => FfiLookupError::InvalidCatalog {
                message: e.to_string(),
            },
            LookupError::IoError(e) => FfiLookupError::StorageError {
                message: e.to_string(),
            },
            LookupError::StorageError(msg) => FfiLookupError::StorageError { message: msg },
            LookupError::BuilderError(msg) => FfiLookupError::ConfigError { message: msg },
            LookupError::ConfigError(e) => FfiLookupError::ConfigError {
                message: e.to_string(),
            },
        }
    }
}

fn catalog_from_json(catalog_json: &str) -> Result<Catalog, FfiLookupError> {
    Ok(Catalog::new(parse_catalog(catalog_json, DEFAULT_MAX_ITEMS)?))
}

/// Create a new tokio runtime for FFI calls
fn create_runtime() -> Result<tokio::runtime::Runtime, FfiLookupError> {
    tokio::runtime::Runtime::new().map_err(|e| FfiLookupError::RuntimeError {
        message: format!("Failed to create async runtime: {}", e),
    })
}

/// Parse a `recycles` string such as `"2x Metal Parts, 1x Wires"`
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn parse_recycle_string(text: String) -> Vec<FfiMaterialQuantity> {
    crate::parse_recycles(&text)
        .into_iter()
        .map(FfiMaterialQuantity::from)
        .collect()
}

/// Sorted unique materials of a catalog
///
/// # Arguments
/// * `catalog_json` - The catalog as a JSON array of items
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn catalog_materials(catalog_json: String) -> Result<Vec<String>, FfiLookupError> {
    Ok(crate::materials_from_json(&catalog_json)?)
}

/// Items that recycle into `material`
///
/// # Arguments
/// * `catalog_json` - The catalog as a JSON array of items
/// * `material` - Exact material name
/// * `target` - Desired quantity, used for the items-needed column (defaults to 1)
/// * `policy` - Ordering of the results (defaults to yield descending)
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn catalog_lookup(
    catalog_json: String,
    material: String,
    target: Option<u32>,
    policy: Option<FfiSortPolicy>,
) -> Result<Vec<FfiProducingItem>, FfiLookupError> {
    let catalog = catalog_from_json(&catalog_json)?;
    let policy = policy.map(SortPolicy::from).unwrap_or_default();

    Ok(catalog
        .producing(&material, policy, target.unwrap_or(1))
        .into_iter()
        .map(|row| FfiProducingItem {
            item: row.item.into(),
            quantity: row.quantity,
            items_needed: row.items_needed,
        })
        .collect())
}

/// Ranked autocomplete entries for `query`
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn catalog_suggest(
    catalog_json: String,
    query: String,
    limit: Option<u32>,
) -> Result<Vec<FfiMatch>, FfiLookupError> {
    let catalog = catalog_from_json(&catalog_json)?;
    let candidates: Vec<Candidate> = catalog
        .materials()
        .iter()
        .map(|m| Candidate::plain(m.as_str()))
        .collect();
    let query = crate::search::sanitize_query(&query, crate::search::DEFAULT_MAX_QUERY_LEN);
    let limit = limit.map_or(DEFAULT_MAX_RESULTS, |l| l as usize);

    Ok(rank_materials(&query, &candidates, limit)
        .into_iter()
        .map(|m| FfiMatch {
            material: m.material,
            tier: m.tier.into(),
        })
        .collect())
}

/// Fetch a catalog from a URL and return its items
///
/// # Arguments
/// * `url` - Location of the catalog JSON
/// * `timeout_seconds` - Optional timeout in seconds
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn fetch_catalog_from_url(
    url: String,
    timeout_seconds: Option<u64>,
) -> Result<Vec<FfiItem>, FfiLookupError> {
    let rt = create_runtime()?;
    rt.block_on(async {
        let timeout = timeout_seconds.map(Duration::from_secs);
        let catalog = crate::load_catalog_with_timeout(&url, timeout).await?;
        Ok::<_, FfiLookupError>(catalog.items().iter().map(FfiItem::from).collect())
    })
}
