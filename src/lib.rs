//! Find which items recycle into the materials you need.
//!
//! The crate parses the free-form `recycles` text of a game item catalog into
//! `(material, quantity)` pairs and builds the views on top of it: the
//! material vocabulary, a reverse index from material to producing items,
//! fuzzy autocomplete with live resolution, and localized display names.
//!
//! # Example
//! ```
//! use salvage_lookup::{Catalog, Item, Rarity, SortPolicy};
//!
//! let catalog = Catalog::new(vec![
//!     Item::new("Toaster", Rarity::Common, "1x Wires, 2x Metal Parts"),
//!     Item::new("Radio", Rarity::Uncommon, "3x Wires"),
//! ]);
//!
//! let results = catalog.producing("Wires", SortPolicy::YieldDesc, 5);
//! assert_eq!(results[0].item.name, "Radio");
//! assert_eq!(results[0].items_needed, 2);
//! ```

pub mod builder;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod i18n;
pub mod index;
pub mod model;
pub mod recycle;
pub mod search;
pub mod session;
pub mod storage;
pub mod uniffi_bindings;

use std::time::Duration;

pub use builder::{MaterialLookup, MaterialLookupBuilder};
pub use catalog::{Catalog, CatalogSource, LoadState};
pub use config::LookupConfig;
pub use error::LookupError;
pub use filter::{ItemFilter, ItemState, RecyclePlan};
pub use i18n::{Language, NameKind, TranslationTables};
pub use index::{items_needed, MaterialIndex, ProducingItem, SortPolicy};
pub use model::{Item, MaterialQuantity, Rarity};
pub use recycle::{parse_recycles, NOT_RECYCLABLE};
pub use search::{Candidate, MatchTier, RankedMatch, Resolution};
pub use session::LookupSession;

/// Load a catalog from a URL or file path with default limits.
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let catalog = salvage_lookup::load_catalog("items.json").await?;
/// println!("{} materials", catalog.materials().len());
/// # Ok(())
/// # }
/// ```
pub async fn load_catalog(location: &str) -> Result<Catalog, LookupError> {
    load_catalog_with_timeout(location, None).await
}

/// Like [`load_catalog`], with an explicit HTTP timeout.
pub async fn load_catalog_with_timeout(
    location: &str,
    timeout: Option<Duration>,
) -> Result<Catalog, LookupError> {
    let source = catalog::source_for(location, timeout);
    catalog::fetch_catalog(source.as_ref(), catalog::DEFAULT_MAX_ITEMS).await
}

/// Sorted unique material names of a catalog JSON payload.
pub fn materials_from_json(json: &str) -> Result<Vec<String>, LookupError> {
    let items = catalog::parse_catalog(json, catalog::DEFAULT_MAX_ITEMS)?;
    Ok(index::unique_materials(&items))
}
