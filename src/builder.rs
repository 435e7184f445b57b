use log::debug;
use std::path::PathBuf;
use std::time::Duration;

use crate::catalog::{self, Catalog, CatalogSource, DEFAULT_MAX_ITEMS};
use crate::config::{LookupConfig, SearchConfig};
use crate::i18n::{self, Language, TranslationTables};
use crate::index::SortPolicy;
use crate::model::Item;
use crate::session::LookupSession;
use crate::storage::{self, JsonFileStore, KeyValueStore, MemoryStore};
use crate::LookupError;

/// Where the catalog comes from
enum CatalogInput {
    /// URL or file path, resolved with [`catalog::source_for`]
    Location(String),
    /// Caller-provided source
    Source(Box<dyn CatalogSource>),
    /// Items already in memory
    Items(Vec<Item>),
}

/// Builder for configuring and loading a lookup session
pub struct MaterialLookupBuilder {
    input: Option<CatalogInput>,
    store: Option<Box<dyn KeyValueStore>>,
    language: Option<Language>,
    locale: Option<String>,
    translations: Option<TranslationTables>,
    translations_path: Option<PathBuf>,
    search: SearchConfig,
    sort_policy: SortPolicy,
    max_items: usize,
    timeout: Option<Duration>,
}

impl Default for MaterialLookupBuilder {
    fn default() -> Self {
        Self {
            input: None,
            store: None,
            language: None,
            locale: None,
            translations: None,
            translations_path: None,
            search: SearchConfig::default(),
            sort_policy: SortPolicy::default(),
            max_items: DEFAULT_MAX_ITEMS,
            timeout: None,
        }
    }
}

impl MaterialLookupBuilder {
    /// Load the catalog from a URL
    ///
    /// # Example
    /// ```
    /// use salvage_lookup::MaterialLookup;
    ///
    /// let builder = MaterialLookup::builder()
    ///     .url("https://example.com/items.json");
    /// ```
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.input = Some(CatalogInput::Location(url.into()));
        self
    }

    /// Load the catalog from a local JSON file
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        let path: PathBuf = path.into();
        self.input = Some(CatalogInput::Source(Box::new(
            catalog::FileCatalogSource::new(path),
        )));
        self
    }

    /// Load from a URL or a file path, decided by the scheme
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.input = Some(CatalogInput::Location(location.into()));
        self
    }

    /// Load the catalog from a custom source
    pub fn source(mut self, source: impl CatalogSource + 'static) -> Self {
        self.input = Some(CatalogInput::Source(Box::new(source)));
        self
    }

    /// Use items that are already loaded
    ///
    /// # Example
    /// ```
    /// use salvage_lookup::{Item, MaterialLookup, Rarity};
    ///
    /// let builder = MaterialLookup::builder()
    ///     .items(vec![Item::new("Toaster", Rarity::Common, "1x Wires")]);
    /// ```
    pub fn items(mut self, items: Vec<Item>) -> Self {
        self.input = Some(CatalogInput::Items(items));
        self
    }

    /// Persist selection and language in `store` (defaults to memory only)
    pub fn store(mut self, store: impl KeyValueStore + 'static) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    /// Force a display language, ignoring saved and detected values
    pub fn language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    /// Locale used for detection when no language is saved
    /// (defaults to the process environment)
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Extra translation tables, layered over the built-in ones
    pub fn translations(mut self, tables: TranslationTables) -> Self {
        self.translations = Some(tables);
        self
    }

    /// JSON file with extra translation tables, read during `build()`
    pub fn translations_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.translations_path = Some(path.into());
        self
    }

    pub fn search_config(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    pub fn sort_policy(mut self, policy: SortPolicy) -> Self {
        self.sort_policy = policy;
        self
    }

    /// Cap on catalog entries (default 1000)
    pub fn max_items(mut self, max_items: usize) -> Self {
        self.max_items = max_items;
        self
    }

    /// Timeout for HTTP catalog requests
    ///
    /// # Example
    /// ```
    /// use salvage_lookup::MaterialLookup;
    /// use std::time::Duration;
    ///
    /// let builder = MaterialLookup::builder()
    ///     .url("https://example.com/items.json")
    ///     .timeout(Duration::from_secs(10));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Apply every setting from a loaded configuration
    pub fn config(mut self, config: &LookupConfig) -> Self {
        self = self
            .location(config.catalog.source.clone())
            .max_items(config.catalog.max_items)
            .timeout(config.catalog.timeout())
            .search_config(config.search.clone())
            .sort_policy(config.ranking.sort_policy)
            .store(JsonFileStore::open(&config.storage.path));
        if let Some(language) = config.i18n.language {
            self = self.language(language);
        }
        if let Some(path) = &config.i18n.translations {
            self = self.translations_file(path);
        }
        self
    }

    /// Load the catalog and restore saved state
    ///
    /// # Errors
    /// Returns `LookupError` if:
    /// - No catalog source was specified
    /// - The catalog cannot be fetched or is not a JSON array
    /// - The translations file cannot be read
    ///
    /// # Example
    /// ```no_run
    /// # use salvage_lookup::MaterialLookup;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let session = MaterialLookup::builder()
    ///     .path("items.json")
    ///     .build()
    ///     .await?;
    /// println!("{} materials", session.materials().len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn build(self) -> Result<LookupSession, LookupError> {
        let input = self.input.ok_or_else(|| {
            LookupError::BuilderError(
                "No catalog source specified. Use .url(), .path() or .items()".to_string(),
            )
        })?;

        let catalog = match input {
            CatalogInput::Location(location) => {
                let source = catalog::source_for(&location, self.timeout);
                catalog::fetch_catalog(source.as_ref(), self.max_items).await?
            }
            CatalogInput::Source(source) => {
                catalog::fetch_catalog(source.as_ref(), self.max_items).await?
            }
            CatalogInput::Items(mut items) => {
                items.truncate(self.max_items);
                Catalog::new(items)
            }
        };

        let mut tables = TranslationTables::german();
        if let Some(path) = &self.translations_path {
            tables = tables.merge(TranslationTables::from_file(path)?);
        }
        if let Some(extra) = self.translations {
            tables = tables.merge(extra);
        }

        let store = self
            .store
            .unwrap_or_else(|| Box::new(MemoryStore::new()));

        let language = match self.language {
            Some(language) => language,
            None => {
                let locale = self.locale.or_else(i18n::env_locale);
                storage::load_language(store.as_ref(), locale.as_deref())
            }
        };
        let selection = storage::load_selection(store.as_ref());
        debug!(
            "Session ready: {} items, language {}, selection {:?}",
            catalog.len(),
            language,
            selection.material
        );

        Ok(LookupSession::new(
            catalog,
            tables,
            language,
            store,
            selection,
            self.search,
            self.sort_policy,
        ))
    }
}

/// Main entry point for the builder API
pub struct MaterialLookup;

impl MaterialLookup {
    /// Creates a new builder for a lookup session
    ///
    /// # Example
    /// ```
    /// use salvage_lookup::MaterialLookup;
    ///
    /// let builder = MaterialLookup::builder();
    /// ```
    pub fn builder() -> MaterialLookupBuilder {
        MaterialLookupBuilder::default()
    }
}
