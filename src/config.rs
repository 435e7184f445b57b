use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

use crate::catalog::DEFAULT_MAX_ITEMS;
use crate::i18n::Language;
use crate::index::SortPolicy;
use crate::search::{DEFAULT_MAX_QUERY_LEN, DEFAULT_MAX_RESULTS, DEFAULT_MIN_QUERY_LEN};

/// Top-level configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct LookupConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub ranking: RankingConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub i18n: I18nConfig,
}

/// Where the item catalog is loaded from
#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// URL (`http://`, `https://`) or local file path
    #[serde(default = "default_catalog_source")]
    pub source: String,
    /// Entries beyond this count are dropped
    #[serde(default = "default_max_items")]
    pub max_items: usize,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl CatalogConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source: default_catalog_source(),
            max_items: default_max_items(),
            timeout: default_timeout(),
        }
    }
}

/// Autocomplete and live resolution tuning
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Maximum autocomplete entries
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    /// Characters required before live resolution runs
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,
    /// Delay after the last keystroke, in milliseconds
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Longer queries are truncated
    #[serde(default = "default_max_query_len")]
    pub max_query_len: usize,
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
            min_query_len: default_min_query_len(),
            debounce_ms: default_debounce_ms(),
            max_query_len: default_max_query_len(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct RankingConfig {
    #[serde(default)]
    pub sort_policy: SortPolicy,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// JSON file holding the saved selection and language
    #[serde(default = "default_storage_path")]
    pub path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct I18nConfig {
    /// Forces a language instead of the saved or detected one
    pub language: Option<Language>,
    /// Optional JSON file with extra translation tables
    pub translations: Option<String>,
}

// Default value functions
fn default_catalog_source() -> String {
    "items.json".to_string()
}

fn default_max_items() -> usize {
    DEFAULT_MAX_ITEMS
}

fn default_timeout() -> u64 {
    30
}

fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

fn default_min_query_len() -> usize {
    DEFAULT_MIN_QUERY_LEN
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_max_query_len() -> usize {
    DEFAULT_MAX_QUERY_LEN
}

fn default_storage_path() -> String {
    "salvage-state.json".to_string()
}

impl LookupConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with SALVAGE__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: SALVAGE__CATALOG__SOURCE
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`LookupConfig::load`] for the source priority.
pub fn load_config() -> Result<LookupConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Use double underscore for nested: SALVAGE__SEARCH__MAX_RESULTS
        .add_source(
            Environment::with_prefix("SALVAGE")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = LookupConfig::default();
        assert_eq!(config.catalog.source, "items.json");
        assert_eq!(config.catalog.max_items, 1000);
        assert_eq!(config.catalog.timeout(), Duration::from_secs(30));
        assert_eq!(config.search.max_results, 10);
        assert_eq!(config.search.min_query_len, 2);
        assert_eq!(config.search.debounce(), Duration::from_millis(300));
        assert_eq!(config.search.max_query_len, 50);
        assert_eq!(config.ranking.sort_policy, SortPolicy::YieldDesc);
        assert_eq!(config.storage.path, "salvage-state.json");
        assert!(config.i18n.language.is_none());
    }

    #[test]
    fn test_deserialize_partial_toml() {
        let config: LookupConfig = Config::builder()
            .add_source(File::from_str(
                r#"
                [catalog]
                source = "https://example.com/items.json"

                [search]
                max_results = 15

                [ranking]
                sort_policy = "yield_desc_then_items_needed"

                [i18n]
                language = "de"
                "#,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.catalog.source, "https://example.com/items.json");
        assert_eq!(config.catalog.max_items, 1000);
        assert_eq!(config.search.max_results, 15);
        assert_eq!(config.search.min_query_len, 2);
        assert_eq!(
            config.ranking.sort_policy,
            SortPolicy::YieldDescThenItemsNeeded
        );
        assert_eq!(config.i18n.language, Some(Language::De));
    }

    #[test]
    fn test_load_config_without_file() {
        // No config.toml in the crate root, so every section falls back to defaults
        let result = load_config();
        assert!(result.is_ok());
    }
}
