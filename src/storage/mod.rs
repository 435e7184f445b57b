//! Persistence port for the user's selection and language preference.
//!
//! Stored state is best-effort: anything missing or corrupt is logged and
//! replaced by defaults, never surfaced as an error on read.

mod file;
mod memory;

pub use self::file::JsonFileStore;
pub use self::memory::MemoryStore;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::LookupError;
use crate::i18n::Language;

/// Key holding the JSON-encoded [`Selection`].
pub const SELECTION_KEY: &str = "arc-raiders-needed-materials";

/// Key holding the language tag.
pub const LANGUAGE_KEY: &str = "arc-raiders-language";

/// Minimal string key-value store.
pub trait KeyValueStore: Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), LookupError>;
    fn remove(&mut self, key: &str) -> Result<(), LookupError>;
}

/// The material the user is looking for and how much of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    #[serde(default)]
    pub material: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
}

impl Selection {
    pub fn new(material: impl Into<String>, quantity: u32) -> Self {
        Self {
            material: material.into(),
            quantity: Some(quantity.max(1)),
        }
    }

    /// Target quantity, at least 1.
    pub fn target(&self) -> u32 {
        self.quantity.unwrap_or(1).max(1)
    }

    pub fn is_empty(&self) -> bool {
        self.material.is_empty()
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            material: String::new(),
            quantity: Some(1),
        }
    }
}

/// Restore the saved selection. Each field is recovered on its own: a
/// string `material` and a positive integer `quantity` are kept, anything
/// else falls back to the default for that field.
pub fn load_selection(store: &dyn KeyValueStore) -> Selection {
    let Some(raw) = store.get(SELECTION_KEY) else {
        return Selection::default();
    };

    let value: Value = match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            warn!("Ignoring corrupt saved selection: {}", e);
            return Selection::default();
        }
    };

    let material = match value.get("material") {
        Some(Value::String(material)) => material.clone(),
        None | Some(Value::Null) => String::new(),
        Some(other) => {
            warn!("Ignoring saved material {}", other);
            String::new()
        }
    };
    let quantity = match value.get("quantity") {
        Some(raw) => raw
            .as_u64()
            .and_then(|q| u32::try_from(q).ok())
            .filter(|&q| q > 0)
            .unwrap_or_else(|| {
                debug!("Saved quantity {} is not a positive integer", raw);
                1
            }),
        None => 1,
    };

    Selection {
        material,
        quantity: Some(quantity),
    }
}

/// Persist `selection`. Empty selections are not written.
pub fn save_selection(
    store: &mut dyn KeyValueStore,
    selection: &Selection,
) -> Result<(), LookupError> {
    if selection.is_empty() {
        return Ok(());
    }
    let json = serde_json::to_string(selection)?;
    store.set(SELECTION_KEY, &json)
}

/// Saved language, or the one detected from `locale` when nothing valid is
/// stored.
pub fn load_language(store: &dyn KeyValueStore, locale: Option<&str>) -> Language {
    match store.get(LANGUAGE_KEY).map(|tag| tag.parse::<Language>()) {
        Some(Ok(lang)) => lang,
        Some(Err(e)) => {
            warn!("Ignoring saved language: {}", e);
            Language::detect(locale)
        }
        None => Language::detect(locale),
    }
}

pub fn save_language(store: &mut dyn KeyValueStore, lang: Language) -> Result<(), LookupError> {
    store.set(LANGUAGE_KEY, lang.tag())
}
