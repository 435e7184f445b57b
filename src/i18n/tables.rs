use log::debug;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use super::Language;
use crate::error::LookupError;

/// Which table a name is looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameKind {
    Item,
    Material,
    Category,
    Rarity,
}

/// English → German name tables.
///
/// Extra tables can be loaded from JSON shaped like
/// `{"items": {...}, "materials": {...}, "categories": {...}, "rarities": {...}}`;
/// every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TranslationTables {
    #[serde(default)]
    pub items: HashMap<String, String>,
    #[serde(default)]
    pub materials: HashMap<String, String>,
    #[serde(default)]
    pub categories: HashMap<String, String>,
    #[serde(default)]
    pub rarities: HashMap<String, String>,
}

const GERMAN_CATEGORIES: &[(&str, &str)] = &[
    ("Misc", "Verschiedenes"),
    ("Refined Material", "Raffiniertes Material"),
    ("Nature", "Natur"),
    ("Quick Use", "Schnellverwendung"),
    ("Trinket", "Kuriosität"),
    ("Recyclable", "Recycelbar"),
    ("Topside Material", "Oberflächenmaterial"),
];

const GERMAN_RARITIES: &[(&str, &str)] = &[
    ("Common", "Gewöhnlich"),
    ("Uncommon", "Ungewöhnlich"),
    ("Rare", "Selten"),
    ("Epic", "Episch"),
    ("Legendary", "Legendär"),
    ("Uncomon", "Ungewöhnlich"),
];

fn to_map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(en, de)| (en.to_string(), de.to_string()))
        .collect()
}

impl TranslationTables {
    /// Built-in German tables. Item and material names ship empty and are
    /// expected to come from a translations file.
    pub fn german() -> Self {
        Self {
            items: HashMap::new(),
            materials: HashMap::new(),
            categories: to_map(GERMAN_CATEGORIES),
            rarities: to_map(GERMAN_RARITIES),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, LookupError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, LookupError> {
        let json = std::fs::read_to_string(path)?;
        let tables = Self::from_json(&json)?;
        debug!(
            "Loaded translations from {}: {} items, {} materials",
            path.display(),
            tables.items.len(),
            tables.materials.len()
        );
        Ok(tables)
    }

    /// Overlay `other` on top of `self`; entries in `other` win.
    pub fn merge(mut self, other: TranslationTables) -> Self {
        self.items.extend(other.items);
        self.materials.extend(other.materials);
        self.categories.extend(other.categories);
        self.rarities.extend(other.rarities);
        self
    }

    fn table(&self, kind: NameKind) -> &HashMap<String, String> {
        match kind {
            NameKind::Item => &self.items,
            NameKind::Material => &self.materials,
            NameKind::Category => &self.categories,
            NameKind::Rarity => &self.rarities,
        }
    }

    /// Display name for `name` in `lang`. Names without an entry, and every
    /// name in the source language, come back unchanged.
    pub fn translate<'a>(&'a self, name: &'a str, kind: NameKind, lang: Language) -> &'a str {
        if lang == Language::SOURCE {
            return name;
        }
        self.table(kind).get(name).map(String::as_str).unwrap_or(name)
    }
}
