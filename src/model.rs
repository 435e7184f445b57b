use serde::{Deserialize, Serialize};
use std::fmt;

/// A single entry of the item catalog, as produced by the wiki scraper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    #[serde(default)]
    pub rarity: Rarity,
    /// Raw yield text such as `"2x Metal Parts, 1x Wires"`.
    #[serde(default)]
    pub recycles: String,
    /// Display-only; the catalog carries it as free text.
    #[serde(default)]
    pub sell_price: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep_for_workshop: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep_for_quests: Option<String>,
}

impl Item {
    /// Create an item with only the fields the lookup logic cares about.
    pub fn new(name: impl Into<String>, rarity: Rarity, recycles: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rarity,
            recycles: recycles.into(),
            sell_price: String::new(),
            category: String::new(),
            image: None,
            url: None,
            keep_for_workshop: None,
            keep_for_quests: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_sell_price(mut self, sell_price: impl Into<String>) -> Self {
        self.sell_price = sell_price.into();
        self
    }

    /// Parsed recycle yields, in the order they appear in `recycles`.
    pub fn yields(&self) -> Vec<MaterialQuantity> {
        crate::recycle::parse_recycles(&self.recycles)
    }

    pub fn is_recyclable(&self) -> bool {
        crate::recycle::is_recyclable(&self.recycles)
    }
}

/// Item rarity tier.
///
/// The scraped data contains the misspelling `Uncomon`, which is accepted as
/// an alias of `Uncommon`. Missing values and values outside the known set
/// become `Unknown`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    #[serde(alias = "Uncomon")]
    Uncommon,
    Rare,
    Epic,
    Legendary,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Rarity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
            Rarity::Unknown => "Unknown",
        }
    }

    /// Case-insensitive parse, accepting the `Uncomon` spelling and
    /// `unknown` itself.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "common" => Some(Rarity::Common),
            "uncommon" | "uncomon" => Some(Rarity::Uncommon),
            "rare" => Some(Rarity::Rare),
            "epic" => Some(Rarity::Epic),
            "legendary" => Some(Rarity::Legendary),
            "unknown" => Some(Rarity::Unknown),
            _ => None,
        }
    }
}

impl std::str::FromStr for Rarity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rarity::parse(s).ok_or_else(|| format!("unknown rarity '{}'", s))
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `(material, quantity)` pair from a recycle yield. Quantity is never zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaterialQuantity {
    pub material: String,
    pub quantity: u32,
}

impl MaterialQuantity {
    pub fn new(material: impl Into<String>, quantity: u32) -> Self {
        Self {
            material: material.into(),
            quantity,
        }
    }
}

impl fmt::Display for MaterialQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x {}", self.quantity, self.material)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_misspelled_rarity_is_uncommon() {
        let item: Item = serde_json::from_str(
            r#"{"name": "Toaster", "rarity": "Uncomon", "recycles": "1x Wires"}"#,
        )
        .unwrap();
        assert_eq!(item.rarity, Rarity::Uncommon);
    }

    #[test]
    fn test_unknown_rarity_does_not_fail() {
        let item: Item =
            serde_json::from_str(r#"{"name": "Odd", "rarity": "Mythic", "recycles": ""}"#).unwrap();
        assert_eq!(item.rarity, Rarity::Unknown);
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let item: Item = serde_json::from_str(r#"{"name": "Vase"}"#).unwrap();
        assert_eq!(item.rarity, Rarity::Unknown);
        assert!(item.recycles.is_empty());
        assert!(item.sell_price.is_empty());
        assert!(item.image.is_none());
        assert!(!item.is_recyclable());
    }

    #[test]
    fn test_rarity_parse() {
        assert_eq!(Rarity::parse("EPIC"), Some(Rarity::Epic));
        assert_eq!(Rarity::parse("uncomon"), Some(Rarity::Uncommon));
        assert_eq!(Rarity::parse("Unknown"), Some(Rarity::Unknown));
        assert_eq!(Rarity::parse("shiny"), None);
        assert!("shiny".parse::<Rarity>().is_err());
    }

    #[test]
    fn test_material_quantity_display() {
        assert_eq!(MaterialQuantity::new("Wires", 3).to_string(), "3x Wires");
    }
}
