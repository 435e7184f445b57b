//! Item browsing: text search, category and rarity filters, and inventory
//! based recycle plans.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::model::{Item, MaterialQuantity, Rarity};

/// Filters for the item list. Unset fields match every item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFilter {
    /// Case-insensitive substring of the item name.
    pub search: Option<String>,
    /// Exact category label.
    pub category: Option<String>,
    pub rarity: Option<Rarity>,
}

impl ItemFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.search = if text.trim().is_empty() {
            None
        } else {
            Some(text.trim().to_lowercase())
        };
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = Some(rarity);
        self
    }

    pub fn matches(&self, item: &Item) -> bool {
        if let Some(search) = &self.search {
            if !item.name.to_lowercase().contains(search.as_str()) {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if &item.category != category {
                return false;
            }
        }
        if let Some(rarity) = self.rarity {
            if item.rarity != rarity {
                return false;
            }
        }
        true
    }

    /// Matching items, in catalog order.
    pub fn apply<'a>(&self, items: &'a [Item]) -> Vec<&'a Item> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}

/// Distinct non-empty categories, sorted.
pub fn categories(items: &[Item]) -> Vec<String> {
    items
        .iter()
        .filter(|item| !item.category.is_empty())
        .map(|item| item.category.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct rarities present in the catalog, in tier order.
pub fn rarities(items: &[Item]) -> Vec<Rarity> {
    items
        .iter()
        .map(|item| item.rarity)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// How many of an item the player wants to keep versus holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemState {
    pub needed: u32,
    pub have: u32,
}

/// Surplus copies of an item that can be recycled, and what they give.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecyclePlan {
    pub count: u32,
    /// Total yield of recycling `count` copies.
    pub yields: Vec<MaterialQuantity>,
}

/// Recycle everything above what is needed. `None` when there is no surplus
/// or the item does not recycle into anything.
pub fn recycle_plan(item: &Item, state: ItemState) -> Option<RecyclePlan> {
    if state.have <= state.needed {
        return None;
    }
    let count = state.have - state.needed;

    let yields: Vec<MaterialQuantity> = item
        .yields()
        .into_iter()
        .map(|m| MaterialQuantity::new(m.material, m.quantity.saturating_mul(count)))
        .collect();
    if yields.is_empty() {
        return None;
    }

    Some(RecyclePlan { count, yields })
}
