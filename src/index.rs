//! Material vocabulary and reverse lookup (material → producing items).

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

use crate::model::{Item, MaterialQuantity};
use crate::recycle::parse_recycles;

/// Ordering applied to reverse-lookup results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortPolicy {
    /// Highest yield first, ties kept in catalog order.
    #[default]
    YieldDesc,
    /// Highest yield first, then fewest items needed, then catalog order.
    YieldDescThenItemsNeeded,
    /// Catalog order, unsorted.
    Catalog,
}

impl SortPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortPolicy::YieldDesc => "yield_desc",
            SortPolicy::YieldDescThenItemsNeeded => "yield_desc_then_items_needed",
            SortPolicy::Catalog => "catalog",
        }
    }
}

impl std::str::FromStr for SortPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "yield_desc" | "yield" => Ok(SortPolicy::YieldDesc),
            "yield_desc_then_items_needed" | "items_needed" => {
                Ok(SortPolicy::YieldDescThenItemsNeeded)
            }
            "catalog" => Ok(SortPolicy::Catalog),
            other => Err(format!("unknown sort policy '{}'", other)),
        }
    }
}

/// An item that yields the queried material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProducingItem<'a> {
    pub item: &'a Item,
    /// Units of the material one recycled item yields.
    pub quantity: u32,
    /// Items to recycle to reach the requested target.
    pub items_needed: u32,
}

/// Number of items to recycle to collect `target` units when each item
/// yields `per_item_yield`. Returns `None` only for a zero yield.
pub fn items_needed(target: u32, per_item_yield: u32) -> Option<u32> {
    if per_item_yield == 0 {
        return None;
    }
    Some(target.div_ceil(per_item_yield))
}

/// Sorted, deduplicated material names across all items.
pub fn unique_materials(items: &[Item]) -> Vec<String> {
    items
        .iter()
        .flat_map(|item| parse_recycles(&item.recycles))
        .map(|m| m.material)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// One-shot reverse lookup without building an index.
pub fn find_producing_items<'a>(
    items: &'a [Item],
    material: &str,
    policy: SortPolicy,
    target: u32,
) -> Vec<ProducingItem<'a>> {
    MaterialIndex::build(items).lookup(items, material, policy, target)
}

/// Precomputed yields for a catalog.
///
/// Items are referenced by position, so the index must be queried with the
/// same slice it was built from.
#[derive(Debug, Clone, Default)]
pub struct MaterialIndex {
    yields: Vec<Vec<MaterialQuantity>>,
    vocabulary: Vec<String>,
    producers: HashMap<String, Vec<(usize, u32)>>,
}

impl MaterialIndex {
    pub fn build(items: &[Item]) -> Self {
        let yields: Vec<Vec<MaterialQuantity>> =
            items.iter().map(|item| parse_recycles(&item.recycles)).collect();

        let mut producers: HashMap<String, Vec<(usize, u32)>> = HashMap::new();
        for (position, item_yields) in yields.iter().enumerate() {
            for yield_ in item_yields {
                let entry = producers.entry(yield_.material.clone()).or_default();
                // first occurrence wins when an item lists a material twice
                if entry.last().map(|(p, _)| *p) != Some(position) {
                    entry.push((position, yield_.quantity));
                }
            }
        }

        let mut vocabulary: Vec<String> = producers.keys().cloned().collect();
        vocabulary.sort();

        Self {
            yields,
            vocabulary,
            producers,
        }
    }

    /// Sorted unique material names.
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Parsed yields of the item at `position`.
    pub fn yields_of(&self, position: usize) -> &[MaterialQuantity] {
        self.yields.get(position).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, material: &str) -> bool {
        self.producers.contains_key(material)
    }

    /// Items whose yields include `material` (exact, case-sensitive match),
    /// ordered by `policy`. `target` feeds the items-needed column and is
    /// clamped to at least 1.
    pub fn lookup<'a>(
        &self,
        items: &'a [Item],
        material: &str,
        policy: SortPolicy,
        target: u32,
    ) -> Vec<ProducingItem<'a>> {
        let target = target.max(1);
        let Some(producers) = self.producers.get(material) else {
            return Vec::new();
        };

        let mut results: Vec<ProducingItem<'a>> = producers
            .iter()
            .filter_map(|&(position, quantity)| {
                let item = items.get(position)?;
                let items_needed = items_needed(target, quantity)?;
                Some(ProducingItem {
                    item,
                    quantity,
                    items_needed,
                })
            })
            .collect();

        // sort_by is stable, so equal keys stay in catalog order
        match policy {
            SortPolicy::YieldDesc => results.sort_by(|a, b| b.quantity.cmp(&a.quantity)),
            SortPolicy::YieldDescThenItemsNeeded => results.sort_by(|a, b| {
                b.quantity
                    .cmp(&a.quantity)
                    .then(a.items_needed.cmp(&b.items_needed))
            }),
            SortPolicy::Catalog => {}
        }

        results
    }
}
