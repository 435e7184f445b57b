//! Parser for the free-form `recycles` field of catalog items.
//!
//! The scraped text looks like `"2x Metal Parts, 1x Wires"`, but separators
//! are not reliable: some entries run two tokens together with only
//! whitespace between them (`"1x Wires 2x Metal Parts"`). Instead of
//! splitting on commas, the parser scans for quantity markers and lets each
//! material name run up to the next marker, a comma, or the end of the text.

use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::MaterialQuantity;

/// Sentinel the catalog uses for items that yield nothing.
pub const NOT_RECYCLABLE: &str = "Cannot be recycled";

// No word boundary before the digits: a marker glued to the previous name
// (`"1x Wires2x Oil"`) still starts a new token.
static QUANTITY_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s*[xX]\s+").expect("quantity marker regex is valid"));

/// Whether a `recycles` value describes any yield at all.
pub fn is_recyclable(recycles: &str) -> bool {
    let trimmed = recycles.trim();
    !trimmed.is_empty() && !trimmed.eq_ignore_ascii_case(NOT_RECYCLABLE)
}

/// Parse a `recycles` string into `(material, quantity)` pairs.
///
/// Never fails: malformed tokens, empty names and zero or overflowing
/// quantities are skipped, so the worst case is an empty vector. Pairs are
/// returned in order of appearance.
pub fn parse_recycles(recycles: &str) -> Vec<MaterialQuantity> {
    if !is_recyclable(recycles) {
        return Vec::new();
    }

    let markers: Vec<_> = QUANTITY_MARKER.captures_iter(recycles).collect();
    let mut materials = Vec::with_capacity(markers.len());

    for (i, caps) in markers.iter().enumerate() {
        let (Some(marker), Some(digits)) = (caps.get(0), caps.get(1)) else {
            continue;
        };

        let name_end = markers
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map_or(recycles.len(), |next| next.start());
        let segment = &recycles[marker.end()..name_end];
        let name = segment.split(',').next().unwrap_or("").trim();

        let quantity = match digits.as_str().parse::<u32>() {
            Ok(q) if q > 0 => q,
            _ => {
                trace!("Skipping token with unusable quantity: {:?}", marker.as_str());
                continue;
            }
        };

        if name.is_empty() {
            trace!("Skipping token without material name in {:?}", recycles);
            continue;
        }

        materials.push(MaterialQuantity::new(name, quantity));
    }

    materials
}
