/// Inventory aggregation for crafting checks
use super::names::{denormalize, normalize, split_fine_suffix, FINE_PREFIX};
use super::types::{Character, ItemCounts, MaterialStock};
use log::debug;
use serde::Serialize;
use std::collections::BTreeMap;

// ============================================================================
// Aggregated Inventory
// ============================================================================

/// Inventory and bank merged into per-material totals, split by quality tier.
///
/// Keys are normalized display names of the *base* material, so `coal` and
/// `coal_fine` both land on `Coal`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AggregatedInventory {
    materials: BTreeMap<String, MaterialStock>,
}

impl AggregatedInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` of a raw item key to the matching tier counter.
    pub fn add_raw(&mut self, raw_key: &str, quantity: u64) {
        let (base, fine) = split_fine_suffix(raw_key);
        let stock = self.materials.entry(normalize(base)).or_default();
        if fine {
            stock.fine = stock.fine.saturating_add(quantity);
        } else {
            stock.normal = stock.normal.saturating_add(quantity);
        }
    }

    /// Exact lookup by normalized base name.
    pub fn get(&self, name: &str) -> Option<&MaterialStock> {
        self.materials.get(name)
    }

    /// Lenient lookup used when matching catalog material names.
    ///
    /// Tries the exact name, then a `Fine <base>` name as the fine tier of
    /// `<base>` when that tier holds stock, then any entries whose underscore
    /// key matches. Unknown names resolve to an empty stock.
    pub fn stock_for(&self, name: &str) -> MaterialStock {
        if let Some(stock) = self.materials.get(name) {
            return *stock;
        }
        if let Some(base) = name.strip_prefix(FINE_PREFIX) {
            if let Some(stock) = self.materials.get(base).filter(|s| s.fine > 0) {
                return MaterialStock {
                    normal: 0,
                    fine: stock.fine,
                };
            }
        }
        let key = denormalize(name);
        self.materials
            .iter()
            .filter(|(display, _)| denormalize(display) == key)
            .fold(MaterialStock::default(), |acc, (_, stock)| MaterialStock {
                normal: acc.normal.saturating_add(stock.normal),
                fine: acc.fine.saturating_add(stock.fine),
            })
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

// ============================================================================
// Aggregation
// ============================================================================

/// Merge inventory then bank into one accumulator. Where an item sits is not
/// retained.
pub fn aggregate(inventory: &ItemCounts, bank: &ItemCounts) -> AggregatedInventory {
    let mut aggregated = AggregatedInventory::new();
    for (key, quantity) in inventory.iter().chain(bank.iter()) {
        aggregated.add_raw(key, *quantity);
    }
    debug!(
        "aggregated {} inventory + {} bank keys into {} materials",
        inventory.len(),
        bank.len(),
        aggregated.len()
    );
    aggregated
}

pub fn aggregate_character(character: &Character) -> AggregatedInventory {
    aggregate(&character.inventory, &character.bank)
}

// ============================================================================
// Unit Tests
// ============================================================================
