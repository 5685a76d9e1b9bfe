//! Per-recipe craftability.
//!
//! A recipe is first checked against the character's profession level. Only
//! when the level gate passes are materials counted, and then the craftable
//! count per tier is the tightest `stock / amount` ratio across materials.

use super::inventory::{aggregate_character, AggregatedInventory};
use super::levels::skill_levels;
use super::types::{Character, CraftingFeasibility, MaterialShortfall, Recipe};
use log::debug;
use std::collections::BTreeMap;

/// Evaluate one recipe against aggregated stock and resolved skill levels
/// (keyed by lowercase profession name).
pub fn evaluate(
    recipe: &Recipe,
    inventory: &AggregatedInventory,
    skill_levels: &BTreeMap<String, u32>,
) -> CraftingFeasibility {
    if let Some(profession) = &recipe.requirements.profession {
        let current = skill_levels
            .get(&profession.name.to_lowercase())
            .copied()
            .unwrap_or(0);
        if current < profession.level {
            return CraftingFeasibility::level_gated(profession.level - current);
        }
    }

    let materials = &recipe.requirements.materials;
    if materials.is_empty() {
        return CraftingFeasibility::from_counts(0, 0);
    }

    let (mut normal, mut fine) = (u64::MAX, u64::MAX);
    for material in materials {
        let stock = inventory.stock_for(&material.name);
        let amount = u64::from(material.amount);
        // Zero amounts are rejected at import; count them as unsatisfiable here.
        normal = normal.min(stock.normal.checked_div(amount).unwrap_or(0));
        fine = fine.min(stock.fine.checked_div(amount).unwrap_or(0));
    }
    CraftingFeasibility::from_counts(normal, fine)
}

/// Materials whose normal-tier stock cannot cover a single craft.
pub fn missing_materials(recipe: &Recipe, inventory: &AggregatedInventory) -> Vec<MaterialShortfall> {
    recipe
        .requirements
        .materials
        .iter()
        .filter_map(|material| {
            let available = inventory.stock_for(&material.name).normal;
            let required = u64::from(material.amount);
            (available < required).then(|| MaterialShortfall {
                name: material.name.clone(),
                required,
                available,
            })
        })
        .collect()
}

/// Full pass over a catalog: aggregate once, resolve levels once, evaluate
/// every recipe in catalog order.
pub fn evaluate_catalog(catalog: &[Recipe], character: &Character) -> Vec<CraftingFeasibility> {
    let inventory = aggregate_character(character);
    let levels = skill_levels(&character.skills);
    let results: Vec<CraftingFeasibility> = catalog
        .iter()
        .map(|recipe| evaluate(recipe, &inventory, &levels))
        .collect();
    debug!(
        "evaluated {} recipes, {} craftable",
        results.len(),
        results.iter().filter(|f| f.is_craftable()).count()
    );
    results
}
