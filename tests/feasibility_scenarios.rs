//! End-to-end checks of the feasibility rules through the public API.

use craftplan::crafting::{
    aggregate, evaluate, level_for_xp, normalize, skill_levels, xp_for_level, Character,
    CraftingFeasibility, ItemCounts, MaterialStock, Recipe, MAX_LEVEL,
};

fn carpenter() -> Character {
    Character::new()
        .with_skill("carpentry", 200)
        .with_item("wood_scrap", 12)
}

fn feasibility_for(recipe: &Recipe, character: &Character) -> CraftingFeasibility {
    let inventory = aggregate(&character.inventory, &character.bank);
    evaluate(recipe, &inventory, &skill_levels(&character.skills))
}

#[test]
fn birch_plank_is_material_limited() {
    let recipe = Recipe::new("Birch Plank", "Birch Plank")
        .with_profession("Carpentry", 1)
        .with_material("Wood Scrap", 5);
    let result = feasibility_for(&recipe, &carpenter());

    assert_eq!(level_for_xp(200), 3);
    assert_eq!(result.normal_craftable, 2);
    assert_eq!(result.fine_craftable, 0);
    assert!(result.can_craft_normal);
    assert!(!result.can_craft_fine);
    assert_eq!(result.missing_level, 0);
}

#[test]
fn higher_level_recipe_is_level_gated() {
    let recipe = Recipe::new("Birch Plank", "Birch Plank")
        .with_profession("Carpentry", 5)
        .with_material("Wood Scrap", 5);
    let result = feasibility_for(&recipe, &carpenter());

    assert_eq!(result.missing_level, 2);
    assert!(!result.can_craft_normal);
    assert!(!result.can_craft_fine);
}

#[test]
fn fine_coal_is_tracked_separately() {
    assert_eq!(normalize("coal_fine"), "Fine Coal");

    let inventory: ItemCounts = [("coal_fine".to_string(), 3)].into_iter().collect();
    let aggregated = aggregate(&inventory, &ItemCounts::new());
    assert_eq!(aggregated.stock_for("Fine Coal"), MaterialStock { normal: 0, fine: 3 });
    assert_eq!(aggregated.stock_for("Coal"), MaterialStock { normal: 0, fine: 3 });
}

#[test]
fn level_gate_ignores_any_amount_of_stock() {
    let rich = carpenter()
        .with_item("wood_scrap", 10_000)
        .with_banked("wood_scrap_fine", 10_000);
    for required in 4..=10 {
        let recipe = Recipe::new("Plank", "Plank")
            .with_profession("carpentry", required)
            .with_material("Wood Scrap", 1);
        let result = feasibility_for(&recipe, &rich);
        assert_eq!(result, CraftingFeasibility::level_gated(required - 3));
    }
}

#[test]
fn craftable_count_is_floor_of_tightest_material() {
    let stocks = [(0u64, 1u32), (4, 5), (5, 5), (11, 5), (7, 1), (100, 33)];
    for (have_ore, need_ore) in stocks {
        for (have_coal, need_coal) in [(3u64, 1u32), (9, 4)] {
            let character = Character::new()
                .with_item("iron_ore", have_ore)
                .with_banked("coal", have_coal);
            let recipe = Recipe::new("Iron Bar", "Iron Bar")
                .with_material("Iron Ore", need_ore)
                .with_material("Coal", need_coal);
            let expected = (have_ore / need_ore as u64).min(have_coal / need_coal as u64);
            let result = feasibility_for(&recipe, &character);
            assert_eq!(result.normal_craftable, expected);
            assert_eq!(result.can_craft_normal, expected > 0);
        }
    }
}

#[test]
fn empty_material_list_is_never_craftable() {
    let recipe = Recipe::new("Sketch", "Sketch");
    let result = feasibility_for(&recipe, &carpenter());
    assert_eq!(result, CraftingFeasibility::from_counts(0, 0));
    assert!(!result.is_craftable());
}

#[test]
fn level_resolution_is_monotonic() {
    let mut previous = level_for_xp(0);
    for xp in (0..14_000_000u64).step_by(997) {
        let level = level_for_xp(xp);
        assert!(level >= previous, "level dropped at xp {}", xp);
        assert!((1..=MAX_LEVEL).contains(&level));
        previous = level;
    }
}

#[test]
fn level_boundaries_match_table() {
    for level in 2..=MAX_LEVEL {
        let threshold = xp_for_level(level).unwrap();
        assert_eq!(level_for_xp(threshold), level);
        assert_eq!(level_for_xp(threshold - 1), level - 1);
    }
}
