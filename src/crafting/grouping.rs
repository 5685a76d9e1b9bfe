//! Partition the catalog by profession and order each group for display.

use super::types::Recipe;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Default bucket for recipes without a profession requirement.
pub const UNAFFILIATED_GROUP: &str = "Unaffiliated";

pub type RecipeGroups<'a> = BTreeMap<String, Vec<&'a Recipe>>;

/// Display order: required level ascending, then name (case-sensitive).
pub fn recipe_order(a: &Recipe, b: &Recipe) -> Ordering {
    a.required_level()
        .cmp(&b.required_level())
        .then_with(|| a.name.cmp(&b.name))
}

/// Stable sort, so catalog order breaks exact ties.
pub fn sort_recipes(recipes: &mut [&Recipe]) {
    recipes.sort_by(|a, b| recipe_order(a, b));
}

/// Group recipes under their profession name. Professionless recipes go to
/// `unaffiliated`.
pub fn group_by_profession<'a>(recipes: &'a [Recipe], unaffiliated: &str) -> RecipeGroups<'a> {
    let mut groups: RecipeGroups<'a> = BTreeMap::new();
    for recipe in recipes {
        let key = recipe.profession_name().unwrap_or(unaffiliated);
        groups.entry(key.to_string()).or_default().push(recipe);
    }
    for group in groups.values_mut() {
        sort_recipes(group);
    }
    groups
}
