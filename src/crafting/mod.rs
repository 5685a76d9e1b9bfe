//! Crafting feasibility core.
//! Takes a character snapshot and the recipe catalog and derives, per recipe,
//! whether it can be crafted, how many times per quality tier, and what is
//! missing. Everything here is synchronous and side-effect free apart from
//! the file loaders in [`import`].

pub mod errors;
pub mod feasibility;
pub mod grouping;
pub mod import;
pub mod inventory;
pub mod levels;
pub mod names;
pub mod planner;
pub mod report;
pub mod types;

pub use errors::CraftingError;
pub use feasibility::{evaluate, evaluate_catalog, missing_materials};
pub use grouping::{group_by_profession, recipe_order, sort_recipes, RecipeGroups, UNAFFILIATED_GROUP};
pub use import::{
    load_catalog_from_json, load_character_from_json, load_icon_index_from_json, parse_catalog,
    parse_character, CharacterSlot, IconIndex,
};
pub use inventory::{aggregate, aggregate_character, AggregatedInventory};
pub use levels::{level_for_xp, skill_levels, xp_for_level, MAX_LEVEL, MIN_LEVEL, XP_TABLE};
pub use names::{denormalize, normalize, split_fine_suffix, FINE_PREFIX, FINE_SUFFIX};
pub use planner::{build_plan, snapshot_fingerprint, Plan, PlanEntry, Planner, ProfessionPlan};
pub use report::format_plan_compact;
pub use types::*;
