//! # Craftplan - Crafting Planner Core
//!
//! Craftplan cross-references a character's inventory and bank against a
//! recipe catalog scraped from the game wiki and works out, for every recipe,
//! whether it can be crafted right now, how many times per quality tier, and
//! what is still missing.
//!
//! ## Features
//!
//! - **Item Names**: Raw inventory keys (`coal_fine`) map to catalog display names (`Fine Coal`).
//! - **Skill Levels**: Experience resolves to levels 1-99 through the fixed game threshold table.
//! - **Aggregation**: Inventory and bank merge into per-material normal/fine totals.
//! - **Grouping**: Recipes are bucketed by profession and ordered by level, then name.
//! - **Feasibility**: Level gate first, then the tightest material ratio per tier.
//! - **Import Validation**: Malformed character records are rejected before they replace the active one.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use craftplan::crafting::{load_catalog_from_json, load_character_from_json, Planner, format_plan_compact};
//!
//! fn main() -> anyhow::Result<()> {
//!     let catalog = load_catalog_from_json("data/recipes.json")?;
//!     let character = load_character_from_json("character.json")?;
//!
//!     let mut planner = Planner::new(catalog).with_character(character);
//!     for line in format_plan_compact(planner.plan(), false) {
//!         println!("{}", line);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`crafting`] - Normalizer, level table, aggregation, grouping, feasibility and planner
//! - [`config`] - Configuration loading and defaults
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   Planner       │ ← Memoized full-catalog pass
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │   Feasibility   │ ← Level gate + material ratios
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │   Aggregation   │ ← Inventory + bank, normal/fine
//! └─────────────────┘
//! ```

pub mod config;
pub mod crafting;
