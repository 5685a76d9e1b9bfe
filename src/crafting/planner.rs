//! Full-catalog planning with memoized results.
//!
//! A [`Plan`] is a pure function of the character and catalog snapshot. The
//! planner keeps the last plan together with a fingerprint of the snapshot it
//! came from and only recomputes when that fingerprint changes.

use super::feasibility::{evaluate, missing_materials};
use super::grouping::{group_by_profession, UNAFFILIATED_GROUP};
use super::import::{CharacterSlot, IconIndex};
use super::inventory::aggregate_character;
use super::levels::skill_levels;
use super::types::{Character, CraftingFeasibility, MaterialShortfall, Recipe};
use super::CraftingError;
use log::debug;
use serde::Serialize;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PlanEntry {
    pub name: String,
    pub output: String,
    pub required_level: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    pub feasibility: CraftingFeasibility,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub shortfall: Vec<MaterialShortfall>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ProfessionPlan {
    pub profession: String,
    /// Character level in this profession; 0 when untrained or unaffiliated.
    pub current_level: u32,
    pub entries: Vec<PlanEntry>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Plan {
    pub professions: Vec<ProfessionPlan>,
}

impl Plan {
    pub fn profession(&self, name: &str) -> Option<&ProfessionPlan> {
        self.professions.iter().find(|p| p.profession == name)
    }

    pub fn entry(&self, recipe_name: &str) -> Option<&PlanEntry> {
        self.professions
            .iter()
            .flat_map(|p| p.entries.iter())
            .find(|e| e.name == recipe_name)
    }

    pub fn craftable_count(&self) -> usize {
        self.professions
            .iter()
            .flat_map(|p| p.entries.iter())
            .filter(|e| e.feasibility.is_craftable())
            .count()
    }
}

/// Hash of the (character, catalog) snapshot.
pub fn snapshot_fingerprint(character: &Character, catalog: &[Recipe]) -> u64 {
    let mut hasher = DefaultHasher::new();
    character.hash(&mut hasher);
    catalog.hash(&mut hasher);
    hasher.finish()
}

/// Build a plan in one pass: aggregate, resolve levels, group, evaluate.
pub fn build_plan(
    catalog: &[Recipe],
    character: &Character,
    icons: Option<&IconIndex>,
    unaffiliated: &str,
) -> Plan {
    let inventory = aggregate_character(character);
    let levels = skill_levels(&character.skills);

    let professions = group_by_profession(catalog, unaffiliated)
        .into_iter()
        .map(|(profession, recipes)| {
            let current_level = levels.get(&profession.to_lowercase()).copied().unwrap_or(0);
            let entries = recipes
                .into_iter()
                .map(|recipe| {
                    let feasibility = evaluate(recipe, &inventory, &levels);
                    PlanEntry {
                        name: recipe.name.clone(),
                        output: recipe.output.clone(),
                        required_level: recipe.required_level(),
                        service: recipe.requirements.service.clone(),
                        feasibility,
                        shortfall: missing_materials(recipe, &inventory),
                        icon: icons.and_then(|index| index.get(&recipe.output).cloned()),
                    }
                })
                .collect();
            ProfessionPlan {
                profession,
                current_level,
                entries,
            }
        })
        .collect();

    Plan { professions }
}

/// Owns the catalog and active character and hands out memoized plans.
#[derive(Debug)]
pub struct Planner {
    catalog: Vec<Recipe>,
    character: CharacterSlot,
    icons: Option<IconIndex>,
    unaffiliated_group: String,
    cached: Option<(u64, Plan)>,
}

impl Planner {
    pub fn new(catalog: Vec<Recipe>) -> Self {
        Self {
            catalog,
            character: CharacterSlot::default(),
            icons: None,
            unaffiliated_group: UNAFFILIATED_GROUP.to_string(),
            cached: None,
        }
    }

    pub fn with_character(mut self, character: Character) -> Self {
        self.character.replace(character);
        self
    }

    pub fn with_icons(mut self, icons: IconIndex) -> Self {
        self.icons = Some(icons);
        self.cached = None;
        self
    }

    pub fn with_unaffiliated_group(mut self, name: &str) -> Self {
        self.unaffiliated_group = name.to_string();
        self.cached = None;
        self
    }

    pub fn catalog(&self) -> &[Recipe] {
        &self.catalog
    }

    pub fn character(&self) -> &Character {
        self.character.current()
    }

    pub fn set_catalog(&mut self, catalog: Vec<Recipe>) {
        self.catalog = catalog;
    }

    /// Import a character document; the active character is unchanged on error.
    pub fn import_character(&mut self, json: &str) -> Result<&Character, CraftingError> {
        self.character.import(json)
    }

    pub fn is_cached(&self) -> bool {
        let fingerprint = snapshot_fingerprint(self.character.current(), &self.catalog);
        matches!(&self.cached, Some((cached, _)) if *cached == fingerprint)
    }

    /// Current plan, recomputed only if the snapshot changed since last call.
    pub fn plan(&mut self) -> &Plan {
        let fingerprint = snapshot_fingerprint(self.character.current(), &self.catalog);
        let stale = !matches!(&self.cached, Some((cached, _)) if *cached == fingerprint);
        if stale {
            debug!("snapshot {:016x} changed, rebuilding plan", fingerprint);
            self.cached = None;
        } else {
            debug!("snapshot {:016x} unchanged, reusing plan", fingerprint);
        }
        let (_, plan) = self.cached.get_or_insert_with(|| {
            (
                fingerprint,
                build_plan(
                    &self.catalog,
                    self.character.current(),
                    self.icons.as_ref(),
                    &self.unaffiliated_group,
                ),
            )
        });
        plan
    }
}
