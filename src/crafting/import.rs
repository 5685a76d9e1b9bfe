//! Loaders and validation for the data the planner consumes.
//!
//! The recipe catalog and icon index are produced by the wiki scraper; the
//! character record comes from whatever the user imports. Everything is
//! checked here so the evaluator only ever sees typed, well-formed data.

use crate::crafting::types::{Character, ItemCounts, Recipe};
use crate::crafting::CraftingError;
use log::{info, warn};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

/// Icon reference per material or profession name. Presentation only.
pub type IconIndex = HashMap<String, String>;

/// Parse a recipe catalog, keeping catalog order.
pub fn parse_catalog(json: &str) -> Result<Vec<Recipe>, CraftingError> {
    let recipes: Vec<Recipe> = serde_json::from_str(json)?;
    for recipe in &recipes {
        if let Some(material) = recipe.requirements.materials.iter().find(|m| m.amount == 0) {
            return Err(CraftingError::InvalidRecipe {
                name: recipe.name.clone(),
                reason: format!("material '{}' has amount 0", material.name),
            });
        }
    }
    Ok(recipes)
}

/// Load the recipe catalog from a JSON file.
pub fn load_catalog_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Recipe>, CraftingError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let recipes = parse_catalog(&contents)?;
    info!("Loaded {} recipes from {}", recipes.len(), path.display());
    Ok(recipes)
}

/// Load the icon index from a JSON object of name -> icon reference.
pub fn load_icon_index_from_json<P: AsRef<Path>>(path: P) -> Result<IconIndex, CraftingError> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

fn counts_field(record: &Map<String, Value>, field: &str, required: bool) -> Result<ItemCounts, CraftingError> {
    let value = match record.get(field) {
        Some(value) => value,
        None if required => {
            return Err(CraftingError::MalformedCharacter(format!(
                "missing '{}' field",
                field
            )))
        }
        None => return Ok(BTreeMap::new()),
    };
    let entries = value.as_object().ok_or_else(|| {
        CraftingError::MalformedCharacter(format!("'{}' must be an object of name to count", field))
    })?;
    entries
        .iter()
        .map(|(key, count)| {
            count.as_u64().map(|n| (key.clone(), n)).ok_or_else(|| {
                CraftingError::MalformedCharacter(format!(
                    "'{}.{}' must be a non-negative integer, got {}",
                    field, key, count
                ))
            })
        })
        .collect()
}

/// Validate and convert a character document.
///
/// `skills` and `inventory` are required; `bank` may be absent or null.
/// Skill names are lowercased, and two names that differ only in case are
/// rejected rather than merged.
pub fn parse_character(json: &str) -> Result<Character, CraftingError> {
    let document: Value = serde_json::from_str(json)
        .map_err(|e| CraftingError::MalformedCharacter(format!("not valid JSON: {}", e)))?;
    let record = document
        .as_object()
        .ok_or_else(|| CraftingError::MalformedCharacter("expected a JSON object".to_string()))?;

    let mut skills = BTreeMap::new();
    for (name, xp) in counts_field(record, "skills", true)? {
        let key = name.to_lowercase();
        if skills.insert(key.clone(), xp).is_some() {
            return Err(CraftingError::MalformedCharacter(format!(
                "skill '{}' appears more than once (names are case-insensitive)",
                key
            )));
        }
    }
    let inventory = counts_field(record, "inventory", true)?;
    let bank = match record.get("bank") {
        Some(Value::Null) => ItemCounts::new(),
        _ => counts_field(record, "bank", false)?,
    };

    Ok(Character {
        skills,
        inventory,
        bank,
    })
}

/// Load and validate a character record from a JSON file.
pub fn load_character_from_json<P: AsRef<Path>>(path: P) -> Result<Character, CraftingError> {
    let contents = fs::read_to_string(path)?;
    parse_character(&contents)
}

/// The currently active character. Imports replace it only when valid.
#[derive(Debug, Clone, Default)]
pub struct CharacterSlot {
    current: Character,
}

impl CharacterSlot {
    pub fn new(character: Character) -> Self {
        Self { current: character }
    }

    pub fn current(&self) -> &Character {
        &self.current
    }

    /// Validate `json` and adopt it. On failure the previous record remains.
    pub fn import(&mut self, json: &str) -> Result<&Character, CraftingError> {
        match parse_character(json) {
            Ok(character) => {
                info!(
                    "Imported character: {} skills, {} inventory keys, {} bank keys",
                    character.skills.len(),
                    character.inventory.len(),
                    character.bank.len()
                );
                self.current = character;
                Ok(&self.current)
            }
            Err(e) => {
                warn!("Rejected character import: {}", e);
                Err(e)
            }
        }
    }

    pub fn replace(&mut self, character: Character) {
        self.current = character;
    }
}
