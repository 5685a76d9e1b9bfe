use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw item key (snake_case, optional fine suffix) to quantity.
pub type ItemCounts = BTreeMap<String, u64>;

/// A character snapshot: skill experience plus carried and banked items.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Character {
    /// Lowercase skill name to accumulated experience.
    pub skills: BTreeMap<String, u64>,
    pub inventory: ItemCounts,
    #[serde(default)]
    pub bank: ItemCounts,
}

impl Character {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_skill(mut self, skill: &str, xp: u64) -> Self {
        self.skills.insert(skill.to_lowercase(), xp);
        self
    }

    pub fn with_item(mut self, key: &str, quantity: u64) -> Self {
        *self.inventory.entry(key.to_string()).or_insert(0) += quantity;
        self
    }

    pub fn with_banked(mut self, key: &str, quantity: u64) -> Self {
        *self.bank.entry(key.to_string()).or_insert(0) += quantity;
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ProfessionRequirement {
    pub name: String,
    pub level: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct MaterialRequirement {
    /// Display name as written in the catalog, e.g. "Wood Scrap".
    pub name: String,
    pub amount: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Requirements {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profession: Option<ProfessionRequirement>,
    pub materials: Vec<MaterialRequirement>,
    /// Facility needed to craft; informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
}

/// One catalog entry as produced by the wiki scraper.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Recipe {
    pub name: String,
    pub output: String,
    pub requirements: Requirements,
}

impl Recipe {
    pub fn new(name: &str, output: &str) -> Self {
        Self {
            name: name.to_string(),
            output: output.to_string(),
            requirements: Requirements::default(),
        }
    }

    pub fn with_profession(mut self, profession: &str, level: u32) -> Self {
        self.requirements.profession = Some(ProfessionRequirement {
            name: profession.to_string(),
            level,
        });
        self
    }

    pub fn with_material(mut self, name: &str, amount: u32) -> Self {
        self.requirements.materials.push(MaterialRequirement {
            name: name.to_string(),
            amount,
        });
        self
    }

    pub fn with_service(mut self, service: &str) -> Self {
        self.requirements.service = Some(service.to_string());
        self
    }

    /// Required profession level, 0 when the recipe has no profession gate.
    pub fn required_level(&self) -> u32 {
        self.requirements
            .profession
            .as_ref()
            .map(|p| p.level)
            .unwrap_or(0)
    }

    pub fn profession_name(&self) -> Option<&str> {
        self.requirements.profession.as_ref().map(|p| p.name.as_str())
    }
}

/// Combined inventory + bank stock for one normalized material name.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MaterialStock {
    pub normal: u64,
    pub fine: u64,
}

impl MaterialStock {
    /// Both tiers together, saturating at `u64::MAX` like the aggregator.
    pub fn total(&self) -> u64 {
        self.normal.saturating_add(self.fine)
    }
}

/// Derived per-recipe result. Never persisted.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CraftingFeasibility {
    pub normal_craftable: u64,
    pub fine_craftable: u64,
    pub can_craft_normal: bool,
    pub can_craft_fine: bool,
    /// Levels still needed before the recipe unlocks; 0 once unlocked.
    pub missing_level: u32,
}

impl CraftingFeasibility {
    pub fn level_gated(missing_level: u32) -> Self {
        Self {
            missing_level,
            ..Self::default()
        }
    }

    pub fn from_counts(normal_craftable: u64, fine_craftable: u64) -> Self {
        Self {
            normal_craftable,
            fine_craftable,
            can_craft_normal: normal_craftable > 0,
            can_craft_fine: fine_craftable > 0,
            missing_level: 0,
        }
    }

    pub fn is_craftable(&self) -> bool {
        self.can_craft_normal || self.can_craft_fine
    }
}

/// Normal-tier shortfall for crafting a recipe once.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MaterialShortfall {
    pub name: String,
    pub required: u64,
    pub available: u64,
}

impl MaterialShortfall {
    pub fn missing(&self) -> u64 {
        self.required.saturating_sub(self.available)
    }
}
