//! # Configuration Management Module
//!
//! Craftplan reads a small TOML file that says where the scraped recipe
//! catalog and the character record live, how the planner buckets recipes,
//! and how logging is set up.
//!
//! ## Configuration Structure
//!
//! - [`CatalogConfig`] - Recipe catalog and optional icon index paths
//! - [`CharacterConfig`] - Character record path
//! - [`PlannerConfig`] - Grouping and report options
//! - [`LoggingConfig`] - Log level and optional log file
//!
//! ## Usage
//!
//! ```rust,no_run
//! use craftplan::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("craftplan.toml").await?;
//!     println!("Catalog: {}", config.catalog.path);
//!
//!     Config::create_default("craftplan.toml").await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration File Format
//!
//! ```toml
//! [catalog]
//! path = "data/recipes.json"
//! icons = "data/icons.json"
//!
//! [character]
//! path = "character.json"
//!
//! [planner]
//! unaffiliated_group = "Unaffiliated"
//! craftable_only = false
//!
//! [logging]
//! level = "info"
//! ```

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::crafting::UNAFFILIATED_GROUP;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub path: String,
    /// Icon index JSON; presentation only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icons: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterConfig {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Group name for recipes without a profession requirement.
    #[serde(default = "default_unaffiliated_group")]
    pub unaffiliated_group: String,
    /// Hide recipes that cannot be crafted in either tier.
    #[serde(default)]
    pub craftable_only: bool,
}

fn default_unaffiliated_group() -> String {
    UNAFFILIATED_GROUP.to_string()
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            unaffiliated_group: default_unaffiliated_group(),
            craftable_only: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Parse `level`; unknown values fall back to `Info`.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub character: CharacterConfig,
    #[serde(default)]
    pub planner: PlannerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a file
    pub async fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file {}", path))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))?;

        Ok(config)
    }

    /// Like [`Config::load`], but a missing file yields `Ok(None)`. Unreadable
    /// or malformed files are still errors.
    pub async fn load_optional(path: &str) -> Result<Option<Self>> {
        match Self::load(path).await {
            Ok(config) => Ok(Some(config)),
            Err(e) => match e.downcast_ref::<std::io::Error>() {
                Some(io) if io.kind() == std::io::ErrorKind::NotFound => Ok(None),
                _ => Err(e),
            },
        }
    }

    /// Create a default configuration file
    pub async fn create_default(path: &str) -> Result<()> {
        let config = Config::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .await
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig {
                path: "data/recipes.json".to_string(),
                icons: Some("data/icons.json".to_string()),
            },
            character: CharacterConfig {
                path: "character.json".to_string(),
            },
            planner: PlannerConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
