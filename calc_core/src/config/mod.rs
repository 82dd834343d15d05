//! Engine configuration: rule tables and constants, loadable from TOML
//!
//! Every table the pipelines consult (stat-name mappings, shard effects,
//! passive overrides, objective buffs, growth constants) lives here as
//! explicit data with defaults matching the current game revision, so a
//! future data revision is a config change rather than a recompile.

mod constants;
mod tables;

pub use constants::{
    CombatConstants, GameConstants, GrowthConstants, ItemConstants, LethalityConstants,
};
pub use tables::{BuffTable, GoldValueTable, PassiveTable, ShardTable, StatDelta, StatMappings};

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Everything the calculation pipelines need besides the build itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub constants: GameConstants,
    #[serde(default)]
    pub mappings: StatMappings,
    #[serde(default)]
    pub shards: ShardTable,
    #[serde(default)]
    pub passives: PassiveTable,
    #[serde(default)]
    pub buffs: BuffTable,
    #[serde(default)]
    pub gold_values: GoldValueTable,
}

impl EngineConfig {
    /// Load from a TOML file, falling back to defaults for absent sections.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        load_toml(path)
    }
}

/// Load a TOML file and deserialize it.
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Parse a TOML string and deserialize it.
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}
