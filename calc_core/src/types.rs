//! Core domain records: champions, items, rune selections, buff state

use crate::stat_block::{BonusKey, StatSet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Resource a champion spends on abilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    Mana,
    Energy,
    None,
}

impl ResourceType {
    /// Map the vendor `partype` string onto the engine enum. Anything other
    /// than mana or energy (fury, heat, ...) is treated as resourceless.
    pub fn from_partype(partype: &str) -> Self {
        match partype {
            "Mana" => ResourceType::Mana,
            "Energy" => ResourceType::Energy,
            _ => ResourceType::None,
        }
    }
}

/// A champion definition as loaded from converted vendor data. Read-only to
/// the engine; owned by the data-load boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Champion {
    pub id: String,
    pub key: String,
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub resource: ResourceType,
    /// Level-independent base stats including `*PerLevel` growth coefficients.
    pub stats: StatSet,
}

/// Item gold cost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gold {
    pub base: u32,
    pub total: u32,
    pub sell: u32,
    pub purchasable: bool,
}

impl Default for Gold {
    fn default() -> Self {
        Gold {
            base: 0,
            total: 0,
            sell: 0,
            purchasable: true,
        }
    }
}

/// A named passive effect carried by an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Passive {
    pub name: String,
    pub description: String,
}

/// An item definition as loaded from converted vendor data. Read-only to the
/// engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub plaintext: String,
    #[serde(default)]
    pub gold: Gold,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Canonical stat deltas, flat or percent-keyed.
    #[serde(default)]
    pub stats: BTreeMap<BonusKey, f64>,
    #[serde(default)]
    pub passives: Vec<Passive>,
    /// Vendor entries with no canonical mapping, preserved verbatim under the
    /// `_unmapped_` sentinel prefix so no information is lost.
    #[serde(default)]
    pub unmapped: BTreeMap<String, f64>,
}

/// Offense stat-shard choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OffenseShard {
    AdaptiveForce,
    AttackSpeed,
    AbilityHaste,
}

/// Flex stat-shard choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FlexShard {
    AdaptiveForce,
    MovementSpeed,
}

/// Defense stat-shard choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DefenseShard {
    Health,
    Armor,
    MagicResist,
}

/// Per-session rune state. Keystone and minor rune rows are opaque
/// pass-through data: the engine accepts them but only the stat shards
/// contribute numbers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuneSelection {
    pub keystone: Option<String>,
    pub primary: Vec<String>,
    pub secondary: Vec<String>,
    pub offense: Option<OffenseShard>,
    pub flex: Option<FlexShard>,
    pub defense: Option<DefenseShard>,
}

/// Per-session objective buff state, toggled externally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuffState {
    /// Major objective buff (baron).
    pub baron: bool,
    /// Stacks of the repeatable minor objective buff (dragons). Uncapped
    /// here; capping is the caller's responsibility.
    pub dragon_stacks: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partype_mapping() {
        assert_eq!(ResourceType::from_partype("Mana"), ResourceType::Mana);
        assert_eq!(ResourceType::from_partype("Energy"), ResourceType::Energy);
        assert_eq!(ResourceType::from_partype("Fury"), ResourceType::None);
    }
}
