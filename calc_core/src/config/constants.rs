//! Tunable numeric constants

use serde::{Deserialize, Serialize};

/// Fixed numeric constants of the stat and damage formulas.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameConstants {
    #[serde(default)]
    pub growth: GrowthConstants,
    #[serde(default)]
    pub combat: CombatConstants,
    #[serde(default)]
    pub lethality: LethalityConstants,
    #[serde(default)]
    pub items: ItemConstants,
}

/// The level growth curve:
/// `bonus = growth * (level-1) * (linear + quadratic * (level-1))`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthConstants {
    #[serde(default = "default_growth_linear")]
    pub linear: f64,
    #[serde(default = "default_growth_quadratic")]
    pub quadratic: f64,
    #[serde(default = "default_min_level")]
    pub min_level: u8,
    #[serde(default = "default_max_level")]
    pub max_level: u8,
}

impl Default for GrowthConstants {
    fn default() -> Self {
        GrowthConstants {
            linear: 0.7025,
            quadratic: 0.0175,
            min_level: 1,
            max_level: 18,
        }
    }
}

fn default_growth_linear() -> f64 {
    0.7025
}
fn default_growth_quadratic() -> f64 {
    0.0175
}
fn default_min_level() -> u8 {
    1
}
fn default_max_level() -> u8 {
    18
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatConstants {
    /// Base critical damage in percent (175 = crits deal 175%).
    #[serde(default = "default_base_crit_damage")]
    pub base_crit_damage: f64,
    /// Fallback base attack speed when the champion record lacks one.
    #[serde(default = "default_base_attack_speed")]
    pub base_attack_speed: f64,
}

impl Default for CombatConstants {
    fn default() -> Self {
        CombatConstants {
            base_crit_damage: 175.0,
            base_attack_speed: 0.625,
        }
    }
}

fn default_base_crit_damage() -> f64 {
    175.0
}
fn default_base_attack_speed() -> f64 {
    0.625
}

/// Lethality effectiveness against target level:
/// `flat pen = lethality * (base + level_scale * target_level / 18)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LethalityConstants {
    #[serde(default = "default_lethality_base")]
    pub base: f64,
    #[serde(default = "default_lethality_level_scale")]
    pub level_scale: f64,
}

impl Default for LethalityConstants {
    fn default() -> Self {
        LethalityConstants {
            base: 0.6,
            level_scale: 0.4,
        }
    }
}

fn default_lethality_base() -> f64 {
    0.6
}
fn default_lethality_level_scale() -> f64 {
    0.4
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemConstants {
    /// Inventory capacity; adds beyond this are refused.
    #[serde(default = "default_max_items")]
    pub max_items: usize,
}

impl Default for ItemConstants {
    fn default() -> Self {
        ItemConstants { max_items: 6 }
    }
}

fn default_max_items() -> usize {
    6
}
