//! StatConverter - vendor game-data records into canonical engine records
//!
//! The vendor schema (Data Dragon) names stats with modifier keys like
//! `FlatPhysicalDamageMod` and encodes percent and crit values as fractions.
//! Conversion normalizes everything to the canonical [`Stat`] vocabulary;
//! unknown keys are preserved under the `_unmapped_` sentinel with a warning
//! diagnostic rather than dropped.

use crate::config::StatMappings;
use crate::stat_block::{BonusKey, Stat, StatSet};
use crate::types::{Champion, Gold, Item, Passive, ResourceType};
use serde::Deserialize;
use std::collections::BTreeMap;

pub const UNMAPPED_PREFIX: &str = "_unmapped_";

/// A champion record in the vendor schema.
#[derive(Debug, Clone, Deserialize)]
pub struct RawChampion {
    pub id: String,
    #[serde(default)]
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_partype")]
    pub partype: String,
    pub stats: RawChampionStats,
}

fn default_partype() -> String {
    "Mana".to_string()
}

/// Champion base stats in the vendor schema. All fields default to 0.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawChampionStats {
    pub hp: f64,
    pub hpperlevel: f64,
    pub mp: f64,
    pub mpperlevel: f64,
    pub movespeed: f64,
    pub armor: f64,
    pub armorperlevel: f64,
    pub spellblock: f64,
    pub spellblockperlevel: f64,
    pub attackrange: f64,
    pub hpregen: f64,
    pub hpregenperlevel: f64,
    pub mpregen: f64,
    pub mpregenperlevel: f64,
    pub crit: f64,
    pub critperlevel: f64,
    pub attackdamage: f64,
    pub attackdamageperlevel: f64,
    pub attackspeed: f64,
    pub attackspeedperlevel: f64,
}

/// Item gold block in the vendor schema.
#[derive(Debug, Clone, Deserialize)]
pub struct RawGold {
    #[serde(default)]
    pub base: u32,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub sell: u32,
    #[serde(default = "default_purchasable")]
    pub purchasable: bool,
}

fn default_purchasable() -> bool {
    true
}

impl Default for RawGold {
    fn default() -> Self {
        RawGold {
            base: 0,
            total: 0,
            sell: 0,
            purchasable: true,
        }
    }
}

/// An item record in the vendor schema.
#[derive(Debug, Clone, Deserialize)]
pub struct RawItem {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub plaintext: String,
    #[serde(default)]
    pub gold: RawGold,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub stats: BTreeMap<String, f64>,
}

/// Result of converting one raw stat table.
#[derive(Debug, Clone, Default)]
pub struct ConvertedStats {
    pub stats: BTreeMap<BonusKey, f64>,
    /// Vendor entries without a canonical mapping, keyed with the sentinel
    /// prefix.
    pub unmapped: BTreeMap<String, f64>,
}

/// Convert a vendor stat table into canonical bonus keys.
///
/// Vendor keys containing a `Percent` or `Crit` marker carry fractional
/// values (0.15 for 15%) and are rescaled to percent units. Zero entries are
/// dropped. Unknown keys warn and are preserved verbatim.
pub fn convert_stats(raw: &BTreeMap<String, f64>, mappings: &StatMappings) -> ConvertedStats {
    let mut out = ConvertedStats::default();
    for (vendor_key, &value) in raw {
        if value == 0.0 {
            continue;
        }
        match mappings.resolve(vendor_key) {
            Some(key) => {
                let scaled = if vendor_key.contains("Percent") || vendor_key.contains("Crit") {
                    value * 100.0
                } else {
                    value
                };
                *out.stats.entry(key).or_insert(0.0) += scaled;
            }
            None => {
                tracing::warn!(key = %vendor_key, value, "unmapped vendor stat key");
                out.unmapped
                    .insert(format!("{UNMAPPED_PREFIX}{vendor_key}"), value);
            }
        }
    }
    out
}

/// Convert a vendor champion record. Names, tags and identity are preserved
/// verbatim; absent numeric fields read as 0.
pub fn convert_champion(raw: &RawChampion) -> Champion {
    let s = &raw.stats;
    let fields = [
        (Stat::Health, s.hp),
        (Stat::HealthPerLevel, s.hpperlevel),
        (Stat::Mana, s.mp),
        (Stat::ManaPerLevel, s.mpperlevel),
        (Stat::MovementSpeed, s.movespeed),
        (Stat::Armor, s.armor),
        (Stat::ArmorPerLevel, s.armorperlevel),
        (Stat::MagicResist, s.spellblock),
        (Stat::MagicResistPerLevel, s.spellblockperlevel),
        (Stat::AttackRange, s.attackrange),
        (Stat::HealthRegen, s.hpregen),
        (Stat::HealthRegenPerLevel, s.hpregenperlevel),
        (Stat::ManaRegen, s.mpregen),
        (Stat::ManaRegenPerLevel, s.mpregenperlevel),
        (Stat::CritChance, s.crit),
        (Stat::CritChancePerLevel, s.critperlevel),
        (Stat::AttackDamage, s.attackdamage),
        (Stat::AttackDamagePerLevel, s.attackdamageperlevel),
        (Stat::AttackSpeed, s.attackspeed),
        (Stat::AttackSpeedPerLevel, s.attackspeedperlevel),
    ];
    let stats: StatSet = fields.into_iter().filter(|(_, v)| *v != 0.0).collect();
    Champion {
        id: raw.id.clone(),
        key: if raw.key.is_empty() {
            raw.id.clone()
        } else {
            raw.key.clone()
        },
        name: raw.name.clone(),
        title: raw.title.clone(),
        tags: raw.tags.clone(),
        resource: ResourceType::from_partype(&raw.partype),
        stats,
    }
}

/// Convert a vendor item record.
pub fn convert_item(id: &str, raw: &RawItem, mappings: &StatMappings) -> Item {
    let converted = convert_stats(&raw.stats, mappings);
    Item {
        id: id.to_string(),
        name: raw.name.clone(),
        description: raw.description.clone(),
        plaintext: raw.plaintext.clone(),
        gold: Gold {
            base: raw.gold.base,
            total: raw.gold.total,
            sell: raw.gold.sell,
            purchasable: raw.gold.purchasable,
        },
        tags: raw.tags.clone(),
        stats: converted.stats,
        passives: extract_passives(&raw.description),
        unmapped: converted.unmapped,
    }
}

/// Pull named passives out of the vendor item description markup.
///
/// Passives appear as `<passive>Name: effect text</passive>`; the name is the
/// text before the first colon.
pub fn extract_passives(description: &str) -> Vec<Passive> {
    const OPEN: &str = "<passive>";
    const CLOSE: &str = "</passive>";

    let mut passives = Vec::new();
    let mut rest = description;
    while let Some(start) = rest.find(OPEN) {
        let after = &rest[start + OPEN.len()..];
        let Some(end) = after.find(CLOSE) else { break };
        let body = &after[..end];
        let name = body.split(':').next().unwrap_or(body).trim();
        if !name.is_empty() {
            passives.push(Passive {
                name: name.to_string(),
                description: body.to_string(),
            });
        }
        rest = &after[end + CLOSE.len()..];
    }
    passives
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mappings() -> StatMappings {
        StatMappings::default()
    }

    #[test]
    fn flat_keys_convert_unscaled() {
        let raw = BTreeMap::from([("FlatHPPoolMod".to_string(), 400.0)]);
        let out = convert_stats(&raw, &mappings());
        assert_eq!(out.stats[&BonusKey::Flat(Stat::Health)], 400.0);
        assert!(out.unmapped.is_empty());
    }

    #[test]
    fn percent_and_crit_markers_rescale() {
        let raw = BTreeMap::from([
            ("FlatCritChanceMod".to_string(), 0.25),
            ("PercentAttackSpeedMod".to_string(), 0.30),
        ]);
        let out = convert_stats(&raw, &mappings());
        assert!((out.stats[&BonusKey::Flat(Stat::CritChance)] - 25.0).abs() < 1e-9);
        assert!((out.stats[&BonusKey::Flat(Stat::AttackSpeed)] - 30.0).abs() < 1e-9);
    }

    #[test]
    fn zero_values_are_dropped() {
        let raw = BTreeMap::from([("FlatArmorMod".to_string(), 0.0)]);
        let out = convert_stats(&raw, &mappings());
        assert!(out.stats.is_empty());
    }

    #[test]
    fn unknown_keys_are_preserved_with_sentinel() {
        let raw = BTreeMap::from([("rFlatGoldPer10Mod".to_string(), 2.0)]);
        let out = convert_stats(&raw, &mappings());
        assert!(out.stats.is_empty());
        assert_eq!(out.unmapped["_unmapped_rFlatGoldPer10Mod"], 2.0);
    }

    #[test]
    fn duplicate_mapped_targets_sum() {
        // Legacy and modern lethality keys land on the same canonical stat.
        let raw = BTreeMap::from([
            ("FlatArmorPenetrationMod".to_string(), 10.0),
            ("rFlatArmorPenetrationMod".to_string(), 5.0),
        ]);
        let out = convert_stats(&raw, &mappings());
        assert!((out.stats[&BonusKey::Flat(Stat::Lethality)] - 15.0).abs() < 1e-9);
    }

    #[test]
    fn champion_conversion_keeps_identity_and_growth() {
        let raw = RawChampion {
            id: "Jinx".to_string(),
            key: "222".to_string(),
            name: "Jinx".to_string(),
            title: "the Loose Cannon".to_string(),
            tags: vec!["Marksman".to_string()],
            partype: "Mana".to_string(),
            stats: RawChampionStats {
                hp: 630.0,
                hpperlevel: 105.0,
                attackdamage: 59.0,
                attackdamageperlevel: 3.15,
                attackspeed: 0.625,
                ..Default::default()
            },
        };
        let champ = convert_champion(&raw);
        assert_eq!(champ.key, "222");
        assert_eq!(champ.resource, ResourceType::Mana);
        assert!((champ.stats.get(Stat::HealthPerLevel) - 105.0).abs() < 1e-9);
        assert!((champ.stats.get(Stat::AttackDamage) - 59.0).abs() < 1e-9);
    }

    #[test]
    fn passive_extraction() {
        let desc = "<mainText>stats</mainText><passive>Perfection: bonus \
                    crit damage</passive><passive>Spite</passive>";
        let passives = extract_passives(desc);
        assert_eq!(passives.len(), 2);
        assert_eq!(passives[0].name, "Perfection");
        assert_eq!(passives[1].name, "Spite");
    }
}
