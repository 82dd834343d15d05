//! Rule tables: vendor stat mappings, shard effects, passives, buffs

use crate::stat_block::{BonusKey, Stat};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Vendor stat key → canonical bonus key.
///
/// Covers the vendor modifier vocabulary that has a canonical counterpart.
/// Vendor keys absent from this table are preserved under the `_unmapped_`
/// sentinel at conversion time rather than dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatMappings(pub BTreeMap<String, BonusKey>);

impl StatMappings {
    /// Resolve a vendor key, if mapped.
    pub fn resolve(&self, vendor_key: &str) -> Option<BonusKey> {
        self.0.get(vendor_key).copied()
    }
}

impl Default for StatMappings {
    fn default() -> Self {
        use BonusKey::{Flat, Percent};
        let entries: &[(&str, BonusKey)] = &[
            // Flat values
            ("FlatPhysicalDamageMod", Flat(Stat::AttackDamage)),
            ("FlatMagicDamageMod", Flat(Stat::AbilityPower)),
            ("FlatArmorMod", Flat(Stat::Armor)),
            ("FlatSpellBlockMod", Flat(Stat::MagicResist)),
            ("FlatHPPoolMod", Flat(Stat::Health)),
            ("FlatMPPoolMod", Flat(Stat::Mana)),
            ("FlatHPRegenMod", Flat(Stat::HealthRegen)),
            ("FlatMPRegenMod", Flat(Stat::ManaRegen)),
            ("FlatMovementSpeedMod", Flat(Stat::MovementSpeed)),
            // Percentage modifiers
            ("PercentPhysicalDamageMod", Percent(Stat::AttackDamage)),
            ("PercentMagicDamageMod", Percent(Stat::AbilityPower)),
            ("PercentHPPoolMod", Percent(Stat::Health)),
            ("PercentMPPoolMod", Percent(Stat::Mana)),
            ("PercentMovementSpeedMod", Percent(Stat::MovementSpeed)),
            ("PercentArmorMod", Percent(Stat::Armor)),
            ("PercentSpellBlockMod", Percent(Stat::MagicResist)),
            ("PercentHPRegenMod", Percent(Stat::HealthRegen)),
            ("PercentMPRegenMod", Percent(Stat::ManaRegen)),
            // Attack speed bonuses are always ratios against the level-0
            // base; they are stored flat and consumed by the attack speed
            // formula, never by the generic fold.
            ("PercentAttackSpeedMod", Flat(Stat::AttackSpeed)),
            ("rPercentAttackSpeedModPerLevel", Flat(Stat::AttackSpeedPerLevel)),
            // Critical strike
            ("FlatCritChanceMod", Flat(Stat::CritChance)),
            ("FlatCritDamageMod", Flat(Stat::CritDamage)),
            ("PercentCritDamageMod", Percent(Stat::CritDamage)),
            // Penetration
            ("FlatArmorPenetrationMod", Flat(Stat::Lethality)),
            ("rFlatArmorPenetrationMod", Flat(Stat::Lethality)),
            ("rPercentArmorPenetrationMod", Flat(Stat::ArmorPenetrationPercent)),
            ("PercentArmorPenetrationMod", Flat(Stat::ArmorPenetrationPercent)),
            ("FlatMagicPenetrationMod", Flat(Stat::MagicPenetrationFlat)),
            ("rFlatMagicPenetrationMod", Flat(Stat::MagicPenetrationFlat)),
            ("rPercentMagicPenetrationMod", Flat(Stat::MagicPenetrationPercent)),
            ("PercentMagicPenetrationMod", Flat(Stat::MagicPenetrationPercent)),
            // Vamp
            ("PercentLifeStealMod", Flat(Stat::LifeSteal)),
            ("PercentSpellVampMod", Flat(Stat::Omnivamp)),
            // Haste
            ("FlatAbilityHasteMod", Flat(Stat::AbilityHaste)),
            // Per-level rune stats
            ("rFlatPhysicalDamageModPerLevel", Flat(Stat::AttackDamagePerLevel)),
            ("rFlatArmorModPerLevel", Flat(Stat::ArmorPerLevel)),
            ("rFlatSpellBlockModPerLevel", Flat(Stat::MagicResistPerLevel)),
            ("rFlatHPModPerLevel", Flat(Stat::HealthPerLevel)),
            ("rFlatMPModPerLevel", Flat(Stat::ManaPerLevel)),
            ("rFlatHPRegenModPerLevel", Flat(Stat::HealthRegenPerLevel)),
            ("rFlatMPRegenModPerLevel", Flat(Stat::ManaRegenPerLevel)),
        ];
        StatMappings(
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect(),
        )
    }
}

/// Numeric effects of the three stat-shard slots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShardTable {
    /// Adaptive force as attack damage, when AD is ahead.
    #[serde(default = "default_adaptive_ad")]
    pub adaptive_attack_damage: f64,
    /// Adaptive force as ability power, when AP is ahead or tied.
    #[serde(default = "default_adaptive_ap")]
    pub adaptive_ability_power: f64,
    /// Multiplier applied to the running attack speed.
    #[serde(default = "default_attack_speed_multiplier")]
    pub attack_speed_multiplier: f64,
    #[serde(default = "default_ability_haste")]
    pub ability_haste: f64,
    #[serde(default = "default_movement_speed")]
    pub movement_speed: f64,
    /// Health shard at level 1.
    #[serde(default = "default_health_base")]
    pub health_base: f64,
    /// Extra health grown linearly so the shard adds this much more at max
    /// level: `health_base + health_growth * (level-1) / (max_level-1)`.
    #[serde(default = "default_health_growth")]
    pub health_growth: f64,
    #[serde(default = "default_shard_armor")]
    pub armor: f64,
    #[serde(default = "default_shard_magic_resist")]
    pub magic_resist: f64,
}

impl Default for ShardTable {
    fn default() -> Self {
        ShardTable {
            adaptive_attack_damage: 5.4,
            adaptive_ability_power: 9.0,
            attack_speed_multiplier: 1.10,
            ability_haste: 8.0,
            movement_speed: 2.0,
            health_base: 15.0,
            health_growth: 140.0,
            armor: 6.0,
            magic_resist: 8.0,
        }
    }
}

fn default_adaptive_ad() -> f64 {
    5.4
}
fn default_adaptive_ap() -> f64 {
    9.0
}
fn default_attack_speed_multiplier() -> f64 {
    1.10
}
fn default_ability_haste() -> f64 {
    8.0
}
fn default_movement_speed() -> f64 {
    2.0
}
fn default_health_base() -> f64 {
    15.0
}
fn default_health_growth() -> f64 {
    140.0
}
fn default_shard_armor() -> f64 {
    6.0
}
fn default_shard_magic_resist() -> f64 {
    8.0
}

/// A single flat stat adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatDelta {
    pub stat: Stat,
    pub value: f64,
}

/// Named item passives with fixed flat effects, keyed by exact passive name.
/// Unrecognized passive names are ignored at apply time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PassiveTable(pub BTreeMap<String, Vec<StatDelta>>);

impl PassiveTable {
    pub fn get(&self, name: &str) -> Option<&[StatDelta]> {
        self.0.get(name).map(Vec::as_slice)
    }
}

impl Default for PassiveTable {
    fn default() -> Self {
        let mut table = BTreeMap::new();
        table.insert(
            "Perfection".to_string(),
            vec![StatDelta {
                stat: Stat::CritDamage,
                value: 35.0,
            }],
        );
        PassiveTable(table)
    }
}

/// Reference gold value of one point of each stat delta, used for item
/// gold-efficiency. Keys absent from the table value at 0 (percent
/// modifiers and the percent penetrations have no per-point price).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GoldValueTable(pub BTreeMap<BonusKey, f64>);

impl GoldValueTable {
    pub fn value(&self, key: BonusKey) -> f64 {
        self.0.get(&key).copied().unwrap_or(0.0)
    }
}

impl Default for GoldValueTable {
    fn default() -> Self {
        use BonusKey::Flat;
        let entries: &[(BonusKey, f64)] = &[
            (Flat(Stat::AttackDamage), 35.0),
            (Flat(Stat::AbilityPower), 21.75),
            (Flat(Stat::Health), 2.67),
            (Flat(Stat::Mana), 1.4),
            (Flat(Stat::Armor), 20.0),
            (Flat(Stat::MagicResist), 18.0),
            // Per percent point
            (Flat(Stat::AttackSpeed), 25.0),
            (Flat(Stat::CritChance), 40.0),
            (Flat(Stat::LifeSteal), 37.5),
            (Flat(Stat::Omnivamp), 39.75),
            (Flat(Stat::HealAndShieldPower), 55.0),
            (Flat(Stat::AbilityHaste), 26.67),
            (Flat(Stat::Lethality), 30.0),
            (Flat(Stat::MagicPenetrationFlat), 31.11),
            (Flat(Stat::MovementSpeed), 12.0),
            (Flat(Stat::HealthRegen), 3.0),
            (Flat(Stat::ManaRegen), 4.0),
        ];
        GoldValueTable(entries.iter().copied().collect())
    }
}

/// Objective buff effects: the major buff is flat, the minor buff is flat
/// per stack.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuffTable {
    #[serde(default = "default_baron_ad")]
    pub baron_attack_damage: f64,
    #[serde(default = "default_baron_ap")]
    pub baron_ability_power: f64,
    #[serde(default = "default_dragon_ad")]
    pub dragon_attack_damage: f64,
    #[serde(default = "default_dragon_ap")]
    pub dragon_ability_power: f64,
    #[serde(default = "default_dragon_armor")]
    pub dragon_armor: f64,
    #[serde(default = "default_dragon_mr")]
    pub dragon_magic_resist: f64,
}

impl Default for BuffTable {
    fn default() -> Self {
        BuffTable {
            baron_attack_damage: 25.0,
            baron_ability_power: 40.0,
            dragon_attack_damage: 4.0,
            dragon_ability_power: 6.0,
            dragon_armor: 3.0,
            dragon_magic_resist: 3.0,
        }
    }
}

fn default_baron_ad() -> f64 {
    25.0
}
fn default_baron_ap() -> f64 {
    40.0
}
fn default_dragon_ad() -> f64 {
    4.0
}
fn default_dragon_ap() -> f64 {
    6.0
}
fn default_dragon_armor() -> f64 {
    3.0
}
fn default_dragon_mr() -> f64 {
    3.0
}
