//! Champion base stats scaled to a level

use super::StatSource;
use crate::config::{CombatConstants, GameConstants, GrowthConstants};
use crate::stat_block::{Stat, StatSet};
use crate::types::Champion;

/// Growth stat pairs: the held stat and its per-level coefficient.
const GROWTH_PAIRS: [(Stat, Stat); 8] = [
    (Stat::Health, Stat::HealthPerLevel),
    (Stat::Mana, Stat::ManaPerLevel),
    (Stat::Armor, Stat::ArmorPerLevel),
    (Stat::MagicResist, Stat::MagicResistPerLevel),
    (Stat::AttackDamage, Stat::AttackDamagePerLevel),
    (Stat::CritChance, Stat::CritChancePerLevel),
    (Stat::HealthRegen, Stat::HealthRegenPerLevel),
    (Stat::ManaRegen, Stat::ManaRegenPerLevel),
];

/// Stats the pipelines read that champions never carry a base value for.
/// Seeded explicitly so every build's stat sheet is fully populated.
const SEEDED_ZERO: [Stat; 9] = [
    Stat::AbilityPower,
    Stat::AbilityHaste,
    Stat::Lethality,
    Stat::ArmorPenetrationPercent,
    Stat::MagicPenetrationFlat,
    Stat::MagicPenetrationPercent,
    Stat::LifeSteal,
    Stat::Omnivamp,
    Stat::HealAndShieldPower,
];

/// Sub-linear growth multiplier for a clamped level:
/// `(level-1) * (linear + quadratic * (level-1))`.
///
/// At level 1 this is 0 (base stats only); at level 18 it is exactly 17 with
/// the default coefficients, so growth stats reach `base + 17 * per_level`.
pub fn level_scale(level: u8, growth: &GrowthConstants) -> f64 {
    let level = level.clamp(growth.min_level, growth.max_level);
    let steps = f64::from(level - 1);
    steps * (growth.linear + growth.quadratic * steps)
}

/// The champion's level-0 attack speed, falling back to the global default
/// when the record lacks one. Attack speed bonuses are ratios against this
/// value, never against the leveled value.
pub fn base_attack_speed(champion: &Champion, combat: &CombatConstants) -> f64 {
    let base = champion.stats.get(Stat::AttackSpeed);
    if base > 0.0 {
        base
    } else {
        combat.base_attack_speed
    }
}

/// Seeds the stat set with the champion's base stats at the session level.
pub struct BaseStatsSource {
    champion: Champion,
    level: u8,
    constants: GameConstants,
}

impl BaseStatsSource {
    pub fn new(champion: Champion, level: u8, constants: GameConstants) -> Self {
        BaseStatsSource {
            champion,
            level,
            constants,
        }
    }
}

impl StatSource for BaseStatsSource {
    fn id(&self) -> &str {
        "base_stats"
    }

    fn priority(&self) -> i32 {
        -100 // Base stats apply first
    }

    fn apply(&self, stats: &mut StatSet) {
        let scale = level_scale(self.level, &self.constants.growth);
        let base = &self.champion.stats;

        for (stat, per_level) in GROWTH_PAIRS {
            stats.set(stat, base.get(stat) + base.get(per_level) * scale);
        }

        // Attack speed grows as a percent of the level-0 base, not linearly.
        let base_as = base_attack_speed(&self.champion, &self.constants.combat);
        let level_bonus = base.get(Stat::AttackSpeedPerLevel) * scale;
        stats.set(Stat::AttackSpeed, base_as * (1.0 + level_bonus / 100.0));

        stats.set(Stat::MovementSpeed, base.get(Stat::MovementSpeed));
        stats.set(Stat::AttackRange, base.get(Stat::AttackRange));
        stats.set(Stat::CritDamage, self.constants.combat.base_crit_damage);
        for stat in SEEDED_ZERO {
            stats.set(stat, 0.0);
        }
    }
}
