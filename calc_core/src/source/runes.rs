//! Rune stat-shard contributions

use super::StatSource;
use crate::config::{GrowthConstants, ShardTable};
use crate::stat_block::{Stat, StatSet};
use crate::types::{DefenseShard, FlexShard, OffenseShard, RuneSelection};

/// The three stat-shard slots of a rune page.
///
/// Keystone and minor rune selections are carried on the session for the
/// caller's benefit but contribute no numbers here; only the shards do.
///
/// Both adaptive slots resolve against a snapshot of attack damage and
/// ability power taken before any shard applies, so the first adaptive shard
/// cannot flip the decision of the second. Ties go to ability power.
pub struct RuneSource {
    runes: RuneSelection,
    level: u8,
    shards: ShardTable,
    growth: GrowthConstants,
}

impl RuneSource {
    pub fn new(runes: RuneSelection, level: u8, shards: ShardTable, growth: GrowthConstants) -> Self {
        RuneSource {
            runes,
            level,
            shards,
            growth,
        }
    }

    fn apply_adaptive(&self, stats: &mut StatSet, ad_leads: bool) {
        if ad_leads {
            stats.add(Stat::AttackDamage, self.shards.adaptive_attack_damage);
        } else {
            stats.add(Stat::AbilityPower, self.shards.adaptive_ability_power);
        }
    }

    fn shard_health(&self) -> f64 {
        let level = self.level.clamp(self.growth.min_level, self.growth.max_level);
        let span = f64::from(self.growth.max_level - self.growth.min_level);
        self.shards.health_base + self.shards.health_growth * f64::from(level - 1) / span
    }
}

impl StatSource for RuneSource {
    fn id(&self) -> &str {
        "runes"
    }

    fn priority(&self) -> i32 {
        100 // Runes apply after items
    }

    fn apply(&self, stats: &mut StatSet) {
        let ad_leads = stats.get(Stat::AttackDamage) > stats.get(Stat::AbilityPower);

        match self.runes.offense {
            Some(OffenseShard::AdaptiveForce) => self.apply_adaptive(stats, ad_leads),
            Some(OffenseShard::AttackSpeed) => {
                stats.scale(Stat::AttackSpeed, self.shards.attack_speed_multiplier)
            }
            Some(OffenseShard::AbilityHaste) => {
                stats.add(Stat::AbilityHaste, self.shards.ability_haste)
            }
            None => {}
        }

        match self.runes.flex {
            Some(FlexShard::AdaptiveForce) => self.apply_adaptive(stats, ad_leads),
            Some(FlexShard::MovementSpeed) => {
                stats.add(Stat::MovementSpeed, self.shards.movement_speed)
            }
            None => {}
        }

        match self.runes.defense {
            Some(DefenseShard::Health) => stats.add(Stat::Health, self.shard_health()),
            Some(DefenseShard::Armor) => stats.add(Stat::Armor, self.shards.armor),
            Some(DefenseShard::MagicResist) => {
                stats.add(Stat::MagicResist, self.shards.magic_resist)
            }
            None => {}
        }
    }
}
