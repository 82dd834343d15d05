//! FinalStats - the fully-resolved snapshot handed to consumers

use super::{Stat, StatSet};
use serde::{Deserialize, Serialize};

/// Effective health against each damage school.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EffectiveHealth {
    pub physical: f64,
    pub magical: f64,
}

/// A champion's stats after level growth, items, runes and buffs, plus the
/// derived display values. Pure function of a build session; recomputed on
/// every mutation, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalStats {
    pub stats: StatSet,
    /// Cooldown reduction derived from ability haste: `AH / (AH + 100) * 100`.
    pub cooldown_reduction: f64,
    pub effective_health: EffectiveHealth,
}

impl FinalStats {
    /// Derive the snapshot from a resolved stat set.
    pub fn from_stats(stats: StatSet) -> Self {
        let haste = stats.get(Stat::AbilityHaste);
        let health = stats.get(Stat::Health);
        FinalStats {
            cooldown_reduction: haste / (haste + 100.0) * 100.0,
            effective_health: EffectiveHealth {
                physical: health * (1.0 + stats.get(Stat::Armor) / 100.0),
                magical: health * (1.0 + stats.get(Stat::MagicResist) / 100.0),
            },
            stats,
        }
    }

    /// Read a stat from the snapshot, defaulting to 0.
    pub fn get(&self, stat: Stat) -> f64 {
        self.stats.get(stat)
    }

    /// Cooldown of an ability at this snapshot's haste.
    pub fn cooldown(&self, base_cooldown: f64) -> f64 {
        let haste = self.stats.get(Stat::AbilityHaste);
        base_cooldown * (100.0 / (100.0 + haste))
    }

    /// Healing received after heal-and-shield power.
    pub fn healing(&self, base_heal: f64) -> f64 {
        base_heal * (1.0 + self.stats.get(Stat::HealAndShieldPower) / 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cdr_from_haste() {
        let mut stats = StatSet::new();
        stats.set(Stat::AbilityHaste, 100.0);
        let finals = FinalStats::from_stats(stats);
        // 100 haste = 50% CDR
        assert!((finals.cooldown_reduction - 50.0).abs() < 1e-9);
        assert!((finals.cooldown(10.0) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn zero_haste_means_zero_cdr() {
        let finals = FinalStats::from_stats(StatSet::new());
        assert!((finals.cooldown_reduction - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn effective_health() {
        let mut stats = StatSet::new();
        stats.set(Stat::Health, 1000.0);
        stats.set(Stat::Armor, 100.0);
        stats.set(Stat::MagicResist, 50.0);
        let finals = FinalStats::from_stats(stats);
        assert!((finals.effective_health.physical - 2000.0).abs() < 1e-9);
        assert!((finals.effective_health.magical - 1500.0).abs() < 1e-9);
    }
}
