//! Penetration aggregation and effective-resistance stages

use crate::config::GameConstants;
use crate::stat_block::{BonusKey, Stat, StatSet};
use crate::types::Item;

/// A build's resolved penetration values.
///
/// Flat penetration (lethality, flat magic pen) sums across the build and is
/// read straight off the aggregated stat set. Percent penetration does NOT
/// stack: the strongest single item wins, so it is aggregated here as a
/// maximum over the inventory rather than in the stat fold.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Penetration {
    pub lethality: f64,
    pub armor_pen_percent: f64,
    pub magic_pen_flat: f64,
    pub magic_pen_percent: f64,
    /// Percent armor reduction from abilities (shred effects). Applies
    /// before any penetration; item resolution leaves it at 0 and the
    /// caller sets it per encounter.
    pub percent_reduction: f64,
    /// Flat armor penetration from sources other than lethality, applied
    /// after lethality without level scaling. Item resolution leaves it
    /// at 0.
    pub flat_pen: f64,
}

impl Penetration {
    /// Aggregate penetration from the folded stat set and the inventory.
    /// Ability-sourced reduction fields start at 0.
    pub fn resolve(stats: &StatSet, items: &[Item]) -> Self {
        let item_max = |key: BonusKey| {
            items
                .iter()
                .filter_map(|item| item.stats.get(&key).copied())
                .fold(0.0_f64, f64::max)
        };
        Penetration {
            lethality: stats.get(Stat::Lethality),
            armor_pen_percent: stats
                .get(Stat::ArmorPenetrationPercent)
                .max(item_max(BonusKey::Flat(Stat::ArmorPenetrationPercent))),
            magic_pen_flat: stats.get(Stat::MagicPenetrationFlat),
            magic_pen_percent: stats
                .get(Stat::MagicPenetrationPercent)
                .max(item_max(BonusKey::Flat(Stat::MagicPenetrationPercent))),
            ..Default::default()
        }
    }

    /// Flat armor penetration granted by lethality against a target level:
    /// `lethality * (base + level_scale * target_level / max_level)`.
    pub fn flat_armor_pen(&self, target_level: u8, constants: &GameConstants) -> f64 {
        let leth = &constants.lethality;
        let max_level = f64::from(constants.growth.max_level);
        self.lethality * (leth.base + leth.level_scale * f64::from(target_level) / max_level)
    }

    /// Armor remaining after reduction and penetration, staged in order:
    /// percent reduction scales the value down, then percent penetration,
    /// then lethality-derived flat penetration subtracts, then non-lethality
    /// flat penetration. The result clamps at 0 after each stage;
    /// penetration never pushes a resistance negative.
    pub fn effective_armor(&self, armor: f64, target_level: u8, constants: &GameConstants) -> f64 {
        let reduced = (armor * (1.0 - self.percent_reduction / 100.0)).max(0.0);
        let after_percent = (reduced * (1.0 - self.armor_pen_percent / 100.0)).max(0.0);
        let after_lethality =
            (after_percent - self.flat_armor_pen(target_level, constants)).max(0.0);
        (after_lethality - self.flat_pen).max(0.0)
    }

    /// Magic resist remaining after penetration: percent penetration, then
    /// flat, clamping at 0 after each stage.
    pub fn effective_magic_resist(&self, magic_resist: f64) -> f64 {
        let after_percent = (magic_resist * (1.0 - self.magic_pen_percent / 100.0)).max(0.0);
        (after_percent - self.magic_pen_flat).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn pen_item(id: &str, key: BonusKey, value: f64) -> Item {
        Item {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            plaintext: String::new(),
            gold: Default::default(),
            tags: vec![],
            stats: BTreeMap::from([(key, value)]),
            passives: vec![],
            unmapped: BTreeMap::new(),
        }
    }

    #[test]
    fn percent_pen_takes_the_maximum_across_items() {
        let items = vec![
            pen_item("1", BonusKey::Flat(Stat::ArmorPenetrationPercent), 10.0),
            pen_item("2", BonusKey::Flat(Stat::ArmorPenetrationPercent), 25.0),
            pen_item("3", BonusKey::Flat(Stat::ArmorPenetrationPercent), 15.0),
        ];
        let pen = Penetration::resolve(&StatSet::default(), &items);
        assert!((pen.armor_pen_percent - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn flat_pen_reads_the_summed_stat() {
        let mut stats = StatSet::default();
        stats.set(Stat::Lethality, 18.0);
        stats.set(Stat::MagicPenetrationFlat, 15.0);
        let pen = Penetration::resolve(&stats, &[]);
        assert!((pen.lethality - 18.0).abs() < f64::EPSILON);
        assert!((pen.magic_pen_flat - 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn lethality_scales_with_target_level() {
        let constants = GameConstants::default();
        let pen = Penetration {
            lethality: 10.0,
            ..Default::default()
        };
        // level 18: 10 * (0.6 + 0.4) = 10
        assert!((pen.flat_armor_pen(18, &constants) - 10.0).abs() < 1e-9);
        // level 9: 10 * (0.6 + 0.4 * 0.5) = 8
        assert!((pen.flat_armor_pen(9, &constants) - 8.0).abs() < 1e-9);
    }

    #[test]
    fn armor_stages_percent_then_flat() {
        let constants = GameConstants::default();
        let pen = Penetration {
            lethality: 10.0,
            armor_pen_percent: 30.0,
            ..Default::default()
        };
        // 100 * 0.7 = 70, minus 10 * 1.0 at level 18 = 60
        assert!((pen.effective_armor(100.0, 18, &constants) - 60.0).abs() < 1e-9);
    }

    #[test]
    fn armor_stages_reduction_before_pen_and_flat_pen_last() {
        let constants = GameConstants::default();
        let pen = Penetration {
            lethality: 10.0,
            armor_pen_percent: 25.0,
            percent_reduction: 20.0,
            flat_pen: 5.0,
            ..Default::default()
        };
        // 100 * 0.8 = 80, * 0.75 = 60, - 10 (level 18) = 50, - 5 = 45
        assert!((pen.effective_armor(100.0, 18, &constants) - 45.0).abs() < 1e-9);
    }

    #[test]
    fn item_resolution_carries_no_ability_reduction() {
        let pen = Penetration::resolve(&StatSet::default(), &[]);
        assert_eq!(pen.percent_reduction, 0.0);
        assert_eq!(pen.flat_pen, 0.0);
    }

    #[test]
    fn armor_clamps_at_zero() {
        let constants = GameConstants::default();
        let pen = Penetration {
            lethality: 50.0,
            ..Default::default()
        };
        assert_eq!(pen.effective_armor(20.0, 18, &constants), 0.0);
    }

    #[test]
    fn magic_resist_stages_and_clamps() {
        let pen = Penetration {
            magic_pen_flat: 18.0,
            magic_pen_percent: 40.0,
            ..Default::default()
        };
        // 50 * 0.6 = 30, minus 18 = 12
        assert!((pen.effective_magic_resist(50.0) - 12.0).abs() < 1e-9);
        assert_eq!(pen.effective_magic_resist(10.0), 0.0);
    }
}
