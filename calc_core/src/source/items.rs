//! Item stat contributions

use super::StatSource;
use crate::config::PassiveTable;
use crate::stat_block::{BonusKey, Stat, StatSet};
use crate::types::Item;

/// One inventory slot's contribution.
///
/// An item folds atomically: all of its flat bonuses first, then its percent
/// bonuses against the running value (the delta map's key order guarantees
/// this). Items themselves fold in inventory order, so two builds with the
/// same items in a different order can produce different percent results.
pub struct ItemSource {
    item: Item,
    passives: PassiveTable,
    base_attack_speed: f64,
}

impl ItemSource {
    pub fn new(item: Item, passives: PassiveTable, base_attack_speed: f64) -> Self {
        ItemSource {
            item,
            passives,
            base_attack_speed,
        }
    }
}

impl StatSource for ItemSource {
    fn id(&self) -> &str {
        &self.item.id
    }

    fn priority(&self) -> i32 {
        0 // Items apply after base stats, in inventory order
    }

    fn apply(&self, stats: &mut StatSet) {
        for (&key, &value) in self.item.stats.iter() {
            match key {
                // Attack speed bonuses are percent points of the level-0
                // base, added to the leveled value. Both key forms carry
                // the same units, so neither goes through the generic fold.
                BonusKey::Flat(Stat::AttackSpeed) | BonusKey::Percent(Stat::AttackSpeed) => {
                    stats.add(Stat::AttackSpeed, self.base_attack_speed * value / 100.0);
                }
                // Percent penetration never sums across items; the defense
                // resolver takes the maximum over the inventory instead.
                BonusKey::Flat(Stat::ArmorPenetrationPercent)
                | BonusKey::Flat(Stat::MagicPenetrationPercent) => {}
                BonusKey::Flat(stat) => stats.add(stat, value),
                BonusKey::Percent(stat) => stats.scale(stat, 1.0 + value / 100.0),
            }
        }

        for passive in &self.item.passives {
            if let Some(deltas) = self.passives.get(&passive.name) {
                for delta in deltas {
                    stats.add(delta.stat, delta.value);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Passive;
    use std::collections::BTreeMap;

    fn item(id: &str, stats: &[(BonusKey, f64)]) -> Item {
        Item {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            plaintext: String::new(),
            gold: Default::default(),
            tags: vec![],
            stats: stats.iter().copied().collect(),
            passives: vec![],
            unmapped: BTreeMap::new(),
        }
    }

    fn apply(stats: &mut StatSet, item: Item) {
        ItemSource::new(item, PassiveTable::default(), 0.625).apply(stats);
    }

    #[test]
    fn flat_folds_before_percent_within_one_item() {
        let mut stats = StatSet::default();
        stats.set(Stat::AttackDamage, 60.0);
        apply(
            &mut stats,
            item(
                "1",
                &[
                    (BonusKey::Percent(Stat::AttackDamage), 20.0),
                    (BonusKey::Flat(Stat::AttackDamage), 10.0),
                ],
            ),
        );
        // (60 + 10) * 1.20, never 60 * 1.20 + 10
        assert!((stats.get(Stat::AttackDamage) - 84.0).abs() < 1e-9);
    }

    #[test]
    fn items_fold_in_inventory_order() {
        let mut stats = StatSet::default();
        stats.set(Stat::AttackDamage, 60.0);
        apply(
            &mut stats,
            item("1", &[(BonusKey::Percent(Stat::AttackDamage), 20.0)]),
        );
        apply(
            &mut stats,
            item("2", &[(BonusKey::Flat(Stat::AttackDamage), 10.0)]),
        );
        // 60 * 1.20 + 10 = 82, not (60 + 10) * 1.20 = 84
        assert!((stats.get(Stat::AttackDamage) - 82.0).abs() < 1e-9);
    }

    #[test]
    fn percent_modifier_on_absent_stat_is_noop() {
        let mut stats = StatSet::default();
        apply(
            &mut stats,
            item("1", &[(BonusKey::Percent(Stat::Health), 10.0)]),
        );
        assert!(!stats.contains(Stat::Health));
    }

    #[test]
    fn attack_speed_bonus_is_ratio_of_base() {
        let mut stats = StatSet::default();
        stats.set(Stat::AttackSpeed, 0.75); // leveled value
        apply(
            &mut stats,
            item("1", &[(BonusKey::Flat(Stat::AttackSpeed), 40.0)]),
        );
        // +40% of the 0.625 base, on top of the leveled value
        assert!((stats.get(Stat::AttackSpeed) - (0.75 + 0.625 * 0.40)).abs() < 1e-9);
    }

    #[test]
    fn percent_keyed_attack_speed_is_also_a_ratio_of_base() {
        let mut stats = StatSet::default();
        stats.set(Stat::AttackSpeed, 0.75);
        apply(
            &mut stats,
            item("1", &[(BonusKey::Percent(Stat::AttackSpeed), 40.0)]),
        );
        // Same units as the flat form: never a multiplier on the leveled
        // value.
        assert!((stats.get(Stat::AttackSpeed) - (0.75 + 0.625 * 0.40)).abs() < 1e-9);
    }

    #[test]
    fn percent_pen_does_not_sum_in_the_fold() {
        let mut stats = StatSet::default();
        stats.set(Stat::ArmorPenetrationPercent, 0.0);
        apply(
            &mut stats,
            item("1", &[(BonusKey::Flat(Stat::ArmorPenetrationPercent), 30.0)]),
        );
        assert_eq!(stats.get(Stat::ArmorPenetrationPercent), 0.0);
    }

    #[test]
    fn known_passive_applies_its_deltas() {
        let mut stats = StatSet::default();
        stats.set(Stat::CritDamage, 175.0);
        let mut it = item("3031", &[]);
        it.passives.push(Passive {
            name: "Perfection".to_string(),
            description: "Perfection: bonus crit damage".to_string(),
        });
        apply(&mut stats, it);
        assert!((stats.get(Stat::CritDamage) - 210.0).abs() < 1e-9);
    }

    #[test]
    fn unknown_passive_is_ignored() {
        let mut stats = StatSet::default();
        let mut it = item("9999", &[]);
        it.passives.push(Passive {
            name: "Unseen Threat".to_string(),
            description: String::new(),
        });
        apply(&mut stats, it);
        assert!(stats.is_empty());
    }
}
