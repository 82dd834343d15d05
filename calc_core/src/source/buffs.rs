//! Objective buff contributions

use super::StatSource;
use crate::config::BuffTable;
use crate::stat_block::{Stat, StatSet};
use crate::types::BuffState;

/// Objective buffs: a flat major buff plus a stacking minor buff.
pub struct BuffSource {
    buffs: BuffState,
    table: BuffTable,
}

impl BuffSource {
    pub fn new(buffs: BuffState, table: BuffTable) -> Self {
        BuffSource { buffs, table }
    }
}

impl StatSource for BuffSource {
    fn id(&self) -> &str {
        "objective_buffs"
    }

    fn priority(&self) -> i32 {
        200 // Buffs apply last
    }

    fn apply(&self, stats: &mut StatSet) {
        if self.buffs.baron {
            stats.add(Stat::AttackDamage, self.table.baron_attack_damage);
            stats.add(Stat::AbilityPower, self.table.baron_ability_power);
        }
        if self.buffs.dragon_stacks > 0 {
            let stacks = f64::from(self.buffs.dragon_stacks);
            stats.add(Stat::AttackDamage, self.table.dragon_attack_damage * stacks);
            stats.add(Stat::AbilityPower, self.table.dragon_ability_power * stacks);
            stats.add(Stat::Armor, self.table.dragon_armor * stacks);
            stats.add(Stat::MagicResist, self.table.dragon_magic_resist * stacks);
        }
    }
}
