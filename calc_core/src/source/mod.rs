//! Stat sources: everything that contributes numbers to a build's stat set
//!
//! Sources are applied in ascending priority order; within one priority the
//! insertion order is kept. Base stats seed the set, then items, runes and
//! objective buffs layer on top.

mod base_stats;
mod buffs;
mod items;
mod runes;

pub use base_stats::{base_attack_speed, level_scale, BaseStatsSource};
pub use buffs::BuffSource;
pub use items::ItemSource;
pub use runes::RuneSource;

use crate::stat_block::StatSet;

/// Trait for anything that contributes stats to a build.
pub trait StatSource: Send + Sync {
    /// Unique identifier for this source.
    fn id(&self) -> &str;

    /// Priority for application order (higher = applied later).
    /// - Base stats: -100
    /// - Items: 0
    /// - Runes: 100
    /// - Objective buffs: 200
    fn priority(&self) -> i32 {
        0
    }

    /// Apply this source's contribution to the running stat set.
    fn apply(&self, stats: &mut StatSet);
}

/// Apply a set of sources in priority order. The sort is stable, so sources
/// sharing a priority (items) keep their insertion order.
pub fn apply_all(sources: &mut Vec<Box<dyn StatSource>>, stats: &mut StatSet) {
    sources.sort_by_key(|s| s.priority());
    for source in sources.iter() {
        source.apply(stats);
    }
}
