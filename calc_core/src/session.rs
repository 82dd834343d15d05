//! Build sessions: immutable state plus an event reducer
//!
//! A session is a value. Applying an event returns a new session and leaves
//! the old one intact, so callers can hold snapshots for comparison views
//! without defensive copying.

use crate::config::EngineConfig;
use crate::damage::{compute_combat, CombatResult};
use crate::defense::Penetration;
use crate::error::SessionError;
use crate::source::{
    apply_all, base_attack_speed, BaseStatsSource, BuffSource, ItemSource, RuneSource, StatSource,
};
use crate::stat_block::{FinalStats, Stat, StatSet};
use crate::types::{BuffState, Champion, DefenseShard, FlexShard, Item, OffenseShard, RuneSelection};
use serde::{Deserialize, Serialize};

/// Rune page slot counts.
const PRIMARY_RUNE_SLOTS: usize = 3;
const SECONDARY_RUNE_SLOTS: usize = 2;

/// One champion build: champion, level, inventory, runes and buffs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildSession {
    pub champion: Champion,
    pub level: u8,
    pub items: Vec<Item>,
    pub runes: RuneSelection,
    pub buffs: BuffState,
}

/// State transitions a session accepts.
#[derive(Debug, Clone)]
pub enum BuildEvent {
    /// Clamped to the valid level range.
    SetLevel(u8),
    /// Fails when the inventory is full.
    AddItem(Item),
    /// Out-of-range slots are ignored.
    RemoveItem(usize),
    ClearItems,
    SetKeystone(Option<String>),
    /// Truncated to the primary row count.
    SetPrimaryRunes(Vec<String>),
    /// Truncated to the secondary row count.
    SetSecondaryRunes(Vec<String>),
    SetShards {
        offense: Option<OffenseShard>,
        flex: Option<FlexShard>,
        defense: Option<DefenseShard>,
    },
    SetBaron(bool),
    SetDragonStacks(u32),
}

/// A fully-resolved build: final stats plus penetration.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildEvaluation {
    pub stats: FinalStats,
    pub penetration: Penetration,
}

impl BuildSession {
    /// A fresh level-1 session with empty inventory, runes and buffs.
    pub fn new(champion: Champion) -> Self {
        BuildSession {
            champion,
            level: 1,
            items: Vec::new(),
            runes: RuneSelection::default(),
            buffs: BuffState::default(),
        }
    }

    /// Reduce an event into a new session. The only refusable event is an
    /// item add against a full inventory; everything else normalizes its
    /// input instead of failing.
    pub fn apply(&self, event: BuildEvent, config: &EngineConfig) -> Result<Self, SessionError> {
        let mut next = self.clone();
        match event {
            BuildEvent::SetLevel(level) => {
                let growth = &config.constants.growth;
                next.level = level.clamp(growth.min_level, growth.max_level);
            }
            BuildEvent::AddItem(item) => {
                let capacity = config.constants.items.max_items;
                if next.items.len() >= capacity {
                    return Err(SessionError::ItemSlotsFull { capacity });
                }
                next.items.push(item);
            }
            BuildEvent::RemoveItem(slot) => {
                if slot < next.items.len() {
                    next.items.remove(slot);
                }
            }
            BuildEvent::ClearItems => next.items.clear(),
            BuildEvent::SetKeystone(keystone) => next.runes.keystone = keystone,
            BuildEvent::SetPrimaryRunes(mut runes) => {
                runes.truncate(PRIMARY_RUNE_SLOTS);
                next.runes.primary = runes;
            }
            BuildEvent::SetSecondaryRunes(mut runes) => {
                runes.truncate(SECONDARY_RUNE_SLOTS);
                next.runes.secondary = runes;
            }
            BuildEvent::SetShards {
                offense,
                flex,
                defense,
            } => {
                next.runes.offense = offense;
                next.runes.flex = flex;
                next.runes.defense = defense;
            }
            BuildEvent::SetBaron(baron) => next.buffs.baron = baron,
            BuildEvent::SetDragonStacks(stacks) => next.buffs.dragon_stacks = stacks,
        }
        Ok(next)
    }

    fn sources(&self, config: &EngineConfig) -> Vec<Box<dyn StatSource>> {
        let base_as = base_attack_speed(&self.champion, &config.constants.combat);
        let mut sources: Vec<Box<dyn StatSource>> = Vec::with_capacity(self.items.len() + 3);
        sources.push(Box::new(BaseStatsSource::new(
            self.champion.clone(),
            self.level,
            config.constants.clone(),
        )));
        for item in &self.items {
            sources.push(Box::new(ItemSource::new(
                item.clone(),
                config.passives.clone(),
                base_as,
            )));
        }
        sources.push(Box::new(RuneSource::new(
            self.runes.clone(),
            self.level,
            config.shards.clone(),
            config.constants.growth.clone(),
        )));
        sources.push(Box::new(BuffSource::new(self.buffs, config.buffs.clone())));
        sources
    }

    /// Run the full pipeline: fold all sources in priority order, resolve
    /// penetration, and derive the final stat sheet.
    pub fn evaluate(&self, config: &EngineConfig) -> BuildEvaluation {
        let mut sources = self.sources(config);
        let mut stats = StatSet::default();
        tracing::debug!(
            champion = %self.champion.id,
            level = self.level,
            sources = sources.len(),
            "aggregating build stats"
        );
        apply_all(&mut sources, &mut stats);

        let penetration = Penetration::resolve(&stats, &self.items);
        // The fold leaves percent pen at its seeded value; write the
        // resolved maximums back so the stat sheet shows what applies.
        stats.set(Stat::ArmorPenetrationPercent, penetration.armor_pen_percent);
        stats.set(Stat::MagicPenetrationPercent, penetration.magic_pen_percent);

        BuildEvaluation {
            stats: FinalStats::from_stats(stats),
            penetration,
        }
    }

    pub fn final_stats(&self, config: &EngineConfig) -> FinalStats {
        self.evaluate(config).stats
    }

    pub fn penetration(&self, config: &EngineConfig) -> Penetration {
        self.evaluate(config).penetration
    }

    /// Total gold cost of the inventory.
    pub fn total_cost(&self) -> u32 {
        self.items.iter().map(|item| item.gold.total).sum()
    }

    /// Gold value of the inventory's stat deltas relative to its cost, as a
    /// percent (100 = stats worth exactly the gold paid). An empty or free
    /// inventory reports 0, never NaN.
    pub fn gold_efficiency(&self, config: &EngineConfig) -> f64 {
        let cost = f64::from(self.total_cost());
        if cost <= 0.0 {
            return 0.0;
        }
        let value: f64 = self
            .items
            .iter()
            .flat_map(|item| item.stats.iter())
            .map(|(&key, &amount)| config.gold_values.value(key) * amount)
            .sum();
        value / cost * 100.0
    }

    /// Resolve this build's autos against another build's defenses.
    pub fn combat_against(&self, target: &BuildSession, config: &EngineConfig) -> CombatResult {
        let attacker = self.evaluate(config);
        let defender = target.final_stats(config);
        compute_combat(
            &attacker.stats,
            &attacker.penetration,
            &defender,
            target.level,
            &config.constants,
        )
    }
}
