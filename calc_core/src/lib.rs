//! calc_core - Champion build calculation engine
//!
//! This library provides:
//! - GameData: vendor game data converted to a canonical stat vocabulary
//! - BuildSession: an immutable build reduced over events
//! - Stat sources: base stats, items, runes and objective buffs folded in
//!   priority order
//! - Penetration and damage resolution: effective resistances, DPS and
//!   time-to-kill against a target build

pub mod config;
pub mod convert;
pub mod damage;
pub mod data;
pub mod defense;
pub mod error;
pub mod prelude;
pub mod session;
pub mod source;
pub mod stat_block;
pub mod types;

// Re-export core types for convenience
pub use config::{EngineConfig, GameConstants, GoldValueTable, StatMappings};
pub use convert::{convert_champion, convert_item, convert_stats, RawChampion, RawItem};
pub use damage::{
    compute_combat, estimate_ability_damage, AbilityEstimate, AbilityEstimator, CombatResult,
    TooltipEstimator,
};
pub use data::GameData;
pub use defense::{damage_multiplier, Penetration};
pub use error::{DataError, SessionError};
pub use session::{BuildEvaluation, BuildEvent, BuildSession};
pub use source::{
    BaseStatsSource, BuffSource, ItemSource, RuneSource, StatSource,
};
pub use stat_block::{BonusKey, FinalStats, Stat, StatSet};
pub use types::{
    BuffState, Champion, DefenseShard, FlexShard, Item, OffenseShard, ResourceType, RuneSelection,
};
