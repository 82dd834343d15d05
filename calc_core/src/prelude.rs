//! Prelude module for convenient imports
//!
//! ```rust
//! use calc_core::prelude::*;
//! ```

// Core types
pub use crate::stat_block::{BonusKey, FinalStats, Stat, StatSet};
pub use crate::types::{
    BuffState, Champion, DefenseShard, FlexShard, Item, OffenseShard, ResourceType, RuneSelection,
};

// Sessions
pub use crate::session::{BuildEvaluation, BuildEvent, BuildSession};

// Damage system
pub use crate::damage::{compute_combat, CombatResult, TooltipEstimator};

// Defense
pub use crate::defense::{damage_multiplier, Penetration};

// Data and config
pub use crate::config::EngineConfig;
pub use crate::data::GameData;
pub use crate::error::{DataError, SessionError};
