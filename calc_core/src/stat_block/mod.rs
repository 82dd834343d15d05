//! StatSet - canonical stat storage and the derived final snapshot

mod final_stats;
mod stat;

pub use final_stats::{EffectiveHealth, FinalStats};
pub use stat::{BonusKey, ParseBonusKeyError, Stat};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A set of canonical stat values. Absent entries read as 0.
///
/// This is the working value every pipeline stage folds over; it carries no
/// derived fields (see [`FinalStats`] for those).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatSet(BTreeMap<Stat, f64>);

impl StatSet {
    /// Create an empty stat set.
    pub fn new() -> Self {
        StatSet::default()
    }

    /// Read a stat, defaulting to 0 when absent.
    pub fn get(&self, stat: Stat) -> f64 {
        self.0.get(&stat).copied().unwrap_or(0.0)
    }

    /// Whether the stat has an explicit entry.
    pub fn contains(&self, stat: Stat) -> bool {
        self.0.contains_key(&stat)
    }

    /// Set a stat to an exact value.
    pub fn set(&mut self, stat: Stat, value: f64) {
        self.0.insert(stat, value);
    }

    /// Add a flat delta, creating the entry at 0 if absent.
    pub fn add(&mut self, stat: Stat, delta: f64) {
        *self.0.entry(stat).or_insert(0.0) += delta;
    }

    /// Multiply an existing stat. No-op when the entry is absent.
    pub fn scale(&mut self, stat: Stat, factor: f64) {
        if let Some(value) = self.0.get_mut(&stat) {
            *value *= factor;
        }
    }

    /// Iterate entries in stat order.
    pub fn iter(&self) -> impl Iterator<Item = (Stat, f64)> + '_ {
        self.0.iter().map(|(s, v)| (*s, *v))
    }

    /// Number of explicit entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set has no explicit entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Stat, f64)> for StatSet {
    fn from_iter<I: IntoIterator<Item = (Stat, f64)>>(iter: I) -> Self {
        StatSet(iter.into_iter().collect())
    }
}
