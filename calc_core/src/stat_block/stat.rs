//! Canonical stat vocabulary and item bonus keys

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Canonical engine stat names.
///
/// `*PerLevel` variants are linear growth coefficients consumed by the level
/// scaling formula; they are never read as stats in their own right.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Stat {
    Health,
    HealthPerLevel,
    Mana,
    ManaPerLevel,
    Armor,
    ArmorPerLevel,
    MagicResist,
    MagicResistPerLevel,
    AttackDamage,
    AttackDamagePerLevel,
    AttackSpeed,
    AttackSpeedPerLevel,
    CritChance,
    CritChancePerLevel,
    HealthRegen,
    HealthRegenPerLevel,
    ManaRegen,
    ManaRegenPerLevel,
    MovementSpeed,
    AttackRange,
    AbilityPower,
    AbilityHaste,
    CritDamage,
    Lethality,
    ArmorPenetrationPercent,
    MagicPenetrationFlat,
    MagicPenetrationPercent,
    LifeSteal,
    Omnivamp,
    HealAndShieldPower,
}

impl Stat {
    /// Whether this is a growth coefficient rather than a directly-held stat.
    pub fn is_growth(self) -> bool {
        matches!(
            self,
            Stat::HealthPerLevel
                | Stat::ManaPerLevel
                | Stat::ArmorPerLevel
                | Stat::MagicResistPerLevel
                | Stat::AttackDamagePerLevel
                | Stat::AttackSpeedPerLevel
                | Stat::CritChancePerLevel
                | Stat::HealthRegenPerLevel
                | Stat::ManaRegenPerLevel
        )
    }
}

/// Key for a single named stat delta on an item.
///
/// The string form is the canonical stat name, with percent modifiers carrying
/// a `Percent` suffix: `"attackDamage"` parses to `Flat(AttackDamage)` while
/// `"attackDamagePercent"` parses to `Percent(AttackDamage)`. Stats whose
/// canonical name itself ends in `Percent` (the penetration percentages) win
/// the full-name match and stay `Flat`.
///
/// Ordering note: all `Flat` keys sort before all `Percent` keys, so inside a
/// single item's delta map flat bonuses fold before percent bonuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BonusKey {
    Flat(Stat),
    Percent(Stat),
}

impl BonusKey {
    /// The stat this key ultimately modifies.
    pub fn stat(self) -> Stat {
        match self {
            BonusKey::Flat(s) | BonusKey::Percent(s) => s,
        }
    }
}

/// Error parsing a canonical bonus key string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBonusKeyError(pub String);

impl fmt::Display for ParseBonusKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown canonical stat key: {}", self.0)
    }
}

impl std::error::Error for ParseBonusKeyError {}

impl FromStr for BonusKey {
    type Err = ParseBonusKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(stat) = Stat::from_str(s) {
            return Ok(BonusKey::Flat(stat));
        }
        if let Some(base) = s.strip_suffix("Percent") {
            if let Ok(stat) = Stat::from_str(base) {
                return Ok(BonusKey::Percent(stat));
            }
        }
        Err(ParseBonusKeyError(s.to_string()))
    }
}

impl fmt::Display for BonusKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BonusKey::Flat(s) => write!(f, "{s}"),
            BonusKey::Percent(s) => write!(f, "{s}Percent"),
        }
    }
}

impl Serialize for BonusKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BonusKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
