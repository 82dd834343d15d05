//! Combat math: auto-attack damage, DPS, time-to-kill

mod ability;

pub use ability::{estimate_ability_damage, AbilityEstimate, AbilityEstimator, ScalingStat, TooltipEstimator};

use crate::config::GameConstants;
use crate::defense::{damage_multiplier, Penetration};
use crate::stat_block::{FinalStats, Stat};

/// Outcome of resolving one build against a target's defenses.
#[derive(Debug, Clone, PartialEq)]
pub struct CombatResult {
    /// One non-critical auto attack, post-mitigation.
    pub auto_attack_damage: f64,
    /// One critical auto attack, post-mitigation.
    pub crit_damage: f64,
    /// Expected damage multiplier per attack from crit chance and crit
    /// damage: `1 + chance * (multiplier - 1)`.
    pub avg_crit_multiplier: f64,
    /// Attacks per second.
    pub attack_speed: f64,
    /// Expected post-mitigation damage per second from autos.
    pub dps: f64,
    /// Seconds of sustained autos to empty the target's health pool.
    /// Infinite when the build deals no damage; never NaN.
    pub time_to_kill: f64,
    /// Expected healing per second from life steal and omnivamp on autos.
    pub sustain_per_second: f64,
    /// Percent of physical damage the target mitigates after penetration.
    pub physical_reduction: f64,
    /// Percent of magic damage the target mitigates after penetration.
    pub magic_reduction: f64,
}

impl CombatResult {
    /// Get a summary string.
    pub fn summary(&self) -> String {
        let mut parts = vec![
            format!("{:.0} per auto", self.auto_attack_damage),
            format!("{:.1} DPS", self.dps),
        ];
        if self.time_to_kill.is_finite() {
            parts.push(format!("{:.1}s to kill", self.time_to_kill));
        } else {
            parts.push("cannot kill".to_string());
        }
        if self.sustain_per_second > 0.0 {
            parts.push(format!("{:.1} healed/s", self.sustain_per_second));
        }
        parts.join(", ")
    }
}

/// Resolve an attacker's final stats against a target's defenses.
///
/// Crit chance is clamped to [0, 100] before the expectation is taken, so
/// over-capped builds do not extrapolate past guaranteed crits.
pub fn compute_combat(
    attacker: &FinalStats,
    pen: &Penetration,
    target: &FinalStats,
    target_level: u8,
    constants: &GameConstants,
) -> CombatResult {
    let attack_damage = attacker.get(Stat::AttackDamage);
    let crit_chance = attacker.get(Stat::CritChance).clamp(0.0, 100.0);
    let crit_multiplier = attacker.get(Stat::CritDamage) / 100.0;
    let attack_speed = attacker.get(Stat::AttackSpeed);

    let effective_armor = pen.effective_armor(target.get(Stat::Armor), target_level, constants);
    let physical_multiplier = damage_multiplier(effective_armor);
    let effective_mr = pen.effective_magic_resist(target.get(Stat::MagicResist));
    let magic_multiplier = damage_multiplier(effective_mr);

    let auto_attack_damage = attack_damage * physical_multiplier;
    let crit_damage = attack_damage * crit_multiplier * physical_multiplier;
    let avg_crit_multiplier = 1.0 + crit_chance / 100.0 * (crit_multiplier - 1.0);

    let dps = auto_attack_damage * avg_crit_multiplier * attack_speed;
    let time_to_kill = if dps > 0.0 {
        target.get(Stat::Health) / dps
    } else {
        f64::INFINITY
    };

    let vamp = attacker.get(Stat::LifeSteal) + attacker.get(Stat::Omnivamp);
    let sustain_per_second = dps * vamp / 100.0;

    CombatResult {
        auto_attack_damage,
        crit_damage,
        avg_crit_multiplier,
        attack_speed,
        dps,
        time_to_kill,
        sustain_per_second,
        physical_reduction: (1.0 - physical_multiplier) * 100.0,
        magic_reduction: (1.0 - magic_multiplier) * 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stat_block::StatSet;

    fn final_stats(entries: &[(Stat, f64)]) -> FinalStats {
        let stats: StatSet = entries.iter().copied().collect();
        FinalStats::from_stats(stats)
    }

    fn attacker() -> FinalStats {
        final_stats(&[
            (Stat::AttackDamage, 100.0),
            (Stat::CritChance, 25.0),
            (Stat::CritDamage, 200.0),
            (Stat::AttackSpeed, 1.0),
        ])
    }

    #[test]
    fn dps_against_armored_target() {
        let target = final_stats(&[(Stat::Armor, 50.0), (Stat::Health, 1000.0)]);
        let result = compute_combat(
            &attacker(),
            &Penetration::default(),
            &target,
            9,
            &GameConstants::default(),
        );
        // avg crit 1.25, armor 50 passes 2/3 of damage
        assert!((result.avg_crit_multiplier - 1.25).abs() < 1e-9);
        assert!((result.auto_attack_damage - 100.0 * 2.0 / 3.0).abs() < 1e-9);
        assert!((result.dps - 83.333_333_333_333_33).abs() < 1e-6);
        assert!((result.time_to_kill - 1000.0 / 83.333_333_333_333_33).abs() < 1e-6);
    }

    #[test]
    fn zero_armor_passes_damage_through() {
        let target = final_stats(&[(Stat::Armor, 0.0), (Stat::Health, 500.0)]);
        let result = compute_combat(
            &attacker(),
            &Penetration::default(),
            &target,
            9,
            &GameConstants::default(),
        );
        assert!((result.auto_attack_damage - 100.0).abs() < 1e-9);
        assert!((result.physical_reduction - 0.0).abs() < 1e-9);
    }

    #[test]
    fn harmless_build_never_kills() {
        let harmless = final_stats(&[(Stat::AttackDamage, 0.0), (Stat::AttackSpeed, 1.0)]);
        let target = final_stats(&[(Stat::Health, 1000.0)]);
        let result = compute_combat(
            &harmless,
            &Penetration::default(),
            &target,
            9,
            &GameConstants::default(),
        );
        assert_eq!(result.dps, 0.0);
        assert!(result.time_to_kill.is_infinite());
        assert!(!result.time_to_kill.is_nan());
    }

    #[test]
    fn overcapped_crit_chance_clamps() {
        let capped = final_stats(&[
            (Stat::AttackDamage, 100.0),
            (Stat::CritChance, 140.0),
            (Stat::CritDamage, 200.0),
            (Stat::AttackSpeed, 1.0),
        ]);
        let target = final_stats(&[(Stat::Health, 1000.0)]);
        let result = compute_combat(
            &capped,
            &Penetration::default(),
            &target,
            9,
            &GameConstants::default(),
        );
        // 100% crit: every attack is a crit, no extrapolation beyond
        assert!((result.avg_crit_multiplier - 2.0).abs() < 1e-9);
    }

    #[test]
    fn sustain_follows_dps() {
        let vampiric = final_stats(&[
            (Stat::AttackDamage, 100.0),
            (Stat::AttackSpeed, 1.0),
            (Stat::CritDamage, 175.0),
            (Stat::LifeSteal, 10.0),
        ]);
        let target = final_stats(&[(Stat::Health, 1000.0)]);
        let result = compute_combat(
            &vampiric,
            &Penetration::default(),
            &target,
            9,
            &GameConstants::default(),
        );
        assert!((result.sustain_per_second - result.dps * 0.10).abs() < 1e-9);
    }

    #[test]
    fn summary_mentions_unkillable_targets() {
        let harmless = final_stats(&[(Stat::AttackDamage, 0.0)]);
        let target = final_stats(&[(Stat::Health, 1000.0)]);
        let result = compute_combat(
            &harmless,
            &Penetration::default(),
            &target,
            9,
            &GameConstants::default(),
        );
        assert!(result.summary().contains("cannot kill"));
    }
}
