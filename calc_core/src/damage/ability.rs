//! Ability damage estimation from tooltip text
//!
//! Tooltip text is display prose, not structured data, so everything here is
//! a heuristic: the first number outside parentheses is taken as the base
//! damage, and a parenthesized group naming AP or AD supplies the scaling
//! ratio. The [`AbilityEstimator`] trait keeps this guesswork behind a seam
//! so a caller with real spell data can substitute an exact implementation.

use crate::config::GameConstants;
use crate::defense::{damage_multiplier, Penetration};
use crate::stat_block::{FinalStats, Stat};

/// Which offensive stat an ability scales with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalingStat {
    AbilityPower,
    AttackDamage,
}

/// A parsed ability damage line: `base + ratio * scaling stat`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AbilityEstimate {
    pub base: f64,
    pub ratio: f64,
    pub scaling: Option<ScalingStat>,
}

/// Produces damage estimates from ability tooltips.
pub trait AbilityEstimator {
    /// Parse a tooltip into a damage estimate. `None` when no damage number
    /// can be found at all.
    fn estimate(&self, tooltip: &str) -> Option<AbilityEstimate>;
}

/// The built-in heuristic tooltip scanner.
#[derive(Debug, Clone, Copy, Default)]
pub struct TooltipEstimator;

impl AbilityEstimator for TooltipEstimator {
    fn estimate(&self, tooltip: &str) -> Option<AbilityEstimate> {
        let base = first_number(&strip_paren_groups(tooltip))?.0;

        let mut ratio = 0.0;
        let mut scaling = None;
        for group in paren_groups(tooltip) {
            let lower = group.to_ascii_lowercase();
            let stat = if contains_word(&lower, "ap") {
                Some(ScalingStat::AbilityPower)
            } else if contains_word(&lower, "ad") {
                Some(ScalingStat::AttackDamage)
            } else {
                None
            };
            if let Some(stat) = stat {
                if let Some((value, is_percent)) = first_number(group) {
                    ratio = if is_percent { value / 100.0 } else { value };
                    scaling = Some(stat);
                    break;
                }
            }
        }

        // No ratio group: fall back to a bare mention so the mitigation
        // path is still chosen sensibly.
        if scaling.is_none() {
            let lower = tooltip.to_ascii_lowercase();
            if contains_word(&lower, "ap") || lower.contains("ability power") {
                scaling = Some(ScalingStat::AbilityPower);
            } else if contains_word(&lower, "ad") || lower.contains("attack damage") {
                scaling = Some(ScalingStat::AttackDamage);
            }
        }

        Some(AbilityEstimate {
            base,
            ratio,
            scaling,
        })
    }
}

/// Mitigated damage for one ability cast. AD-scaling abilities go through
/// the physical path, everything else through the magic path.
pub fn estimate_ability_damage(
    estimate: &AbilityEstimate,
    attacker: &FinalStats,
    pen: &Penetration,
    target: &FinalStats,
    target_level: u8,
    constants: &GameConstants,
) -> f64 {
    let raw = match estimate.scaling {
        Some(ScalingStat::AbilityPower) => {
            estimate.base + estimate.ratio * attacker.get(Stat::AbilityPower)
        }
        Some(ScalingStat::AttackDamage) => {
            estimate.base + estimate.ratio * attacker.get(Stat::AttackDamage)
        }
        None => estimate.base,
    };
    let multiplier = match estimate.scaling {
        Some(ScalingStat::AttackDamage) => {
            let armor = pen.effective_armor(target.get(Stat::Armor), target_level, constants);
            damage_multiplier(armor)
        }
        _ => {
            let mr = pen.effective_magic_resist(target.get(Stat::MagicResist));
            damage_multiplier(mr)
        }
    };
    raw * multiplier
}

/// First number in the text, with a flag for a trailing percent sign.
fn first_number(text: &str) -> Option<(f64, bool)> {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_digit() {
            let start = i;
            while i < bytes.len() && (bytes[i].is_ascii_digit() || bytes[i] == b'.') {
                i += 1;
            }
            let value: f64 = text[start..i].trim_end_matches('.').parse().ok()?;
            let is_percent = bytes.get(i) == Some(&b'%');
            return Some((value, is_percent));
        }
        i += 1;
    }
    None
}

/// The inner text of each top-level parenthesized group.
fn paren_groups(text: &str) -> Vec<&str> {
    let mut groups = Vec::new();
    let mut rest = text;
    while let Some(open) = rest.find('(') {
        let after = &rest[open + 1..];
        let Some(close) = after.find(')') else { break };
        groups.push(&after[..close]);
        rest = &after[close + 1..];
    }
    groups
}

/// The text with parenthesized groups removed, so base damage parsing does
/// not pick a ratio number up.
fn strip_paren_groups(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut depth = 0usize;
    for c in text.chars() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ if depth == 0 => out.push(c),
            _ => {}
        }
    }
    out
}

/// Whole-word containment: `"ap"` matches `"+60% ap"` but not `"snap"`.
fn contains_word(haystack: &str, word: &str) -> bool {
    let mut search = haystack;
    while let Some(pos) = search.find(word) {
        let before_ok = pos == 0
            || !search[..pos]
                .chars()
                .next_back()
                .is_some_and(|c| c.is_ascii_alphanumeric());
        let after = &search[pos + word.len()..];
        let after_ok = !after
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphanumeric());
        if before_ok && after_ok {
            return true;
        }
        search = &search[pos + word.len()..];
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stat_block::StatSet;

    fn estimate(tooltip: &str) -> Option<AbilityEstimate> {
        TooltipEstimator.estimate(tooltip)
    }

    #[test]
    fn base_plus_percent_ap_ratio() {
        let est = estimate("Deals 80 (+60% AP) magic damage.").unwrap();
        assert!((est.base - 80.0).abs() < 1e-9);
        assert!((est.ratio - 0.6).abs() < 1e-9);
        assert_eq!(est.scaling, Some(ScalingStat::AbilityPower));
    }

    #[test]
    fn decimal_ad_ratio() {
        let est = estimate("Strikes for 50 (1.1 AD) physical damage.").unwrap();
        assert!((est.ratio - 1.1).abs() < 1e-9);
        assert_eq!(est.scaling, Some(ScalingStat::AttackDamage));
    }

    #[test]
    fn base_number_skips_ratio_groups() {
        // The ratio group comes first in the text; the base must still be
        // the first number OUTSIDE parentheses.
        let est = estimate("(+40% AP) Deals 120 magic damage.").unwrap();
        assert!((est.base - 120.0).abs() < 1e-9);
        assert!((est.ratio - 0.4).abs() < 1e-9);
    }

    #[test]
    fn no_number_means_no_estimate() {
        assert!(estimate("Passively grants vision of the area.").is_none());
    }

    #[test]
    fn word_boundary_on_stat_mentions() {
        let est = estimate("Snap back, dealing 100 true damage.").unwrap();
        assert_eq!(est.scaling, None);
        assert!((est.ratio - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn mitigation_path_follows_scaling() {
        let constants = GameConstants::default();
        let attacker: StatSet = [(Stat::AbilityPower, 100.0), (Stat::AttackDamage, 100.0)]
            .into_iter()
            .collect();
        let attacker = FinalStats::from_stats(attacker);
        let target: StatSet = [(Stat::Armor, 100.0), (Stat::MagicResist, 0.0)]
            .into_iter()
            .collect();
        let target = FinalStats::from_stats(target);

        let ap_est = estimate("Deals 100 (+100% AP) magic damage.").unwrap();
        let ap_damage = estimate_ability_damage(
            &ap_est,
            &attacker,
            &Penetration::default(),
            &target,
            9,
            &constants,
        );
        // 200 raw, 0 MR: unmitigated
        assert!((ap_damage - 200.0).abs() < 1e-9);

        let ad_est = estimate("Deals 100 (+100% AD) physical damage.").unwrap();
        let ad_damage = estimate_ability_damage(
            &ad_est,
            &attacker,
            &Penetration::default(),
            &target,
            9,
            &constants,
        );
        // 200 raw halved by 100 armor
        assert!((ad_damage - 100.0).abs() < 1e-9);
    }
}
