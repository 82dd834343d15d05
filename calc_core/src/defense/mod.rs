//! Resistance resolution: penetration and damage multipliers

mod penetration;

pub use penetration::Penetration;

/// Post-mitigation damage fraction for a resistance value, as a multiplier.
/// 0 resist passes damage through; 100 resist halves it. Negative resistance
/// is clamped out before this point, so the multiplier never exceeds 1.
pub fn damage_multiplier(resist: f64) -> f64 {
    100.0 / (100.0 + resist)
}
