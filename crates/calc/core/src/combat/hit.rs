//! Hit chance against a raid boss.
//!
//! # Formula
//!
//! ```text
//! miss  = max(0, base_miss - hit)
//! dodge = max(0, 0.065 - expertise)   if dodgeable
//! parry = max(0, 0.14 - expertise)    if parryable
//! hit_chance = 1 - miss - dodge - parry
//! ```
//!
//! `hit` and `expertise` are fractions (rating already converted, talents
//! already added).

/// Miss chance of a single-wielding melee attack.
pub const ONE_HAND_MISS: f64 = 0.08;
/// Miss chance of auto attacks while dual wielding.
pub const DUAL_WIELD_MISS: f64 = 0.27;
pub const SPELL_MISS: f64 = 0.17;
pub const BOSS_DODGE: f64 = 0.065;
pub const BOSS_PARRY: f64 = 0.14;

/// Which avoidance outcomes an attack is subject to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Avoidance {
    pub dodgeable: bool,
    pub parryable: bool,
}

impl Avoidance {
    pub const NONE: Self = Self {
        dodgeable: false,
        parryable: false,
    };

    /// Attacks from behind: dodgeable, not parryable.
    pub const BEHIND: Self = Self {
        dodgeable: true,
        parryable: false,
    };

    pub const ALL: Self = Self {
        dodgeable: true,
        parryable: true,
    };
}

/// Probability a melee attack lands.
pub fn melee_hit_chance(base_miss: f64, hit: f64, expertise: f64, avoidance: Avoidance) -> f64 {
    let miss = (base_miss - hit).max(0.0);
    let dodge = if avoidance.dodgeable {
        (BOSS_DODGE - expertise).max(0.0)
    } else {
        0.0
    };
    let parry = if avoidance.parryable {
        (BOSS_PARRY - expertise).max(0.0)
    } else {
        0.0
    };

    1.0 - miss - dodge - parry
}

/// Probability a spell lands.
pub fn spell_hit_chance(hit: f64) -> f64 {
    1.0 - (SPELL_MISS - hit).max(0.0)
}
