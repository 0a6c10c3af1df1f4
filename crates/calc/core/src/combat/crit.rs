//! Critical strike damage and chance.

/// Flat crit chance at zero agility.
pub const AGI_CRIT_INTERCEPT: f64 = -0.00295;
/// Crit suppression of a raid boss against melee attacks.
pub const MELEE_CRIT_REDUCTION: f64 = 0.048;
/// Crit suppression of a raid boss against spells.
pub const SPELL_CRIT_REDUCTION: f64 = 0.021;

pub const PHYSICAL_CRIT_MULTIPLIER: f64 = 2.0;
pub const SPELL_CRIT_MULTIPLIER: f64 = 1.5;

/// Which crit damage formula an ability uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CritRule {
    /// 2.0 base.
    Physical,
    /// 2.0 base, scaled by lethality.
    Lethality,
    /// 1.5 base.
    Spell,
}

/// Crit damage multiplier.
///
/// Crit-damage enhancers stack on the part of the multiplier above 1.0:
///
/// ```text
/// total = 1 + (base * metagem - 1) * (1 + 0.1 * lethality_points)
/// ```
///
/// `lethality_points` is `None` for abilities lethality does not affect.
pub fn crit_damage_modifier(metagem: f64, lethality_points: Option<u8>, is_spell: bool) -> f64 {
    let base = if is_spell {
        SPELL_CRIT_MULTIPLIER
    } else {
        PHYSICAL_CRIT_MULTIPLIER
    };
    let bonus = lethality_points.map_or(1.0, |points| 1.0 + 0.1 * f64::from(points));

    1.0 + (base * metagem - 1.0) * bonus
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbuffed_multipliers() {
        assert_eq!(crit_damage_modifier(1.0, None, false), 2.0);
        assert_eq!(crit_damage_modifier(1.0, None, true), 1.5);
        assert_eq!(crit_damage_modifier(1.0, Some(0), false), 2.0);
    }

    #[test]
    fn enhancers_scale_the_increment() {
        let total = crit_damage_modifier(1.03, Some(3), false);
        assert!((total - (1.0 + (2.0 * 1.03 - 1.0) * 1.3)).abs() < 1e-12);

        let spell = crit_damage_modifier(1.03, None, true);
        assert!((spell - 1.545).abs() < 1e-12);
    }
}
