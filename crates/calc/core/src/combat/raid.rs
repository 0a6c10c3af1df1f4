//! Raid-setting modifiers and target armor.

use core::str::FromStr;

use crate::env::BuffsOracle;
use crate::error::{CalcError, Result};

/// How raid buffs and target armor apply to an attack.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum AttackCategory {
    Physical,
    Spell,
    Bleed,
}

impl AttackCategory {
    /// Parses a category name. Matching is exact.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::InvalidCategory` echoing `name`, including for `""`.
    pub fn parse(name: &str) -> Result<Self> {
        Self::from_str(name).map_err(|_| CalcError::InvalidCategory(name.to_owned()))
    }
}

/// Armor constant `K` for an attacker of `level`.
pub fn armor_constant(level: u32) -> f64 {
    let level = f64::from(level);
    if level > 80.0 {
        2167.5 * level - 158167.5
    } else if level > 59.0 {
        467.5 * level - 22167.5
    } else {
        85.0 * level + 400.0
    }
}

/// Fraction of physical damage that gets through `armor`.
///
/// ```text
/// multiplier = 1 - armor / (armor + K(level))
/// ```
pub fn armor_mitigation_multiplier(armor: f64, level: u32) -> f64 {
    1.0 - armor / (armor + armor_constant(level))
}

/// Effective target armor after debuffs.
pub fn target_armor(base_armor: f64, buffs: &(impl BuffsOracle + ?Sized)) -> f64 {
    base_armor * buffs.armor_reduction_multiplier()
}

/// Multiplier from raid buffs and target armor for one attack category.
///
/// `armor` is the effective target armor and only matters for physical attacks.
pub fn raid_settings_modifier(
    category: AttackCategory,
    armor: f64,
    level: u32,
    buffs: &(impl BuffsOracle + ?Sized),
) -> f64 {
    match category {
        AttackCategory::Physical => {
            buffs.physical_damage_multiplier() * armor_mitigation_multiplier(armor, level)
        }
        AttackCategory::Spell => buffs.spell_damage_multiplier(),
        AttackCategory::Bleed => buffs.bleed_damage_multiplier(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::fixtures::TestBuffs;

    #[test]
    fn category_names_are_exact() {
        assert_eq!(AttackCategory::parse("bleed"), Ok(AttackCategory::Bleed));
        assert_eq!(
            AttackCategory::parse(""),
            Err(CalcError::InvalidCategory(String::new()))
        );
        assert!(AttackCategory::parse("Physical").is_err());
        assert!(AttackCategory::parse("magic").is_err());
    }

    #[test]
    fn armor_constant_by_level_band() {
        assert_eq!(armor_constant(85), 2167.5 * 85.0 - 158167.5);
        assert_eq!(armor_constant(80), 467.5 * 80.0 - 22167.5);
        assert_eq!(armor_constant(60), 467.5 * 60.0 - 22167.5);
        assert_eq!(armor_constant(59), 85.0 * 59.0 + 400.0);
    }

    #[test]
    fn zero_armor_mitigates_nothing() {
        assert_eq!(armor_mitigation_multiplier(0.0, 85), 1.0);
        let boss = armor_mitigation_multiplier(11977.0, 85);
        assert!(boss > 0.0 && boss < 1.0);
    }

    #[test]
    fn physical_uses_armor_others_do_not() {
        let buffs = TestBuffs {
            physical: 1.04,
            spell: 1.08,
            bleed: 1.3,
            armor: 0.88,
            ..TestBuffs::default()
        };
        let armor = target_armor(11977.0, &buffs);
        assert_eq!(armor, 11977.0 * 0.88);

        let physical = raid_settings_modifier(AttackCategory::Physical, armor, 85, &buffs);
        assert_eq!(physical, 1.04 * armor_mitigation_multiplier(armor, 85));
        assert_eq!(
            raid_settings_modifier(AttackCategory::Spell, armor, 85, &buffs),
            1.08
        );
        assert_eq!(
            raid_settings_modifier(AttackCategory::Bleed, armor, 85, &buffs),
            1.3
        );
    }
}
