//! Rating → percentage conversion.
//!
//! Gear ratings are raw integers; the effect they grant depends on character
//! level through a per-level divisor. All six divisors are resolved together in
//! [`RatingConversions::for_level`], so a model either has a complete,
//! consistent set for its level or does not exist.

use crate::error::Result;
use crate::tables::LevelTable;

pub const MELEE_HIT_RATING_CONVERSION: LevelTable = LevelTable::new(
    "melee hit rating conversion",
    &[
        (60, 9.37931),
        (70, 14.7905),
        (80, 30.7548),
        (81, 40.3836),
        (82, 53.0304),
        (83, 69.6653),
        (84, 91.4738),
        (85, 120.109001159667969),
    ],
);

pub const SPELL_HIT_RATING_CONVERSION: LevelTable = LevelTable::new(
    "spell hit rating conversion",
    &[
        (60, 8.0),
        (70, 12.6154),
        (80, 26.232),
        (81, 34.4448),
        (82, 45.2318),
        (83, 59.4204),
        (84, 78.0218),
        (85, 102.445999145507812),
    ],
);

pub const CRIT_RATING_CONVERSION: LevelTable = LevelTable::new(
    "crit rating conversion",
    &[
        (60, 14.0),
        (70, 22.0769),
        (80, 45.906),
        (81, 60.2784),
        (82, 79.1556),
        (83, 103.986),
        (84, 136.53799),
        (85, 179.279998779296875),
    ],
);

pub const HASTE_RATING_CONVERSION: LevelTable = LevelTable::new(
    "haste rating conversion",
    &[
        (60, 10.0),
        (70, 15.7692),
        (80, 32.79),
        (81, 43.056),
        (82, 56.5397),
        (83, 74.2755),
        (84, 97.5272),
        (85, 128.057006835937500),
    ],
);

// Published per expertise point; one expertise point is worth four of these.
pub const EXPERTISE_RATING_CONVERSION: LevelTable = LevelTable::new(
    "expertise rating conversion",
    &[
        (60, 2.34483 * 4.0),
        (70, 3.69761 * 4.0),
        (80, 7.68869 * 4.0),
        (81, 10.0959 * 4.0),
        (82, 13.2576 * 4.0),
        (83, 17.4163 * 4.0),
        (84, 22.8685 * 4.0),
        (85, 30.027200698852539 * 4.0),
    ],
);

pub const MASTERY_RATING_CONVERSION: LevelTable = LevelTable::new(
    "mastery rating conversion",
    &[
        (60, 14.0),
        (70, 22.0769),
        (80, 45.906),
        (81, 60.2784),
        (82, 79.1556),
        (83, 103.986),
        (84, 136.53799),
        (85, 179.279998779296875),
    ],
);

/// Base mastery granted before any rating.
pub const BASE_MASTERY: f64 = 8.0;

/// Rating divisors for a single level.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RatingConversions {
    pub level: u32,
    pub melee_hit: f64,
    pub spell_hit: f64,
    pub crit: f64,
    pub haste: f64,
    pub expertise: f64,
    pub mastery: f64,
}

impl RatingConversions {
    /// Resolves every divisor for `level`.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::InvalidLevel` naming the first table without a row.
    pub fn for_level(level: u32) -> Result<Self> {
        Ok(Self {
            level,
            melee_hit: MELEE_HIT_RATING_CONVERSION.get(level)?,
            spell_hit: SPELL_HIT_RATING_CONVERSION.get(level)?,
            crit: CRIT_RATING_CONVERSION.get(level)?,
            haste: HASTE_RATING_CONVERSION.get(level)?,
            expertise: EXPERTISE_RATING_CONVERSION.get(level)?,
            mastery: MASTERY_RATING_CONVERSION.get(level)?,
        })
    }

    pub fn mastery_from_rating(&self, rating: f64) -> f64 {
        BASE_MASTERY + rating / self.mastery
    }

    pub fn melee_hit_from_rating(&self, rating: f64) -> f64 {
        rating / (100.0 * self.melee_hit)
    }

    pub fn spell_hit_from_rating(&self, rating: f64) -> f64 {
        rating / (100.0 * self.spell_hit)
    }

    pub fn expertise_from_rating(&self, rating: f64) -> f64 {
        rating / (100.0 * self.expertise)
    }

    pub fn crit_from_rating(&self, rating: f64) -> f64 {
        rating / (100.0 * self.crit)
    }

    pub fn haste_multiplier_from_rating(&self, rating: f64) -> f64 {
        1.0 + rating / (100.0 * self.haste)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CalcConfig;
    use crate::error::CalcError;

    #[test]
    fn every_stat_level_resolves() {
        for level in CalcConfig::STAT_LEVELS {
            let conversions = RatingConversions::for_level(level).unwrap();
            assert_eq!(conversions.level, level);
        }
    }

    #[test]
    fn unsupported_level_names_first_table() {
        let err = RatingConversions::for_level(75).unwrap_err();
        assert_eq!(
            err,
            CalcError::InvalidLevel {
                table: "melee hit rating conversion",
                level: 75,
            }
        );
    }

    #[test]
    fn expertise_is_four_times_published_value() {
        let conversions = RatingConversions::for_level(85).unwrap();
        assert_eq!(conversions.expertise, 30.027200698852539 * 4.0);
    }
}
