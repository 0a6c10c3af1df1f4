//! Playable races and their rogue-relevant racials.

use core::str::FromStr;

use calc_core::tables::LevelTable;
use calc_core::{ActivatedBoost, BoostStat, CalcError, RaceOracle, Result};

/// Attack power from orc blood fury.
pub const BLOOD_FURY_AP: LevelTable = LevelTable::new("blood fury attack power", &[(85, 1170.0)]);
/// Spell power from orc blood fury.
pub const BLOOD_FURY_SP: LevelTable = LevelTable::new("blood fury spell power", &[(85, 585.0)]);

const BLOOD_FURY_DURATION: u32 = 15;
const BLOOD_FURY_COOLDOWN: u32 = 120;

/// Races that can play a rogue.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
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
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Race {
    #[default]
    Human,
    Dwarf,
    NightElf,
    Gnome,
    Draenei,
    Worgen,
    Orc,
    Undead,
    Troll,
    BloodElf,
    Goblin,
}

impl Race {
    /// Parses a race name.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::UnknownRace` echoing `name`.
    pub fn parse(name: &str) -> Result<Self> {
        Self::from_str(name).map_err(|_| CalcError::UnknownRace(name.to_owned()))
    }
}

impl RaceOracle for Race {
    fn racial_crit(&self) -> f64 {
        match self {
            Self::Worgen => 0.01,
            _ => 0.0,
        }
    }

    fn activated_boosts(&self, level: u32) -> Result<Vec<ActivatedBoost>> {
        match self {
            Self::Orc => Ok(vec![
                ActivatedBoost::new(
                    BoostStat::AttackPower,
                    BLOOD_FURY_AP.get(level)?,
                    BLOOD_FURY_DURATION,
                    Some(BLOOD_FURY_COOLDOWN),
                ),
                ActivatedBoost::new(
                    BoostStat::SpellPower,
                    BLOOD_FURY_SP.get(level)?,
                    BLOOD_FURY_DURATION,
                    Some(BLOOD_FURY_COOLDOWN),
                ),
            ]),
            _ => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_race_names() {
        assert_eq!(Race::parse("night_elf"), Ok(Race::NightElf));
        assert_eq!(Race::parse("Orc"), Ok(Race::Orc));
        assert_eq!(
            Race::parse("pandaren"),
            Err(CalcError::UnknownRace("pandaren".into()))
        );
    }

    #[test]
    fn blood_fury_at_85() {
        let boosts = Race::Orc.activated_boosts(85).unwrap();
        assert_eq!(boosts.len(), 2);
        assert_eq!(boosts[0].value, 1170.0);
        assert_eq!(boosts[1].stat, BoostStat::SpellPower);
        assert_eq!(boosts[1].value, 585.0);
    }

    #[test]
    fn blood_fury_needs_a_table_row() {
        let err = Race::Orc.activated_boosts(80).unwrap_err();
        assert!(err.is_invalid_level());
        assert!(Race::NightElf.activated_boosts(80).unwrap().is_empty());
    }

    #[test]
    fn only_worgen_has_racial_crit() {
        assert_eq!(Race::Worgen.racial_crit(), 0.01);
        assert_eq!(Race::Human.racial_crit(), 0.0);
    }
}
