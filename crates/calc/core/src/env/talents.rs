//! Talent oracle and talent vocabulary.

/// Talent specialization of a build.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TalentSpec {
    Assassination,
    Combat,
    Subtlety,
}

/// Ranked talents the damage formulas read.
///
/// Spec passives (executioner, potent poisons, assassin's resolve) are not
/// ranked and are keyed off [`TalentSpec`] instead.
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
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Talent {
    Opportunity,
    CoupDeGrace,
    Aggression,
    ImprovedSinisterStrike,
    VilePoisons,
    ImprovedAmbush,
    SanguinaryVein,
    Lethality,
    Precision,
}

impl Talent {
    /// Number of ranks the talent has.
    pub const fn max_points(self) -> u8 {
        match self {
            Self::ImprovedAmbush | Self::SanguinaryVein => 2,
            _ => 3,
        }
    }
}

/// Provides the talent choices of a build.
pub trait TalentsOracle: Send + Sync {
    fn spec(&self) -> TalentSpec;

    /// Points invested in `talent`. Zero when the talent was not taken.
    fn points(&self, talent: Talent) -> u8;

    fn is_assassination(&self) -> bool {
        self.spec() == TalentSpec::Assassination
    }

    fn is_combat(&self) -> bool {
        self.spec() == TalentSpec::Combat
    }

    fn is_subtlety(&self) -> bool {
        self.spec() == TalentSpec::Subtlety
    }
}
