//! Common error infrastructure for calc-core.
//!
//! Every fallible operation in the crate returns [`CalcError`]. Errors fall into
//! two kinds:
//!
//! - **InvalidLevel**: a level-indexed table has no row for the requested level.
//!   The message names the table so it is obvious which formula needs a new
//!   patch-level entry.
//! - **InvalidInput**: the caller asked for something outside a closed vocabulary
//!   (enchant, attack category, gear buff, combo points, ...). The offending
//!   identifier is echoed verbatim.
//!
//! Both kinds are non-recoverable for the current evaluation. Formulas never
//! catch and suppress them; they propagate with `?`.

use crate::env::Talent;
use crate::stats::{MeleeEnchant, WeaponType};

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, CalcError>;

/// Severity level of an error, used for categorization and reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input, should not retry without changes.
    Validation,

    /// Missing reference data. The build cannot be evaluated at all until the
    /// tables gain an entry.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }
}

/// The two error kinds surfaced to callers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidLevel,
    InvalidInput,
}

/// Common trait for calc-core errors.
///
/// Mirrors the classification interface used by downstream tooling: a severity
/// for logging priority and a stable code for tests and metrics.
pub trait CoreError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str;
}

/// Errors raised while building models or evaluating formulas.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum CalcError {
    /// A level-indexed table has no entry for `level`.
    #[error("no {table} available for level {level}")]
    InvalidLevel { table: &'static str, level: u32 },

    /// Enchant name is not in the allowed melee enchant table.
    #[error("enchant {0} is not allowed")]
    EnchantNotAllowed(String),

    /// Enchant requested on a weapon that cannot carry it.
    #[error("only melee weapons can be enchanted with {enchant} (got {weapon})")]
    EnchantOnNonMelee {
        enchant: MeleeEnchant,
        weapon: WeaponType,
    },

    /// Attack category outside physical/spell/bleed.
    #[error("attacks must be categorized as physical, spell or bleed (got '{0}')")]
    InvalidCategory(String),

    /// Gear buff name outside the known vocabulary.
    #[error("gear buff '{0}' is not recognized")]
    UnknownGearBuff(String),

    /// Weapon type name outside the known vocabulary.
    #[error("weapon type '{0}' is not recognized")]
    UnknownWeaponType(String),

    /// Race name outside the known vocabulary.
    #[error("race '{0}' is not recognized")]
    UnknownRace(String),

    /// Raid buff name outside the known vocabulary.
    #[error("raid buff '{0}' is not recognized")]
    UnknownRaidBuff(String),

    /// Glyph name outside the known vocabulary.
    #[error("glyph '{0}' is not recognized")]
    UnknownGlyph(String),

    /// Finishing moves take between 0 and 5 combo points.
    #[error("combo points must be between 0 and 5 (got {0})")]
    InvalidComboPoints(u8),

    /// A build invested more points in a talent than it has ranks.
    #[error("talent {talent} has {max} ranks (got {points})")]
    TalentPointsOutOfRange { talent: Talent, points: u8, max: u8 },
}

impl CalcError {
    /// Builds an [`CalcError::InvalidLevel`] and logs the miss.
    pub(crate) fn invalid_level(table: &'static str, level: u32) -> Self {
        tracing::warn!(table, level, "level lookup failed");
        Self::InvalidLevel { table, level }
    }

    /// Returns which of the two error kinds this is.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidLevel { .. } => ErrorKind::InvalidLevel,
            _ => ErrorKind::InvalidInput,
        }
    }

    pub const fn is_invalid_level(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidLevel)
    }

    pub const fn is_invalid_input(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidInput)
    }
}

impl CoreError for CalcError {
    fn severity(&self) -> ErrorSeverity {
        match self.kind() {
            ErrorKind::InvalidLevel => ErrorSeverity::Fatal,
            ErrorKind::InvalidInput => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use CalcError::*;
        match self {
            InvalidLevel { .. } => "CALC_INVALID_LEVEL",
            EnchantNotAllowed(_) => "CALC_ENCHANT_NOT_ALLOWED",
            EnchantOnNonMelee { .. } => "CALC_ENCHANT_ON_NON_MELEE",
            InvalidCategory(_) => "CALC_INVALID_CATEGORY",
            UnknownGearBuff(_) => "CALC_UNKNOWN_GEAR_BUFF",
            UnknownWeaponType(_) => "CALC_UNKNOWN_WEAPON_TYPE",
            UnknownRace(_) => "CALC_UNKNOWN_RACE",
            UnknownRaidBuff(_) => "CALC_UNKNOWN_RAID_BUFF",
            UnknownGlyph(_) => "CALC_UNKNOWN_GLYPH",
            InvalidComboPoints(_) => "CALC_INVALID_COMBO_POINTS",
            TalentPointsOutOfRange { .. } => "CALC_TALENT_POINTS_OUT_OF_RANGE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_level_message_names_table_and_level() {
        let err = CalcError::invalid_level("mut_bonus_dmg", 81);
        assert_eq!(err.to_string(), "no mut_bonus_dmg available for level 81");
        assert_eq!(err.kind(), ErrorKind::InvalidLevel);
        assert_eq!(err.severity(), ErrorSeverity::Fatal);
    }

    #[test]
    fn input_errors_echo_identifier() {
        let err = CalcError::InvalidCategory(String::new());
        assert!(err.is_invalid_input());
        assert_eq!(err.error_code(), "CALC_INVALID_CATEGORY");
        assert!(err.to_string().contains("(got '')"));

        let err = CalcError::EnchantNotAllowed("crusader".into());
        assert_eq!(err.to_string(), "enchant crusader is not allowed");
        assert_eq!(err.severity(), ErrorSeverity::Validation);
    }
}
