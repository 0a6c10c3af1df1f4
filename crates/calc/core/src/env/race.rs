//! Race oracle.

use crate::error::Result;
use crate::stats::ActivatedBoost;

/// Provides racial bonuses.
pub trait RaceOracle: Send + Sync {
    /// Flat crit chance from racials.
    fn racial_crit(&self) -> f64;

    /// On-use racials at `level`.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::InvalidLevel` when a racial scales with level and has
    /// no value for `level`.
    fn activated_boosts(&self, level: u32) -> Result<Vec<ActivatedBoost>>;
}
