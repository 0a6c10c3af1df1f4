//! Level-indexed reference tables.
//!
//! Every patch-specific constant in the crate lives in a [`LevelTable`]: a named,
//! static list of `(level, value)` rows. Lookups for a level without a row fail
//! with [`CalcError::InvalidLevel`] carrying the table name. Nothing falls back
//! to a default.
//!
//! Values are written exactly as published for the patch they model and must not
//! be rounded or tidied.

use crate::error::{CalcError, Result};

/// A named static mapping from level to value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LevelTable {
    name: &'static str,
    rows: &'static [(u32, f64)],
}

impl LevelTable {
    pub const fn new(name: &'static str, rows: &'static [(u32, f64)]) -> Self {
        Self { name, rows }
    }

    /// Name used in `InvalidLevel` errors.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Looks up the value for `level`.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::InvalidLevel` naming this table when no row exists.
    pub fn get(&self, level: u32) -> Result<f64> {
        self.rows
            .iter()
            .find(|(row_level, _)| *row_level == level)
            .map(|(_, value)| *value)
            .ok_or_else(|| CalcError::invalid_level(self.name, level))
    }

    pub fn supports(&self, level: u32) -> bool {
        self.rows.iter().any(|(row_level, _)| *row_level == level)
    }

    /// Levels covered by this table, in declaration order.
    pub fn levels(&self) -> impl Iterator<Item = u32> + '_ {
        self.rows.iter().map(|(level, _)| *level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: LevelTable = LevelTable::new("sample", &[(80, 1.5), (85, 2.25)]);

    #[test]
    fn lookup_hits_and_misses() {
        assert_eq!(SAMPLE.get(85), Ok(2.25));
        assert!(SAMPLE.supports(80));
        assert!(!SAMPLE.supports(81));

        let err = SAMPLE.get(81).unwrap_err();
        assert_eq!(
            err,
            CalcError::InvalidLevel {
                table: "sample",
                level: 81,
            }
        );
    }

    #[test]
    fn levels_preserve_order() {
        let levels: Vec<u32> = SAMPLE.levels().collect();
        assert_eq!(levels, vec![80, 85]);
    }
}
