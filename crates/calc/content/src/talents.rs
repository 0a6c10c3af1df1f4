//! Talent builds.
//!
//! A [`TalentBuild`] is validated once when talents are added; the oracle
//! methods never see more points than a talent has ranks.

use strum::EnumCount;

use calc_core::{CalcError, Result, Talent, TalentSpec, TalentsOracle};

/// Talent points invested by a build, per specialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TalentBuild {
    spec: TalentSpec,
    points: [u8; Talent::COUNT],
}

impl TalentBuild {
    /// A build with no ranked talents taken.
    pub const fn new(spec: TalentSpec) -> Self {
        Self {
            spec,
            points: [0; Talent::COUNT],
        }
    }

    /// Sets the points in `talent`.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::TalentPointsOutOfRange` when `points` exceeds the
    /// talent's ranks.
    pub fn with(mut self, talent: Talent, points: u8) -> Result<Self> {
        let max = talent.max_points();
        if points > max {
            return Err(CalcError::TalentPointsOutOfRange {
                talent,
                points,
                max,
            });
        }
        self.points[talent as usize] = points;
        Ok(self)
    }

    /// Builds from `(talent, points)` pairs. Later pairs override earlier ones.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::TalentPointsOutOfRange` for the first pair exceeding
    /// its talent's ranks.
    pub fn from_pairs(
        spec: TalentSpec,
        pairs: impl IntoIterator<Item = (Talent, u8)>,
    ) -> Result<Self> {
        pairs
            .into_iter()
            .try_fold(Self::new(spec), |build, (talent, points)| {
                build.with(talent, points)
            })
    }

    /// Talents with at least one point, in declaration order.
    pub fn taken(&self) -> impl Iterator<Item = (Talent, u8)> + '_ {
        use strum::IntoEnumIterator;
        Talent::iter()
            .map(|talent| (talent, self.points(talent)))
            .filter(|(_, points)| *points > 0)
    }
}

impl TalentsOracle for TalentBuild {
    fn spec(&self) -> TalentSpec {
        self.spec
    }

    fn points(&self, talent: Talent) -> u8 {
        self.points[talent as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_build_has_no_points() {
        let build = TalentBuild::new(TalentSpec::Combat);
        assert!(build.is_combat());
        assert_eq!(build.points(Talent::Aggression), 0);
        assert_eq!(build.taken().count(), 0);
    }

    #[test]
    fn points_are_bounded_by_ranks() {
        let err = TalentBuild::new(TalentSpec::Subtlety)
            .with(Talent::SanguinaryVein, 3)
            .unwrap_err();
        assert_eq!(
            err,
            CalcError::TalentPointsOutOfRange {
                talent: Talent::SanguinaryVein,
                points: 3,
                max: 2,
            }
        );
        assert_eq!(
            err.to_string(),
            "talent sanguinary_vein has 2 ranks (got 3)"
        );
    }

    #[test]
    fn pairs_build_a_spec() {
        let build = TalentBuild::from_pairs(
            TalentSpec::Assassination,
            [
                (Talent::Opportunity, 3),
                (Talent::Lethality, 3),
                (Talent::Opportunity, 2),
            ],
        )
        .unwrap();

        assert!(build.is_assassination());
        assert_eq!(build.points(Talent::Opportunity), 2);
        assert_eq!(
            build.taken().collect::<Vec<_>>(),
            vec![(Talent::Opportunity, 2), (Talent::Lethality, 3)]
        );
    }
}
