//! Owned oracle bundle for one build.

use calc_core::{BuildEnv, TalentSpec};

use crate::buffs::RaidBuffs;
use crate::glyphs::GlyphSet;
use crate::race::Race;
use crate::talents::TalentBuild;

/// Owns one oracle of each kind for a build.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RogueBuild {
    pub talents: TalentBuild,
    pub buffs: RaidBuffs,
    pub race: Race,
    pub glyphs: GlyphSet,
}

impl RogueBuild {
    /// A build of `spec` with no talents, buffs or glyphs.
    pub fn new(spec: TalentSpec, race: Race) -> Self {
        Self {
            talents: TalentBuild::new(spec),
            buffs: RaidBuffs::empty(),
            race,
            glyphs: GlyphSet::empty(),
        }
    }

    pub fn talents(mut self, talents: TalentBuild) -> Self {
        self.talents = talents;
        self
    }

    pub fn buffs(mut self, buffs: RaidBuffs) -> Self {
        self.buffs = buffs;
        self
    }

    pub fn glyphs(mut self, glyphs: GlyphSet) -> Self {
        self.glyphs = glyphs;
        self
    }

    /// Borrows the build as the oracle bundle the calculator reads.
    pub fn env(&self) -> BuildEnv<'_> {
        BuildEnv::from_oracles(&self.talents, &self.buffs, &self.race, &self.glyphs)
    }
}
