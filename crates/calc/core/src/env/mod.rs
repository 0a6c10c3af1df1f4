//! Traits describing the build data the formulas read but do not own.
//!
//! Talents, raid buffs, race and glyphs come from outside the calculator. The
//! [`Env`] aggregate bundles one oracle of each kind so the damage engine can
//! read everything it needs without coupling to concrete data tables.
mod buffs;
mod glyphs;
mod race;
mod talents;

#[cfg(test)]
pub(crate) mod fixtures;

pub use buffs::BuffsOracle;
pub use glyphs::{Glyph, GlyphsOracle};
pub use race::RaceOracle;
pub use talents::{Talent, TalentSpec, TalentsOracle};

/// Aggregates the read-only oracles required by the damage engine.
pub struct Env<'a, T, B, R, G>
where
    T: TalentsOracle + ?Sized,
    B: BuffsOracle + ?Sized,
    R: RaceOracle + ?Sized,
    G: GlyphsOracle + ?Sized,
{
    talents: &'a T,
    buffs: &'a B,
    race: &'a R,
    glyphs: &'a G,
}

pub type BuildEnv<'a> = Env<
    'a,
    dyn TalentsOracle + 'a,
    dyn BuffsOracle + 'a,
    dyn RaceOracle + 'a,
    dyn GlyphsOracle + 'a,
>;

impl<'a, T, B, R, G> Env<'a, T, B, R, G>
where
    T: TalentsOracle + ?Sized,
    B: BuffsOracle + ?Sized,
    R: RaceOracle + ?Sized,
    G: GlyphsOracle + ?Sized,
{
    pub fn new(talents: &'a T, buffs: &'a B, race: &'a R, glyphs: &'a G) -> Self {
        Self {
            talents,
            buffs,
            race,
            glyphs,
        }
    }

    pub fn talents(&self) -> &'a T {
        self.talents
    }

    pub fn buffs(&self) -> &'a B {
        self.buffs
    }

    pub fn race(&self) -> &'a R {
        self.race
    }

    pub fn glyphs(&self) -> &'a G {
        self.glyphs
    }
}

impl<T, B, R, G> Clone for Env<'_, T, B, R, G>
where
    T: TalentsOracle + ?Sized,
    B: BuffsOracle + ?Sized,
    R: RaceOracle + ?Sized,
    G: GlyphsOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, B, R, G> Copy for Env<'_, T, B, R, G>
where
    T: TalentsOracle + ?Sized,
    B: BuffsOracle + ?Sized,
    R: RaceOracle + ?Sized,
    G: GlyphsOracle + ?Sized,
{
}

impl<'a> BuildEnv<'a> {
    /// Type-erases concrete oracles into a [`BuildEnv`].
    pub fn from_oracles(
        talents: &'a (impl TalentsOracle + 'a),
        buffs: &'a (impl BuffsOracle + 'a),
        race: &'a (impl RaceOracle + 'a),
        glyphs: &'a (impl GlyphsOracle + 'a),
    ) -> Self {
        Self::new(talents, buffs, race, glyphs)
    }
}
