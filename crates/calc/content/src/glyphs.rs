//! Glyph selections.

use core::str::FromStr;

use bitflags::bitflags;

use calc_core::{CalcError, Glyph, GlyphsOracle, Result};

bitflags! {
    /// Glyphs a build has inscribed.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct GlyphSet: u16 {
        const ADRENALINE_RUSH = 1 << 0;
        const BACKSTAB = 1 << 1;
        const EVISCERATE = 1 << 2;
        const EXPOSE_ARMOR = 1 << 3;
        const HEMORRHAGE = 1 << 4;
        const KILLING_SPREE = 1 << 5;
        const MUTILATE = 1 << 6;
        const REVEALING_STRIKE = 1 << 7;
        const RUPTURE = 1 << 8;
        const SHADOW_DANCE = 1 << 9;
        const SINISTER_STRIKE = 1 << 10;
        const SLICE_AND_DICE = 1 << 11;
        const TRICKS_OF_THE_TRADE = 1 << 12;
        const VENDETTA = 1 << 13;
    }
}

impl GlyphSet {
    pub const fn flag(glyph: Glyph) -> Self {
        match glyph {
            Glyph::AdrenalineRush => Self::ADRENALINE_RUSH,
            Glyph::Backstab => Self::BACKSTAB,
            Glyph::Eviscerate => Self::EVISCERATE,
            Glyph::ExposeArmor => Self::EXPOSE_ARMOR,
            Glyph::Hemorrhage => Self::HEMORRHAGE,
            Glyph::KillingSpree => Self::KILLING_SPREE,
            Glyph::Mutilate => Self::MUTILATE,
            Glyph::RevealingStrike => Self::REVEALING_STRIKE,
            Glyph::Rupture => Self::RUPTURE,
            Glyph::ShadowDance => Self::SHADOW_DANCE,
            Glyph::SinisterStrike => Self::SINISTER_STRIKE,
            Glyph::SliceAndDice => Self::SLICE_AND_DICE,
            Glyph::TricksOfTheTrade => Self::TRICKS_OF_THE_TRADE,
            Glyph::Vendetta => Self::VENDETTA,
        }
    }

    /// Builds the set from snake_case glyph names.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::UnknownGlyph` for the first unknown name.
    pub fn from_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Result<Self> {
        names.into_iter().try_fold(Self::empty(), |set, name| {
            let glyph =
                Glyph::from_str(name).map_err(|_| CalcError::UnknownGlyph(name.to_owned()))?;
            Ok(set | Self::flag(glyph))
        })
    }
}

impl FromIterator<Glyph> for GlyphSet {
    fn from_iter<I: IntoIterator<Item = Glyph>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, glyph| set | Self::flag(glyph))
    }
}

impl GlyphsOracle for GlyphSet {
    fn has_glyph(&self, glyph: Glyph) -> bool {
        self.contains(Self::flag(glyph))
    }
}
