//! Glyph oracle.

/// Rogue glyphs that change formula inputs.
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
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Glyph {
    AdrenalineRush,
    Backstab,
    Eviscerate,
    ExposeArmor,
    Hemorrhage,
    KillingSpree,
    Mutilate,
    RevealingStrike,
    Rupture,
    ShadowDance,
    SinisterStrike,
    SliceAndDice,
    TricksOfTheTrade,
    Vendetta,
}

/// Provides the glyphs a build has.
pub trait GlyphsOracle: Send + Sync {
    fn has_glyph(&self, glyph: Glyph) -> bool;
}
