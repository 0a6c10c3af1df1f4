//! Concrete build data for the rogue damage calculator.
//!
//! This crate provides the collaborators `calc-core` reads through its oracle
//! traits:
//! - Races and their racials
//! - Raid buffs and target debuffs (bitflags)
//! - Glyph selections (bitflags)
//! - Validated talent builds
//!
//! With the `loaders` feature it also reads [`calc_core::CalcConfig`] from TOML.

pub mod buffs;
pub mod glyphs;
pub mod race;
pub mod rogue;
pub mod talents;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use buffs::{RaidBuff, RaidBuffs};
pub use glyphs::GlyphSet;
pub use race::Race;
pub use rogue::RogueBuild;
pub use talents::TalentBuild;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, LoadResult};
