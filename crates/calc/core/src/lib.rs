//! Deterministic rogue damage formulas.
//!
//! `calc-core` turns a snapshot of a rogue build (raw stats, weapons, gear
//! buffs) plus read-only talent, buff, race and glyph oracles into per-ability
//! damage and derived combat statistics. Every level-dependent constant is
//! resolved once when a [`StatModel`] or [`RogueDamageCalculator`] is built.
pub mod combat;
pub mod config;
pub mod env;
pub mod error;
pub mod stats;
pub mod tables;

pub use combat::{
    Ability, AbilityConstants, AbilityInput, AttackCategory, DamageHooks, DamageRoll, NoHooks,
    RogueDamageCalculator, TalentScope,
};
pub use config::CalcConfig;
pub use env::{
    BuffsOracle, BuildEnv, Env, Glyph, GlyphsOracle, RaceOracle, Talent, TalentSpec,
    TalentsOracle,
};
pub use error::{CalcError, CoreError, ErrorKind, ErrorSeverity, Result};
pub use stats::{
    ActivatedBoost, BoostStat, GearBuff, GearBuffs, MeleeEnchant, Proc, ProcList,
    RatingConversions, StatModel, StatModelBuilder, Weapon, WeaponType,
};
pub use tables::LevelTable;
