//! Character statistics.
//!
//! # Layers
//!
//! - **Ratings**: per-level divisors turning gear ratings into percentages
//! - **Weapons**: per-swing damage, normalization speed and enchant
//! - **Gear buffs**: closed set of set bonuses, meta gems and on-use effects
//! - **Model**: the raw stat snapshot the damage engine reads
//!
//! Nothing here applies talent or buff multipliers; those belong to the engine.

pub mod gear;
pub mod model;
pub mod procs;
pub mod ratings;
pub mod weapon;

pub use gear::{ActivatedBoost, GearBuff, GearBuffs};
pub use model::{StatModel, StatModelBuilder};
pub use procs::{BoostStat, Proc, ProcList};
pub use ratings::{BASE_MASTERY, RatingConversions};
pub use weapon::{AP_PER_DPS, MeleeEnchant, Weapon, WeaponType};
