//! Damage formula engine.
//!
//! Pure functions and one calculator type. Nothing here simulates time,
//! generates resources or rolls procs; every value is the deterministic damage
//! of a single cast given already-resolved state.
//!
//! # Core pieces
//!
//! - [`talent_modifier`]: additive talent bonuses within an ability's scope
//! - [`raid_settings_modifier`]: raid buffs and target armor per attack category
//! - [`crit_damage_modifier`]: crit multiplier with meta gem and lethality
//! - [`Ability::descriptor`]: the per-ability table the calculator evaluates

pub mod abilities;
pub mod calculator;
pub mod constants;
pub mod crit;
pub mod hit;
pub mod raid;
pub mod talents;

pub use abilities::{
    Ability, AbilityDescriptor, BaseTerm, BleedRule, DaggerRule, Hand, PercentRule,
    RUPTURE_AP_COEFFICIENTS, StrikeBonus, SwingSpeed,
};
pub use calculator::{
    AbilityInput, DamageHooks, DamageRoll, MAX_COMBO_POINTS, NoHooks, RogueDamageCalculator,
};
pub use constants::AbilityConstants;
pub use crit::{CritRule, crit_damage_modifier};
pub use hit::{Avoidance, melee_hit_chance, spell_hit_chance};
pub use raid::{
    AttackCategory, armor_constant, armor_mitigation_multiplier, raid_settings_modifier,
    target_armor,
};
pub use talents::{TalentContext, TalentScope, talent_modifier};
