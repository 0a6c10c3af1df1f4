//! Raid buff oracle.

/// Provides the raid buffs and target debuffs active for an evaluation.
///
/// Multipliers are applied as-is; an unbuffed raid reports `1.0` for each.
pub trait BuffsOracle: Send + Sync {
    /// Flat crit chance granted to every attack.
    fn all_crit_bonus(&self) -> f64;

    /// Additional flat crit chance for spells.
    fn spell_crit_bonus(&self) -> f64;

    fn physical_damage_multiplier(&self) -> f64;

    fn spell_damage_multiplier(&self) -> f64;

    fn bleed_damage_multiplier(&self) -> f64;

    /// Scales target armor. Armor debuffs report values below `1.0`.
    fn armor_reduction_multiplier(&self) -> f64;

    /// Whether an agility flask is up. Gear effects that amplify flasks read this.
    fn agi_flask(&self) -> bool {
        false
    }
}
