//! Talent damage modifier.
//!
//! Each ability declares which talents can touch it as a [`TalentScope`]. The
//! modifier is additive over the scoped talents, then multiplicative for
//! assassin's resolve and sanguinary vein.

use bitflags::bitflags;

use crate::env::{Talent, TalentsOracle};

bitflags! {
    /// Talents an ability is eligible for.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct TalentScope: u16 {
        const OPPORTUNITY = 1 << 0;
        const COUP_DE_GRACE = 1 << 1;
        /// Subtlety mastery.
        const EXECUTIONER = 1 << 2;
        const AGGRESSION = 1 << 3;
        const IMPROVED_SINISTER_STRIKE = 1 << 4;
        const VILE_POISONS = 1 << 5;
        const IMPROVED_AMBUSH = 1 << 6;
        /// Assassination mastery.
        const POTENT_POISONS = 1 << 7;
        /// Assassination passive, daggers only.
        const ASSASSINS_RESOLVE = 1 << 8;
    }
}

/// Bonus by rank for three-rank talents with a rounded top rank.
const TIERED_BONUS: [f64; 4] = [0.0, 0.07, 0.14, 0.2];

fn tiered(points: u8) -> f64 {
    TIERED_BONUS[usize::from(points).min(TIERED_BONUS.len() - 1)]
}

/// Inputs to [`talent_modifier`] that come from the build rather than the talents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TalentContext {
    /// Mastery after rating conversion.
    pub mastery: f64,
    pub mainhand_is_dagger: bool,
    pub bleeding: bool,
}

/// Damage multiplier from talents within `scope`.
///
/// Sanguinary vein applies whenever the target is bleeding, regardless of
/// scope.
pub fn talent_modifier(
    talents: &(impl TalentsOracle + ?Sized),
    scope: TalentScope,
    ctx: TalentContext,
) -> f64 {
    let points = |talent| f64::from(talents.points(talent));
    let mut modifier = 1.0;

    if scope.contains(TalentScope::OPPORTUNITY) {
        modifier += 0.1 * points(Talent::Opportunity);
    }
    if scope.contains(TalentScope::COUP_DE_GRACE) {
        modifier += tiered(talents.points(Talent::CoupDeGrace));
    }
    if scope.contains(TalentScope::EXECUTIONER) && talents.is_subtlety() {
        modifier += 0.025 * ctx.mastery;
    }
    if scope.contains(TalentScope::AGGRESSION) {
        modifier += tiered(talents.points(Talent::Aggression));
    }
    if scope.contains(TalentScope::IMPROVED_SINISTER_STRIKE) {
        modifier += 0.1 * points(Talent::ImprovedSinisterStrike);
    }
    if scope.contains(TalentScope::VILE_POISONS) {
        modifier += 0.12 * points(Talent::VilePoisons);
    }
    if scope.contains(TalentScope::IMPROVED_AMBUSH) {
        modifier += 0.05 * points(Talent::ImprovedAmbush);
    }
    if scope.contains(TalentScope::POTENT_POISONS) && talents.is_assassination() {
        modifier += 0.035 * ctx.mastery;
    }
    if scope.contains(TalentScope::ASSASSINS_RESOLVE)
        && talents.is_assassination()
        && ctx.mainhand_is_dagger
    {
        modifier *= 1.2;
    }
    if ctx.bleeding {
        modifier *= 1.0 + 0.08 * points(Talent::SanguinaryVein);
    }

    modifier
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::TalentSpec;
    use crate::env::fixtures::TestTalents;

    const CTX: TalentContext = TalentContext {
        mastery: 20.0,
        mainhand_is_dagger: true,
        bleeding: false,
    };

    fn approx_eq(a: f64, b: f64) {
        assert!((a - b).abs() <= 1e-12, "expected {b}, got {a}");
    }

    #[test]
    fn empty_scope_is_identity() {
        let talents = TestTalents::new(TalentSpec::Assassination)
            .with(Talent::Opportunity, 3)
            .with(Talent::SanguinaryVein, 2);
        assert_eq!(talent_modifier(&talents, TalentScope::empty(), CTX), 1.0);
    }

    #[test]
    fn additive_talents_sum() {
        let talents = TestTalents::new(TalentSpec::Subtlety)
            .with(Talent::Opportunity, 3)
            .with(Talent::Aggression, 2);
        let scope = TalentScope::OPPORTUNITY | TalentScope::AGGRESSION;
        approx_eq(talent_modifier(&talents, scope, CTX), 1.0 + 0.3 + 0.14);
    }

    #[test]
    fn tiered_talents_clamp_points() {
        let talents = TestTalents::new(TalentSpec::Combat).with(Talent::CoupDeGrace, 7);
        approx_eq(
            talent_modifier(&talents, TalentScope::COUP_DE_GRACE, CTX),
            1.2,
        );
    }

    #[test]
    fn mastery_talents_follow_spec() {
        let scope = TalentScope::EXECUTIONER | TalentScope::POTENT_POISONS;

        let subtlety = TestTalents::new(TalentSpec::Subtlety);
        approx_eq(talent_modifier(&subtlety, scope, CTX), 1.0 + 0.025 * 20.0);

        let assassination = TestTalents::new(TalentSpec::Assassination);
        approx_eq(
            talent_modifier(&assassination, scope, CTX),
            1.0 + 0.035 * 20.0,
        );

        let combat = TestTalents::new(TalentSpec::Combat);
        assert_eq!(talent_modifier(&combat, scope, CTX), 1.0);
    }

    #[test]
    fn assassins_resolve_needs_dagger() {
        let talents = TestTalents::new(TalentSpec::Assassination).with(Talent::Opportunity, 3);
        let scope = TalentScope::OPPORTUNITY | TalentScope::ASSASSINS_RESOLVE;

        approx_eq(talent_modifier(&talents, scope, CTX), 1.3 * 1.2);

        let sword = TalentContext {
            mainhand_is_dagger: false,
            ..CTX
        };
        approx_eq(talent_modifier(&talents, scope, sword), 1.3);
    }

    #[test]
    fn sanguinary_vein_applies_when_bleeding() {
        let talents = TestTalents::new(TalentSpec::Subtlety).with(Talent::SanguinaryVein, 2);
        let bleeding = TalentContext {
            bleeding: true,
            ..CTX
        };
        approx_eq(
            talent_modifier(&talents, TalentScope::empty(), bleeding),
            1.16,
        );
        assert_eq!(talent_modifier(&talents, TalentScope::empty(), CTX), 1.0);
    }
}
