//! Declarative per-ability damage descriptors.
//!
//! Every ability is evaluated by the same pipeline:
//!
//! ```text
//! damage      = percent * base_term * talent_modifier * raid_settings_modifier
//! damage     *= poisoned_bonus          (if the target is poisoned)
//! crit_damage = damage * crit_damage_modifier
//! ```
//!
//! What differs between abilities lives in [`AbilityDescriptor`]. Changing an
//! ability's behavior means editing one row of [`Ability::descriptor`].

use super::crit::CritRule;
use super::raid::AttackCategory;
use super::talents::TalentScope;

/// Rogue abilities and damage events.
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
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Ability {
    MainHandSwing,
    OffHandSwing,
    Backstab,
    MainHandMutilate,
    OffHandMutilate,
    SinisterStrike,
    Hemorrhage,
    HemorrhageTick,
    Ambush,
    RevealingStrike,
    VenomousWounds,
    MainGauche,
    MainHandKillingSpree,
    OffHandKillingSpree,
    InstantPoison,
    DeadlyPoisonTick,
    WoundPoison,
    GarroteTick,
    RuptureTick,
    Eviscerate,
    Envenom,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Hand {
    Main,
    /// Subject to the off-hand penalty.
    Off,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwingSpeed {
    /// Attack power taken at the weapon's own speed.
    Raw,
    /// Attack power taken at the weapon type's reference speed.
    Normalized,
}

/// Per-level flat bonus added to a weapon strike.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StrikeBonus {
    Backstab,
    Mutilate,
    SinisterStrike,
    Ambush,
}

/// Damage before percentage, talent and raid multipliers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BaseTerm {
    /// `(penalty * (weapon damage + hook bonus)) + strike bonus`
    Weapon {
        hand: Hand,
        speed: SwingSpeed,
        bonus: Option<StrikeBonus>,
    },
    /// A hemorrhage hit, or crit when the input says the tick came from one.
    HemorrhageHit,
    /// `vw_base + vw_pct * ap`
    VenomousWounds,
    /// `ip_base + 0.09 * ap`
    InstantPoison,
    /// `(dp_base + dp_pct * ap) * stacks / 4`
    DeadlyPoison,
    /// `wp_base + wp_pct * ap`
    WoundPoison,
    /// `garrote_base + 0.07 * ap`
    Garrote,
    /// `rup_base + rup_bonus * cp + coefficient[cp] * ap`
    Rupture,
    /// `evis_base + evis_bonus * cp + 0.091 * cp * ap`
    Eviscerate,
    /// `env_base * min(charges, cp) + 0.09 * cp * ap`
    Envenom,
}

/// How the caller's bleeding flag reaches the talent modifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BleedRule {
    /// Use the flag from the input.
    Caller,
    /// Always treat the target as bleeding.
    Always,
}

/// Main-hand weapon-type dependency of the percentage multiplier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DaggerRule {
    None,
    /// Use this percentage instead of the base one.
    Replace(f64),
    /// Multiply the base percentage.
    Scale(f64),
}

/// Percentage multiplier applied to the base term.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PercentRule {
    pub base: f64,
    pub dagger: DaggerRule,
    /// Extra factor for subtlety builds.
    pub subtlety: f64,
    /// Extra factor when the target is poisoned.
    pub poisoned: f64,
}

impl PercentRule {
    pub const fn flat(base: f64) -> Self {
        Self {
            base,
            dagger: DaggerRule::None,
            subtlety: 1.0,
            poisoned: 1.0,
        }
    }

    const fn dagger(mut self, rule: DaggerRule) -> Self {
        self.dagger = rule;
        self
    }

    const fn subtlety(mut self, factor: f64) -> Self {
        self.subtlety = factor;
        self
    }

    const fn poisoned(mut self, factor: f64) -> Self {
        self.poisoned = factor;
        self
    }

    /// Percentage before the poisoned factor.
    pub fn resolve(&self, mainhand_is_dagger: bool, is_subtlety: bool) -> f64 {
        let mut percent = match self.dagger {
            DaggerRule::Replace(percent) if mainhand_is_dagger => percent,
            DaggerRule::Scale(factor) if mainhand_is_dagger => self.base * factor,
            _ => self.base,
        };
        if is_subtlety {
            percent *= self.subtlety;
        }
        percent
    }
}

/// Everything that distinguishes one ability's formula from another's.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AbilityDescriptor {
    pub base: BaseTerm,
    /// `None` skips the talent modifier entirely, sanguinary vein included.
    pub talents: Option<TalentScope>,
    pub category: AttackCategory,
    pub crit: CritRule,
    pub percent: PercentRule,
    pub bleed: BleedRule,
}

/// Attack power coefficient of a rupture tick by combo points.
pub const RUPTURE_AP_COEFFICIENTS: [f64; 6] = [0.0, 0.015, 0.024, 0.03, 0.03428571, 0.0375];

/// Hemorrhage deals 40% of its hit over eight ticks.
pub const HEMORRHAGE_TICK_FACTOR: f64 = 0.4 / 8.0;

impl Ability {
    pub const fn descriptor(self) -> AbilityDescriptor {
        use AttackCategory::{Bleed, Physical, Spell};
        use BleedRule::{Always, Caller};
        use CritRule::Lethality;

        const AR: TalentScope = TalentScope::ASSASSINS_RESOLVE;
        const OPP: TalentScope = TalentScope::OPPORTUNITY;
        const PP: TalentScope = TalentScope::POTENT_POISONS;
        const POISONS: TalentScope = PP.union(TalentScope::VILE_POISONS);

        const fn weapon(hand: Hand, speed: SwingSpeed, bonus: Option<StrikeBonus>) -> BaseTerm {
            BaseTerm::Weapon { hand, speed, bonus }
        }

        const fn row(
            base: BaseTerm,
            talents: Option<TalentScope>,
            category: AttackCategory,
            crit: CritRule,
            percent: PercentRule,
            bleed: BleedRule,
        ) -> AbilityDescriptor {
            AbilityDescriptor {
                base,
                talents,
                category,
                crit,
                percent,
                bleed,
            }
        }

        const ONE: PercentRule = PercentRule::flat(1.0);
        const PHYS: CritRule = CritRule::Physical;
        const SPELL_CRIT: CritRule = CritRule::Spell;

        match self {
            Self::MainHandSwing => row(
                weapon(Hand::Main, SwingSpeed::Raw, None),
                Some(AR),
                Physical,
                PHYS,
                ONE,
                Caller,
            ),
            Self::OffHandSwing => row(
                weapon(Hand::Off, SwingSpeed::Raw, None),
                Some(AR),
                Physical,
                PHYS,
                ONE,
                Caller,
            ),
            Self::Backstab => row(
                weapon(
                    Hand::Main,
                    SwingSpeed::Normalized,
                    Some(StrikeBonus::Backstab),
                ),
                Some(OPP.union(TalentScope::AGGRESSION).union(AR)),
                Physical,
                Lethality,
                PercentRule::flat(2.0).subtlety(1.4),
                Caller,
            ),
            Self::MainHandMutilate => row(
                weapon(
                    Hand::Main,
                    SwingSpeed::Normalized,
                    Some(StrikeBonus::Mutilate),
                ),
                Some(OPP.union(AR)),
                Physical,
                Lethality,
                PercentRule::flat(1.5).poisoned(1.2),
                Always,
            ),
            Self::OffHandMutilate => row(
                weapon(
                    Hand::Off,
                    SwingSpeed::Normalized,
                    Some(StrikeBonus::Mutilate),
                ),
                Some(OPP.union(AR)),
                Physical,
                Lethality,
                PercentRule::flat(1.5).poisoned(1.2),
                Always,
            ),
            Self::SinisterStrike => row(
                weapon(
                    Hand::Main,
                    SwingSpeed::Normalized,
                    Some(StrikeBonus::SinisterStrike),
                ),
                Some(
                    TalentScope::AGGRESSION
                        .union(TalentScope::IMPROVED_SINISTER_STRIKE)
                        .union(AR),
                ),
                Physical,
                Lethality,
                ONE,
                Caller,
            ),
            Self::Hemorrhage => row(
                weapon(Hand::Main, SwingSpeed::Normalized, None),
                Some(TalentScope::empty()),
                Physical,
                Lethality,
                PercentRule::flat(1.55)
                    .dagger(DaggerRule::Replace(2.25))
                    .subtlety(1.4),
                Caller,
            ),
            Self::HemorrhageTick => row(
                BaseTerm::HemorrhageHit,
                Some(TalentScope::empty()),
                Bleed,
                PHYS,
                PercentRule::flat(HEMORRHAGE_TICK_FACTOR),
                Always,
            ),
            Self::Ambush => row(
                weapon(
                    Hand::Main,
                    SwingSpeed::Normalized,
                    Some(StrikeBonus::Ambush),
                ),
                Some(OPP.union(TalentScope::IMPROVED_AMBUSH).union(AR)),
                Physical,
                PHYS,
                PercentRule::flat(1.9).dagger(DaggerRule::Scale(1.447)),
                Caller,
            ),
            Self::RevealingStrike => row(
                weapon(Hand::Main, SwingSpeed::Raw, None),
                None,
                Physical,
                PHYS,
                PercentRule::flat(1.25),
                Always,
            ),
            Self::VenomousWounds => row(
                BaseTerm::VenomousWounds,
                Some(PP),
                Spell,
                SPELL_CRIT,
                ONE,
                Always,
            ),
            Self::MainGauche | Self::MainHandKillingSpree => row(
                weapon(Hand::Main, SwingSpeed::Normalized, None),
                None,
                Physical,
                PHYS,
                ONE,
                Always,
            ),
            Self::OffHandKillingSpree => row(
                weapon(Hand::Off, SwingSpeed::Normalized, None),
                None,
                Physical,
                PHYS,
                ONE,
                Always,
            ),
            Self::InstantPoison => row(
                BaseTerm::InstantPoison,
                Some(POISONS),
                Spell,
                SPELL_CRIT,
                ONE,
                Caller,
            ),
            Self::DeadlyPoisonTick => row(
                BaseTerm::DeadlyPoison,
                Some(POISONS),
                Spell,
                SPELL_CRIT,
                ONE,
                Caller,
            ),
            Self::WoundPoison => row(
                BaseTerm::WoundPoison,
                Some(POISONS),
                Spell,
                SPELL_CRIT,
                ONE,
                Caller,
            ),
            Self::GarroteTick => row(BaseTerm::Garrote, Some(OPP), Bleed, PHYS, ONE, Always),
            // Assassin's resolve is untested on bleeds and left out.
            Self::RuptureTick => row(
                BaseTerm::Rupture,
                Some(TalentScope::EXECUTIONER),
                Bleed,
                PHYS,
                ONE,
                Always,
            ),
            Self::Eviscerate => row(
                BaseTerm::Eviscerate,
                Some(
                    TalentScope::COUP_DE_GRACE
                        .union(TalentScope::AGGRESSION)
                        .union(TalentScope::EXECUTIONER)
                        .union(AR),
                ),
                Physical,
                PHYS,
                ONE,
                Caller,
            ),
            Self::Envenom => row(
                BaseTerm::Envenom,
                Some(
                    TalentScope::COUP_DE_GRACE
                        .union(TalentScope::EXECUTIONER)
                        .union(AR)
                        .union(PP),
                ),
                Spell,
                PHYS,
                ONE,
                Caller,
            ),
        }
    }

    /// Finishers consume combo points.
    pub const fn is_finisher(self) -> bool {
        matches!(self, Self::RuptureTick | Self::Eviscerate | Self::Envenom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_ability_has_a_row() {
        assert_eq!(Ability::iter().count(), 21);
        for ability in Ability::iter() {
            let descriptor = ability.descriptor();
            assert!(descriptor.percent.base > 0.0, "{ability}");
        }
    }

    #[test]
    fn untalented_abilities_skip_talents() {
        for ability in [
            Ability::RevealingStrike,
            Ability::MainGauche,
            Ability::MainHandKillingSpree,
            Ability::OffHandKillingSpree,
        ] {
            assert_eq!(ability.descriptor().talents, None, "{ability}");
        }
        assert_eq!(
            Ability::Hemorrhage.descriptor().talents,
            Some(TalentScope::empty())
        );
    }

    #[test]
    fn percentage_rules() {
        let hemo = Ability::Hemorrhage.descriptor().percent;
        assert_eq!(hemo.resolve(false, false), 1.55);
        assert_eq!(hemo.resolve(true, false), 2.25);
        assert_eq!(hemo.resolve(true, true), 2.25 * 1.4);

        let ambush = Ability::Ambush.descriptor().percent;
        assert_eq!(ambush.resolve(true, true), 1.9 * 1.447);
        assert_eq!(ambush.resolve(false, false), 1.9);

        let backstab = Ability::Backstab.descriptor().percent;
        assert_eq!(backstab.resolve(true, true), 2.0 * 1.4);
        assert_eq!(Ability::OffHandMutilate.descriptor().percent.poisoned, 1.2);
    }

    #[test]
    fn names_are_snake_case() {
        assert_eq!(Ability::DeadlyPoisonTick.to_string(), "deadly_poison_tick");
        assert_eq!(
            "main_hand_killing_spree".parse::<Ability>(),
            Ok(Ability::MainHandKillingSpree)
        );
    }

    #[test]
    fn rupture_coefficient_is_exact() {
        assert_eq!(RUPTURE_AP_COEFFICIENTS[4], 0.03428571);
        assert!(Ability::RuptureTick.is_finisher());
        assert!(!Ability::GarroteTick.is_finisher());
    }
}
