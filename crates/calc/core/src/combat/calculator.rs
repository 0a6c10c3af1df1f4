//! Rogue damage calculator.
//!
//! [`RogueDamageCalculator`] binds one [`StatModel`] to one [`BuildEnv`] and the
//! ability constants for the model's level. Every ability goes through
//! [`RogueDamageCalculator::damage`]; the per-ability differences come from
//! [`Ability::descriptor`].

use super::abilities::{
    Ability, AbilityDescriptor, BaseTerm, BleedRule, Hand, RUPTURE_AP_COEFFICIENTS, StrikeBonus,
    SwingSpeed,
};
use super::constants::AbilityConstants;
use super::crit::{self, AGI_CRIT_INTERCEPT, CritRule, MELEE_CRIT_REDUCTION, SPELL_CRIT_REDUCTION};
use super::hit::{self, Avoidance, DUAL_WIELD_MISS, ONE_HAND_MISS};
use super::raid::{self, AttackCategory};
use super::talents::{self, TalentContext, TalentScope};
use crate::env::{BuildEnv, Glyph, Talent};
use crate::error::{CalcError, Result};
use crate::stats::{ActivatedBoost, StatModel};

/// Highest combo point count a finisher can consume.
pub const MAX_COMBO_POINTS: u8 = 5;

/// Extension point for effects that add flat weapon damage.
pub trait DamageHooks: Send + Sync {
    /// Flat damage added to every weapon strike before multipliers.
    fn weapon_damage_bonus(&self) -> f64 {
        0.0
    }
}

/// Hooks that add nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoHooks;

impl DamageHooks for NoHooks {}

/// Damage of one hit and of the same hit as a critical strike.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageRoll {
    pub damage: f64,
    pub crit_damage: f64,
}

/// Already-resolved combat state for a single cast.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AbilityInput {
    pub attack_power: f64,
    /// Target armor before debuffs. `None` uses the calculator's default.
    pub armor: Option<f64>,
    /// Mastery rating override. `None` uses the stat model's rating.
    pub mastery_rating: Option<f64>,
    pub combo_points: u8,
    /// Deadly poison stacks on the target; also caps envenom's base damage.
    pub poison_stacks: u8,
    pub bleeding: bool,
    pub poisoned: bool,
    /// For hemorrhage ticks: whether the applying hemorrhage was a crit.
    pub from_crit: bool,
}

impl AbilityInput {
    pub fn new(attack_power: f64) -> Self {
        Self {
            attack_power,
            armor: None,
            mastery_rating: None,
            combo_points: 0,
            poison_stacks: 5,
            bleeding: true,
            poisoned: true,
            from_crit: false,
        }
    }

    pub fn armor(mut self, armor: f64) -> Self {
        self.armor = Some(armor);
        self
    }

    pub fn mastery_rating(mut self, rating: f64) -> Self {
        self.mastery_rating = Some(rating);
        self
    }

    pub fn combo_points(mut self, combo_points: u8) -> Self {
        self.combo_points = combo_points;
        self
    }

    pub fn poison_stacks(mut self, stacks: u8) -> Self {
        self.poison_stacks = stacks;
        self
    }

    pub fn bleeding(mut self, bleeding: bool) -> Self {
        self.bleeding = bleeding;
        self
    }

    pub fn poisoned(mut self, poisoned: bool) -> Self {
        self.poisoned = poisoned;
        self
    }

    pub fn from_crit(mut self, from_crit: bool) -> Self {
        self.from_crit = from_crit;
        self
    }
}

/// Deterministic damage formulas for one rogue build.
pub struct RogueDamageCalculator<'a, H = NoHooks> {
    stats: &'a StatModel,
    env: BuildEnv<'a>,
    constants: AbilityConstants,
    default_armor: Option<f64>,
    hooks: H,
}

impl<'a> RogueDamageCalculator<'a, NoHooks> {
    /// Creates a calculator at `stats.level()`.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::InvalidLevel` naming the first ability table without
    /// a row for the level.
    pub fn new(stats: &'a StatModel, env: BuildEnv<'a>) -> Result<Self> {
        Self::with_hooks(stats, env, NoHooks)
    }
}

impl<'a, H: DamageHooks> RogueDamageCalculator<'a, H> {
    /// Creates a calculator with custom [`DamageHooks`].
    ///
    /// # Errors
    ///
    /// Returns `CalcError::InvalidLevel` naming the first ability table without
    /// a row for the level.
    pub fn with_hooks(stats: &'a StatModel, env: BuildEnv<'a>, hooks: H) -> Result<Self> {
        let constants = AbilityConstants::for_level(stats.level())?;
        Ok(Self {
            stats,
            env,
            constants,
            default_armor: None,
            hooks,
        })
    }

    /// Armor used when an input carries none. `None` restores the boss armor
    /// for the level.
    pub fn default_armor(mut self, armor: Option<f64>) -> Self {
        self.default_armor = armor;
        self
    }

    pub fn level(&self) -> u32 {
        self.constants.level
    }

    pub fn stats(&self) -> &'a StatModel {
        self.stats
    }

    pub fn env(&self) -> BuildEnv<'a> {
        self.env
    }

    pub fn constants(&self) -> &AbilityConstants {
        &self.constants
    }

    pub fn weapon_damage_bonus(&self) -> f64 {
        self.hooks.weapon_damage_bonus()
    }

    pub fn offhand_penalty(&self) -> f64 {
        if self.env.talents().is_combat() {
            0.875
        } else {
            0.5
        }
    }

    /// Talent multiplier for `scope`.
    ///
    /// `mastery_rating` overrides the stat model's mastery rating.
    pub fn talent_modifier(
        &self,
        scope: TalentScope,
        mastery_rating: Option<f64>,
        bleeding: bool,
    ) -> f64 {
        let ctx = TalentContext {
            mastery: self.stats.mastery_from_rating(mastery_rating),
            mainhand_is_dagger: self.stats.mainhand().is_dagger(),
            bleeding,
        };
        talents::talent_modifier(self.env.talents(), scope, ctx)
    }

    pub fn crit_damage_modifier(&self, lethality: bool, is_spell: bool) -> f64 {
        let lethality_points = lethality.then(|| self.env.talents().points(Talent::Lethality));
        crit::crit_damage_modifier(
            self.stats.gear_buffs().metagem_crit_multiplier(),
            lethality_points,
            is_spell,
        )
    }

    fn crit_rule_modifier(&self, rule: CritRule) -> f64 {
        match rule {
            CritRule::Physical => self.crit_damage_modifier(false, false),
            CritRule::Lethality => self.crit_damage_modifier(true, false),
            CritRule::Spell => self.crit_damage_modifier(false, true),
        }
    }

    /// Effective target armor after debuffs.
    pub fn target_armor(&self, armor: Option<f64>) -> f64 {
        let base = armor
            .or(self.default_armor)
            .unwrap_or(self.constants.base_armor);
        raid::target_armor(base, self.env.buffs())
    }

    pub fn armor_mitigation_multiplier(&self, armor: f64) -> f64 {
        raid::armor_mitigation_multiplier(armor, self.level())
    }

    pub fn raid_settings_modifier(&self, category: AttackCategory, armor: Option<f64>) -> f64 {
        raid::raid_settings_modifier(
            category,
            self.target_armor(armor),
            self.level(),
            self.env.buffs(),
        )
    }

    /// [`Self::raid_settings_modifier`] with the category given by name.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::InvalidCategory` for anything other than `physical`,
    /// `spell` or `bleed`.
    pub fn raid_settings_modifier_by_name(
        &self,
        category: &str,
        armor: Option<f64>,
    ) -> Result<f64> {
        let category = AttackCategory::parse(category)?;
        Ok(self.raid_settings_modifier(category, armor))
    }

    /// Damage of `ability` for the cast described by `input`.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::InvalidComboPoints` when `input.combo_points` exceeds
    /// [`MAX_COMBO_POINTS`].
    pub fn damage(&self, ability: Ability, input: &AbilityInput) -> Result<DamageRoll> {
        if input.combo_points > MAX_COMBO_POINTS {
            return Err(CalcError::InvalidComboPoints(input.combo_points));
        }

        let descriptor = ability.descriptor();
        let roll = self.evaluate(&descriptor, input)?;
        tracing::trace!(
            %ability,
            damage = roll.damage,
            crit_damage = roll.crit_damage,
            "evaluated ability"
        );
        Ok(roll)
    }

    fn evaluate(&self, descriptor: &AbilityDescriptor, input: &AbilityInput) -> Result<DamageRoll> {
        let base = self.base_term(descriptor.base, input)?;

        let bleeding = match descriptor.bleed {
            BleedRule::Caller => input.bleeding,
            BleedRule::Always => true,
        };
        let talents = descriptor.talents.map_or(1.0, |scope| {
            self.talent_modifier(scope, input.mastery_rating, bleeding)
        });
        let multiplier = talents * self.raid_settings_modifier(descriptor.category, input.armor);

        let percent = descriptor.percent.resolve(
            self.stats.mainhand().is_dagger(),
            self.env.talents().is_subtlety(),
        );
        let mut damage = percent * base * multiplier;
        if input.poisoned {
            damage *= descriptor.percent.poisoned;
        }

        Ok(DamageRoll {
            damage,
            crit_damage: damage * self.crit_rule_modifier(descriptor.crit),
        })
    }

    fn base_term(&self, term: BaseTerm, input: &AbilityInput) -> Result<f64> {
        let c = &self.constants;
        let ap = input.attack_power;
        let cp = f64::from(input.combo_points);

        let value = match term {
            BaseTerm::Weapon { hand, speed, bonus } => {
                let weapon = match hand {
                    Hand::Main => self.stats.mainhand(),
                    Hand::Off => self.stats.offhand(),
                };
                let swing = match speed {
                    SwingSpeed::Raw => weapon.raw_damage(ap),
                    SwingSpeed::Normalized => weapon.normalized_damage(ap),
                } + self.weapon_damage_bonus();
                let swing = match hand {
                    Hand::Main => swing,
                    Hand::Off => self.offhand_penalty() * swing,
                };
                swing + bonus.map_or(0.0, |bonus| strike_bonus(c, bonus))
            }
            BaseTerm::HemorrhageHit => {
                let hit_input = AbilityInput {
                    bleeding: true,
                    ..*input
                };
                let hit = self.evaluate(&Ability::Hemorrhage.descriptor(), &hit_input)?;
                if input.from_crit {
                    hit.crit_damage
                } else {
                    hit.damage
                }
            }
            BaseTerm::VenomousWounds => c.vw_base_dmg + c.vw_percentage_dmg * ap,
            BaseTerm::InstantPoison => c.ip_base_dmg + 0.09 * ap,
            BaseTerm::DeadlyPoison => {
                (c.dp_base_dmg + c.dp_percentage_dmg * ap) * f64::from(input.poison_stacks) / 4.0
            }
            BaseTerm::WoundPoison => c.wp_base_dmg + c.wp_percentage_dmg * ap,
            BaseTerm::Garrote => c.garrote_base_dmg + ap * 0.07,
            BaseTerm::Rupture => {
                let coefficient = RUPTURE_AP_COEFFICIENTS
                    .get(usize::from(input.combo_points))
                    .copied()
                    .ok_or(CalcError::InvalidComboPoints(input.combo_points))?;
                c.rup_base_dmg + c.rup_bonus_dmg * cp + coefficient * ap
            }
            BaseTerm::Eviscerate => c.evis_base_dmg + c.evis_bonus_dmg * cp + 0.091 * cp * ap,
            BaseTerm::Envenom => {
                let charges = input.poison_stacks.min(input.combo_points);
                c.env_base_dmg * f64::from(charges) + 0.09 * cp * ap
            }
        };
        Ok(value)
    }

    /// Agility after gear effects that depend on raid buffs.
    pub fn agility(&self) -> f64 {
        let flask = self.env.buffs().agi_flask();
        self.stats.agility() + self.stats.gear_buffs().mixology_agility_bonus(flask)
    }

    /// Crit rating after gear effects.
    pub fn crit_rating(&self) -> f64 {
        self.stats.crit_rating() + self.stats.gear_buffs().master_of_anatomy_crit_rating()
    }

    /// Melee crit chance.
    ///
    /// `agility` and `crit_rating` override [`Self::agility`] and
    /// [`Self::crit_rating`].
    pub fn melee_crit_rate(&self, agility: Option<f64>, crit_rating: Option<f64>) -> f64 {
        let agility = agility.unwrap_or_else(|| self.agility());
        let rating = crit_rating.unwrap_or_else(|| self.crit_rating());
        let base = AGI_CRIT_INTERCEPT
            + agility / self.constants.agi_per_crit
            + self.stats.crit_from_rating(Some(rating));
        base
            + self.env.buffs().all_crit_bonus()
            + self.env.race().racial_crit()
            - MELEE_CRIT_REDUCTION
    }

    /// Spell crit chance. `crit_rating` overrides [`Self::crit_rating`].
    pub fn spell_crit_rate(&self, crit_rating: Option<f64>) -> f64 {
        let rating = crit_rating.unwrap_or_else(|| self.crit_rating());
        let base = self.stats.crit_from_rating(Some(rating));
        base
            + self.env.buffs().all_crit_bonus()
            + self.env.buffs().spell_crit_bonus()
            + self.env.race().racial_crit()
            - SPELL_CRIT_REDUCTION
    }

    pub fn melee_hit_from_talents(&self) -> f64 {
        0.02 * f64::from(self.env.talents().points(Talent::Precision))
    }

    pub fn spell_hit_from_talents(&self) -> f64 {
        0.02 * f64::from(self.env.talents().points(Talent::Precision))
    }

    fn melee_hit_chance(&self, base_miss: f64, dodgeable: bool, parryable: bool) -> f64 {
        hit::melee_hit_chance(
            base_miss,
            self.stats.melee_hit_from_rating(None) + self.melee_hit_from_talents(),
            self.stats.expertise_from_rating(None),
            Avoidance {
                dodgeable,
                parryable,
            },
        )
    }

    /// Hit chance of a special attack or a single-wielded swing.
    pub fn one_hand_melee_hit_chance(&self, dodgeable: bool, parryable: bool) -> f64 {
        self.melee_hit_chance(ONE_HAND_MISS, dodgeable, parryable)
    }

    /// Hit chance of a main-hand auto attack while dual wielding.
    pub fn dual_wield_mh_hit_chance(&self, dodgeable: bool, parryable: bool) -> f64 {
        self.melee_hit_chance(DUAL_WIELD_MISS, dodgeable, parryable)
    }

    /// Hit chance of an off-hand auto attack while dual wielding.
    pub fn dual_wield_oh_hit_chance(&self, dodgeable: bool, parryable: bool) -> f64 {
        self.melee_hit_chance(DUAL_WIELD_MISS, dodgeable, parryable)
    }

    pub fn spell_hit_chance(&self) -> f64 {
        hit::spell_hit_chance(
            self.stats.spell_hit_from_rating(None) + self.spell_hit_from_talents(),
        )
    }

    /// Number of two-second ticks a rupture with `combo_points` lasts.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::InvalidComboPoints` above [`MAX_COMBO_POINTS`].
    pub fn rupture_ticks(&self, combo_points: u8) -> Result<u8> {
        if combo_points > MAX_COMBO_POINTS {
            return Err(CalcError::InvalidComboPoints(combo_points));
        }
        let mut duration = 6 + 2 * combo_points;
        if self.env.glyphs().has_glyph(Glyph::Rupture) {
            duration += 4;
        }
        Ok(duration / 2)
    }

    /// On-use boosts from gear followed by racials.
    ///
    /// # Errors
    ///
    /// Propagates `CalcError::InvalidLevel` from the race oracle.
    pub fn all_activated_stat_boosts(&self) -> Result<Vec<ActivatedBoost>> {
        let mut boosts = self.stats.gear_buffs().activated_boosts();
        boosts.extend(self.env.race().activated_boosts(self.level())?);
        Ok(boosts)
    }
}

fn strike_bonus(constants: &AbilityConstants, bonus: StrikeBonus) -> f64 {
    match bonus {
        StrikeBonus::Backstab => constants.bs_bonus_dmg,
        StrikeBonus::Mutilate => constants.mut_bonus_dmg,
        StrikeBonus::SinisterStrike => constants.ss_bonus_dmg,
        StrikeBonus::Ambush => constants.ambush_bonus_dmg,
    }
}
