//! Character stat model.
//!
//! Raw stats from gear and race (no talent or buff multipliers) plus the rating
//! divisors for the model's level. Level is fixed at construction; use
//! [`StatModel::with_level`] to obtain a re-derived copy at another level.

use super::gear::GearBuffs;
use super::procs::ProcList;
use super::ratings::RatingConversions;
use super::weapon::{Weapon, WeaponType};
use crate::config::CalcConfig;
use crate::error::Result;

/// Raw character statistics for one build.
#[derive(Clone, Debug, PartialEq)]
pub struct StatModel {
    strength: f64,
    agility: f64,
    attack_power: f64,
    crit_rating: f64,
    hit_rating: f64,
    expertise_rating: f64,
    haste_rating: f64,
    mastery_rating: f64,
    mainhand: Weapon,
    offhand: Weapon,
    ranged: Weapon,
    procs: ProcList,
    gear_buffs: GearBuffs,
    conversions: RatingConversions,
}

impl StatModel {
    pub fn builder() -> StatModelBuilder {
        StatModelBuilder::default()
    }

    /// Returns a copy of this model re-derived for `level`.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::InvalidLevel` when `level` has no rating conversions.
    /// `self` is unaffected.
    pub fn with_level(&self, level: u32) -> Result<Self> {
        let conversions = RatingConversions::for_level(level)?;
        Ok(Self {
            conversions,
            ..self.clone()
        })
    }

    pub fn level(&self) -> u32 {
        self.conversions.level
    }

    pub fn conversions(&self) -> &RatingConversions {
        &self.conversions
    }

    pub fn strength(&self) -> f64 {
        self.strength
    }

    pub fn agility(&self) -> f64 {
        self.agility
    }

    /// Attack power from gear and level only.
    pub fn attack_power(&self) -> f64 {
        self.attack_power
    }

    pub fn crit_rating(&self) -> f64 {
        self.crit_rating
    }

    pub fn hit_rating(&self) -> f64 {
        self.hit_rating
    }

    pub fn expertise_rating(&self) -> f64 {
        self.expertise_rating
    }

    pub fn haste_rating(&self) -> f64 {
        self.haste_rating
    }

    pub fn mastery_rating(&self) -> f64 {
        self.mastery_rating
    }

    pub fn mainhand(&self) -> &Weapon {
        &self.mainhand
    }

    pub fn offhand(&self) -> &Weapon {
        &self.offhand
    }

    pub fn ranged(&self) -> &Weapon {
        &self.ranged
    }

    pub fn procs(&self) -> &ProcList {
        &self.procs
    }

    pub fn gear_buffs(&self) -> &GearBuffs {
        &self.gear_buffs
    }

    pub fn mastery_from_rating(&self, rating: Option<f64>) -> f64 {
        self.conversions
            .mastery_from_rating(rating.unwrap_or(self.mastery_rating))
    }

    pub fn melee_hit_from_rating(&self, rating: Option<f64>) -> f64 {
        self.conversions
            .melee_hit_from_rating(rating.unwrap_or(self.hit_rating))
    }

    pub fn spell_hit_from_rating(&self, rating: Option<f64>) -> f64 {
        self.conversions
            .spell_hit_from_rating(rating.unwrap_or(self.hit_rating))
    }

    pub fn expertise_from_rating(&self, rating: Option<f64>) -> f64 {
        self.conversions
            .expertise_from_rating(rating.unwrap_or(self.expertise_rating))
    }

    pub fn crit_from_rating(&self, rating: Option<f64>) -> f64 {
        self.conversions
            .crit_from_rating(rating.unwrap_or(self.crit_rating))
    }

    pub fn haste_multiplier_from_rating(&self, rating: Option<f64>) -> f64 {
        self.conversions
            .haste_multiplier_from_rating(rating.unwrap_or(self.haste_rating))
    }
}

/// Builder for [`StatModel`].
///
/// Every stat defaults to zero, weapons default to bare fists and the level
/// defaults to [`CalcConfig::DEFAULT_LEVEL`].
#[derive(Clone, Debug)]
pub struct StatModelBuilder {
    strength: f64,
    agility: f64,
    attack_power: f64,
    crit_rating: f64,
    hit_rating: f64,
    expertise_rating: f64,
    haste_rating: f64,
    mastery_rating: f64,
    mainhand: Weapon,
    offhand: Weapon,
    ranged: Weapon,
    procs: ProcList,
    gear_buffs: GearBuffs,
    level: u32,
}

impl Default for StatModelBuilder {
    fn default() -> Self {
        Self {
            strength: 0.0,
            agility: 0.0,
            attack_power: 0.0,
            crit_rating: 0.0,
            hit_rating: 0.0,
            expertise_rating: 0.0,
            haste_rating: 0.0,
            mastery_rating: 0.0,
            mainhand: Weapon::new(0.0, 2.0, WeaponType::Fist),
            offhand: Weapon::new(0.0, 2.0, WeaponType::Fist),
            ranged: Weapon::new(0.0, 2.0, WeaponType::Thrown),
            procs: ProcList::new(),
            gear_buffs: GearBuffs::default(),
            level: CalcConfig::DEFAULT_LEVEL,
        }
    }
}

impl StatModelBuilder {
    pub fn strength(mut self, value: f64) -> Self {
        self.strength = value;
        self
    }

    pub fn agility(mut self, value: f64) -> Self {
        self.agility = value;
        self
    }

    pub fn attack_power(mut self, value: f64) -> Self {
        self.attack_power = value;
        self
    }

    pub fn crit_rating(mut self, value: f64) -> Self {
        self.crit_rating = value;
        self
    }

    pub fn hit_rating(mut self, value: f64) -> Self {
        self.hit_rating = value;
        self
    }

    pub fn expertise_rating(mut self, value: f64) -> Self {
        self.expertise_rating = value;
        self
    }

    pub fn haste_rating(mut self, value: f64) -> Self {
        self.haste_rating = value;
        self
    }

    pub fn mastery_rating(mut self, value: f64) -> Self {
        self.mastery_rating = value;
        self
    }

    pub fn mainhand(mut self, weapon: Weapon) -> Self {
        self.mainhand = weapon;
        self
    }

    pub fn offhand(mut self, weapon: Weapon) -> Self {
        self.offhand = weapon;
        self
    }

    pub fn ranged(mut self, weapon: Weapon) -> Self {
        self.ranged = weapon;
        self
    }

    pub fn procs(mut self, procs: ProcList) -> Self {
        self.procs = procs;
        self
    }

    pub fn gear_buffs(mut self, gear_buffs: GearBuffs) -> Self {
        self.gear_buffs = gear_buffs;
        self
    }

    pub fn level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    /// Resolves the rating conversions and builds the model.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::InvalidLevel` when the level has no rating conversions.
    pub fn build(self) -> Result<StatModel> {
        let conversions = RatingConversions::for_level(self.level)?;
        tracing::debug!(level = self.level, "resolved rating conversions");

        Ok(StatModel {
            strength: self.strength,
            agility: self.agility,
            attack_power: self.attack_power,
            crit_rating: self.crit_rating,
            hit_rating: self.hit_rating,
            expertise_rating: self.expertise_rating,
            haste_rating: self.haste_rating,
            mastery_rating: self.mastery_rating,
            mainhand: self.mainhand,
            offhand: self.offhand,
            ranged: self.ranged,
            procs: self.procs,
            gear_buffs: self.gear_buffs,
            conversions,
        })
    }
}
