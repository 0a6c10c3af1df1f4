//! Gear buffs: set bonuses, meta gems and on-use effects.
//!
//! The vocabulary is closed. A [`GearBuffs`] set is built once from the enabled
//! buffs; every buff not in that set reads as inactive. Asking about a buff that
//! does not exist is a compile error rather than a silent `false`.

use core::str::FromStr;

use strum::{EnumCount, IntoEnumIterator};

use super::procs::BoostStat;
use crate::error::{CalcError, Result};

/// Agility mixology adds on top of an agility flask.
pub const MIXOLOGY_AGILITY: f64 = 80.0;
/// Crit rating granted by master of anatomy.
pub const MASTER_OF_ANATOMY_CRIT_RATING: f64 = 80.0;

/// Every gear-derived buff the calculator knows about.
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
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum GearBuff {
    // Passive effects
    /// +5% to the primary stat.
    LeatherSpecialization,
    /// +3% critical damage.
    ChaoticMetagem,
    /// +5% crit chance on backstab, mutilate and sinister strike.
    #[strum(serialize = "rogue_t11_2pc")]
    RogueT11TwoPiece,
    /// 6% of melee crit damage added as a fire DoT.
    #[strum(serialize = "rogue_t12_2pc")]
    RogueT12TwoPiece,
    /// +25% crit/haste/mastery rating after every Tricks of the Trade.
    #[strum(serialize = "rogue_t12_4pc")]
    RogueT12FourPiece,
    /// Reduced energy costs after every Tricks of the Trade.
    #[strum(serialize = "rogue_t13_2pc")]
    RogueT13TwoPiece,
    /// Longer Shadow Dance, Adrenaline Rush and Vendetta.
    #[strum(serialize = "rogue_t13_4pc")]
    RogueT13FourPiece,
    /// +45% damage on sinister strike and revealing strike.
    RogueT13Legendary,
    Mixology,
    MasterOfAnatomy,

    // Activated boosts
    UnsolvableRiddle,
    DemonPanther,
    SkardynsGrace,
    HeroicSkardynsGrace,
    PotionOfTheTolvir,
    PotionOfTheTolvirPrepot,
    EngineerGloveEnchant,
    SynapseSprings,
    TazikShocker,
    Lifeblood,
    AncientPetrifiedSeed,
    HeroicAncientPetrifiedSeed,
    RicketsMagneticFireball,
    KiroptyricSigil,
    HeroicKiroptyricSigil,
    LfrKiroptyricSigil,
}

/// An on-use stat boost.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ActivatedBoost {
    pub stat: BoostStat,
    pub value: f64,
    /// Seconds.
    pub duration: u32,
    /// Seconds. `None` means once per fight.
    pub cooldown: Option<u32>,
    /// Display name, present for boosts that deal damage on use.
    pub name: Option<&'static str>,
}

impl ActivatedBoost {
    pub const fn new(stat: BoostStat, value: f64, duration: u32, cooldown: Option<u32>) -> Self {
        Self {
            stat,
            value,
            duration,
            cooldown,
            name: None,
        }
    }

    pub const fn named(mut self, name: &'static str) -> Self {
        self.name = Some(name);
        self
    }
}

impl GearBuff {
    /// The on-use boost for this buff, if it is an activated one.
    pub const fn activated_boost(self) -> Option<ActivatedBoost> {
        use BoostStat::*;
        let boost = match self {
            Self::UnsolvableRiddle => ActivatedBoost::new(Agility, 1605.0, 20, Some(120)),
            Self::DemonPanther => ActivatedBoost::new(Agility, 1425.0, 20, Some(120)),
            Self::SkardynsGrace => ActivatedBoost::new(Mastery, 1260.0, 20, Some(120)),
            Self::HeroicSkardynsGrace => ActivatedBoost::new(Mastery, 1425.0, 20, Some(120)),
            Self::PotionOfTheTolvir => ActivatedBoost::new(Agility, 1200.0, 25, None),
            // Rough stand-in for a pre-pull potion until openers are modeled.
            Self::PotionOfTheTolvirPrepot => ActivatedBoost::new(Agility, 1200.0, 23, None),
            Self::EngineerGloveEnchant => ActivatedBoost::new(Haste, 340.0, 12, Some(60)),
            Self::SynapseSprings => ActivatedBoost::new(Varies, 480.0, 10, Some(60)),
            Self::TazikShocker => {
                ActivatedBoost::new(SpellDamage, 4800.0, 0, Some(60)).named("Tazik Shocker")
            }
            Self::Lifeblood => ActivatedBoost::new(Haste, 480.0, 20, Some(120)),
            Self::AncientPetrifiedSeed => ActivatedBoost::new(Agility, 1277.0, 15, Some(60)),
            Self::HeroicAncientPetrifiedSeed => ActivatedBoost::new(Agility, 1441.0, 15, Some(60)),
            Self::RicketsMagneticFireball => ActivatedBoost::new(Crit, 1700.0, 20, Some(120)),
            Self::KiroptyricSigil => ActivatedBoost::new(Agility, 2290.0, 15, Some(90)),
            Self::HeroicKiroptyricSigil => ActivatedBoost::new(Agility, 2585.0, 15, Some(90)),
            Self::LfrKiroptyricSigil => ActivatedBoost::new(Agility, 2029.0, 15, Some(90)),
            _ => return None,
        };
        Some(boost)
    }

    #[inline]
    const fn as_index(self) -> usize {
        self as usize
    }
}

/// The set of gear buffs a build has.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GearBuffs {
    enabled: [bool; GearBuff::COUNT],
}

impl GearBuffs {
    /// Builds the set from enabled buffs.
    pub fn new(buffs: impl IntoIterator<Item = GearBuff>) -> Self {
        let mut enabled = [false; GearBuff::COUNT];
        for buff in buffs {
            enabled[buff.as_index()] = true;
        }
        Self { enabled }
    }

    /// Builds the set from buff names.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::UnknownGearBuff` for the first name outside the
    /// vocabulary.
    pub fn from_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Result<Self> {
        let buffs = names
            .into_iter()
            .map(|name| {
                GearBuff::from_str(name).map_err(|_| CalcError::UnknownGearBuff(name.to_owned()))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(buffs))
    }

    pub fn is_active(&self, buff: GearBuff) -> bool {
        self.enabled[buff.as_index()]
    }

    /// Enabled buffs in declaration order.
    pub fn active(&self) -> impl Iterator<Item = GearBuff> + '_ {
        GearBuff::iter().filter(|buff| self.is_active(*buff))
    }

    fn pick<T>(&self, buff: GearBuff, active: T, inactive: T) -> T {
        if self.is_active(buff) { active } else { inactive }
    }

    pub fn metagem_crit_multiplier(&self) -> f64 {
        self.pick(GearBuff::ChaoticMetagem, 1.03, 1.0)
    }

    pub fn rogue_t11_2pc_crit_bonus(&self) -> f64 {
        self.pick(GearBuff::RogueT11TwoPiece, 0.05, 0.0)
    }

    pub fn rogue_t12_2pc_damage_bonus(&self) -> f64 {
        self.pick(GearBuff::RogueT12TwoPiece, 0.06, 0.0)
    }

    pub fn rogue_t12_4pc_stat_bonus(&self) -> f64 {
        self.pick(GearBuff::RogueT12FourPiece, 0.25, 0.0)
    }

    pub fn rogue_t13_2pc_cost_multiplier(&self) -> f64 {
        self.pick(GearBuff::RogueT13TwoPiece, 1.0 / 1.05, 1.0)
    }

    pub fn leather_specialization_multiplier(&self) -> f64 {
        self.pick(GearBuff::LeatherSpecialization, 1.05, 1.0)
    }

    /// Extra agility from mixology. Mixology only amplifies an active flask.
    pub fn mixology_agility_bonus(&self, agi_flask: bool) -> f64 {
        if agi_flask {
            self.pick(GearBuff::Mixology, MIXOLOGY_AGILITY, 0.0)
        } else {
            0.0
        }
    }

    pub fn master_of_anatomy_crit_rating(&self) -> f64 {
        self.pick(GearBuff::MasterOfAnatomy, MASTER_OF_ANATOMY_CRIT_RATING, 0.0)
    }

    /// Every enabled on-use boost.
    pub fn activated_boosts(&self) -> Vec<ActivatedBoost> {
        self.active().filter_map(GearBuff::activated_boost).collect()
    }

    /// Enabled on-use boosts affecting `stat`.
    pub fn activated_boosts_for(&self, stat: BoostStat) -> Vec<ActivatedBoost> {
        self.active()
            .filter_map(GearBuff::activated_boost)
            .filter(|boost| boost.stat == stat)
            .collect()
    }

    pub fn activated_agi_boosts(&self) -> Vec<ActivatedBoost> {
        self.activated_boosts_for(BoostStat::Agility)
    }

    // Reported as rating: the conversion to haste depends on level and must be
    // combined with the rating from gear before converting.
    pub fn activated_haste_rating_boosts(&self) -> Vec<ActivatedBoost> {
        self.activated_boosts_for(BoostStat::Haste)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_reads_everything_inactive() {
        let buffs = GearBuffs::default();
        assert!(GearBuff::iter().all(|buff| !buffs.is_active(buff)));
        assert_eq!(buffs.metagem_crit_multiplier(), 1.0);
        assert_eq!(buffs.rogue_t11_2pc_crit_bonus(), 0.0);
        assert_eq!(buffs.rogue_t13_2pc_cost_multiplier(), 1.0);
        assert!(buffs.activated_boosts().is_empty());
    }

    #[test]
    fn single_flag_reads_alone() {
        let buffs = GearBuffs::new([GearBuff::RogueT12TwoPiece]);
        for buff in GearBuff::iter() {
            assert_eq!(buffs.is_active(buff), buff == GearBuff::RogueT12TwoPiece);
        }
        assert_eq!(buffs.rogue_t12_2pc_damage_bonus(), 0.06);
        assert_eq!(buffs.rogue_t12_4pc_stat_bonus(), 0.0);
    }

    #[test]
    fn names_follow_set_bonus_convention() {
        let buffs = GearBuffs::from_names(["rogue_t11_2pc", "chaotic_metagem"]).unwrap();
        assert!(buffs.is_active(GearBuff::RogueT11TwoPiece));
        assert_eq!(buffs.metagem_crit_multiplier(), 1.03);
        assert_eq!(GearBuff::RogueT13Legendary.as_ref(), "rogue_t13_legendary");
    }

    #[test]
    fn mixology_needs_a_flask() {
        let buffs = GearBuffs::new([GearBuff::Mixology]);
        assert_eq!(buffs.mixology_agility_bonus(false), 0.0);
        assert_eq!(buffs.mixology_agility_bonus(true), 80.0);
        assert_eq!(GearBuffs::default().mixology_agility_bonus(true), 0.0);
    }

    #[test]
    fn master_of_anatomy_adds_crit_rating() {
        let buffs = GearBuffs::from_names(["master_of_anatomy"]).unwrap();
        assert_eq!(buffs.master_of_anatomy_crit_rating(), 80.0);
        assert_eq!(GearBuffs::default().master_of_anatomy_crit_rating(), 0.0);
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = GearBuffs::from_names(["leather_specialisation"]).unwrap_err();
        assert_eq!(
            err,
            CalcError::UnknownGearBuff("leather_specialisation".into())
        );
    }

    #[test]
    fn activated_boosts_filter_by_stat() {
        let buffs = GearBuffs::new([
            GearBuff::LeatherSpecialization,
            GearBuff::PotionOfTheTolvir,
            GearBuff::Lifeblood,
            GearBuff::TazikShocker,
        ]);

        assert_eq!(buffs.activated_boosts().len(), 3);

        let agi = buffs.activated_agi_boosts();
        assert_eq!(agi.len(), 1);
        assert_eq!(agi[0].value, 1200.0);
        assert_eq!(agi[0].cooldown, None);

        let haste = buffs.activated_haste_rating_boosts();
        assert_eq!(haste.len(), 1);
        assert_eq!(haste[0].duration, 20);

        let shock = buffs.activated_boosts_for(BoostStat::SpellDamage);
        assert_eq!(shock[0].name, Some("Tazik Shocker"));
    }
}
