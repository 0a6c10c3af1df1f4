//! Raid buffs and target debuffs.

use core::str::FromStr;

use bitflags::bitflags;

use calc_core::{BuffsOracle, CalcError, Result};

/// Raid buffs and target debuffs by name.
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
)]
#[strum(serialize_all = "snake_case")]
pub enum RaidBuff {
    CritChanceBuff,
    SpellCritDebuff,
    DamagePercentageBuff,
    PhysicalVulnerabilityDebuff,
    SpellDamageDebuff,
    BleedDamageDebuff,
    ArmorDebuff,
    AgiFlask,
}

bitflags! {
    /// Raid buffs and target debuffs present for an evaluation.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct RaidBuffs: u16 {
        /// +5% crit to everything.
        const CRIT_CHANCE_BUFF = 1 << 0;
        /// +5% spell crit taken by the target.
        const SPELL_CRIT_DEBUFF = 1 << 1;
        /// +3% damage done.
        const DAMAGE_PERCENTAGE_BUFF = 1 << 2;
        /// +4% physical damage taken.
        const PHYSICAL_VULNERABILITY_DEBUFF = 1 << 3;
        /// +8% spell damage taken.
        const SPELL_DAMAGE_DEBUFF = 1 << 4;
        /// +30% bleed damage taken.
        const BLEED_DAMAGE_DEBUFF = 1 << 5;
        /// -12% target armor.
        const ARMOR_DEBUFF = 1 << 6;
        /// Agility flask; mixology reads it.
        const AGI_FLASK = 1 << 7;
    }
}

impl RaidBuffs {
    pub const fn flag(buff: RaidBuff) -> Self {
        match buff {
            RaidBuff::CritChanceBuff => Self::CRIT_CHANCE_BUFF,
            RaidBuff::SpellCritDebuff => Self::SPELL_CRIT_DEBUFF,
            RaidBuff::DamagePercentageBuff => Self::DAMAGE_PERCENTAGE_BUFF,
            RaidBuff::PhysicalVulnerabilityDebuff => Self::PHYSICAL_VULNERABILITY_DEBUFF,
            RaidBuff::SpellDamageDebuff => Self::SPELL_DAMAGE_DEBUFF,
            RaidBuff::BleedDamageDebuff => Self::BLEED_DAMAGE_DEBUFF,
            RaidBuff::ArmorDebuff => Self::ARMOR_DEBUFF,
            RaidBuff::AgiFlask => Self::AGI_FLASK,
        }
    }

    /// Builds the set from snake_case buff names.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::UnknownRaidBuff` for the first unknown name.
    pub fn from_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Result<Self> {
        names.into_iter().try_fold(Self::empty(), |buffs, name| {
            let buff =
                RaidBuff::from_str(name).map_err(|_| CalcError::UnknownRaidBuff(name.to_owned()))?;
            Ok(buffs | Self::flag(buff))
        })
    }

    fn pick(&self, flag: Self, active: f64, inactive: f64) -> f64 {
        if self.contains(flag) { active } else { inactive }
    }

    fn damage_multiplier(&self) -> f64 {
        self.pick(Self::DAMAGE_PERCENTAGE_BUFF, 1.03, 1.0)
    }
}

impl FromIterator<RaidBuff> for RaidBuffs {
    fn from_iter<I: IntoIterator<Item = RaidBuff>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |buffs, buff| buffs | Self::flag(buff))
    }
}

impl BuffsOracle for RaidBuffs {
    fn all_crit_bonus(&self) -> f64 {
        self.pick(Self::CRIT_CHANCE_BUFF, 0.05, 0.0)
    }

    fn spell_crit_bonus(&self) -> f64 {
        self.pick(Self::SPELL_CRIT_DEBUFF, 0.05, 0.0)
    }

    fn physical_damage_multiplier(&self) -> f64 {
        self.damage_multiplier() * self.pick(Self::PHYSICAL_VULNERABILITY_DEBUFF, 1.04, 1.0)
    }

    fn spell_damage_multiplier(&self) -> f64 {
        self.damage_multiplier() * self.pick(Self::SPELL_DAMAGE_DEBUFF, 1.08, 1.0)
    }

    fn bleed_damage_multiplier(&self) -> f64 {
        self.physical_damage_multiplier() * self.pick(Self::BLEED_DAMAGE_DEBUFF, 1.3, 1.0)
    }

    fn armor_reduction_multiplier(&self) -> f64 {
        self.pick(Self::ARMOR_DEBUFF, 0.88, 1.0)
    }

    fn agi_flask(&self) -> bool {
        self.contains(Self::AGI_FLASK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbuffed_raid_is_neutral() {
        let buffs = RaidBuffs::empty();
        assert_eq!(buffs.all_crit_bonus(), 0.0);
        assert_eq!(buffs.physical_damage_multiplier(), 1.0);
        assert_eq!(buffs.spell_damage_multiplier(), 1.0);
        assert_eq!(buffs.bleed_damage_multiplier(), 1.0);
        assert_eq!(buffs.armor_reduction_multiplier(), 1.0);
    }

    #[test]
    fn bleeds_stack_physical_and_bleed_debuffs() {
        let buffs = RaidBuffs::PHYSICAL_VULNERABILITY_DEBUFF | RaidBuffs::BLEED_DAMAGE_DEBUFF;
        assert_eq!(buffs.bleed_damage_multiplier(), 1.04 * 1.3);
        assert_eq!(buffs.spell_damage_multiplier(), 1.0);
    }

    #[test]
    fn names_parse_to_flags() {
        let buffs = RaidBuffs::from_names(["armor_debuff", "crit_chance_buff"]).unwrap();
        assert_eq!(buffs, RaidBuffs::ARMOR_DEBUFF | RaidBuffs::CRIT_CHANCE_BUFF);
        assert_eq!(buffs.armor_reduction_multiplier(), 0.88);

        assert_eq!(
            RaidBuffs::from_names(["str_food"]),
            Err(CalcError::UnknownRaidBuff("str_food".into()))
        );
    }

    #[test]
    fn every_buff_has_its_own_bit() {
        use strum::IntoEnumIterator;

        let all: RaidBuffs = RaidBuff::iter().collect();
        assert_eq!(all, RaidBuffs::all());
        for buff in RaidBuff::iter() {
            let parsed = RaidBuffs::from_names([buff.as_ref()]).unwrap();
            assert_eq!(parsed, RaidBuffs::flag(buff), "{buff}");
        }
    }

    #[test]
    fn agi_flask_is_reported() {
        assert!(RaidBuffs::AGI_FLASK.agi_flask());
        assert!(!RaidBuffs::all().difference(RaidBuffs::AGI_FLASK).agi_flask());
    }
}
