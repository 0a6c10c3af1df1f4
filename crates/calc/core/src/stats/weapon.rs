//! Weapon model.
//!
//! A weapon contributes damage either at its own speed (`raw_damage`, used by
//! white swings and a few strikes) or at a fixed per-type reference speed
//! (`normalized_damage`, used by abilities whose damage should not depend on
//! weapon speed). The reference speed is a pure function of [`WeaponType`] and
//! is fixed at construction.

use core::str::FromStr;

use super::procs::{BoostStat, Proc};
use crate::error::{CalcError, Result};

/// Attack power granted per point of weapon DPS.
pub const AP_PER_DPS: f64 = 14.0;

/// Weapon categories.
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
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum WeaponType {
    Dagger,
    #[strum(serialize = "1h_sword")]
    OneHandSword,
    #[strum(serialize = "2h_sword")]
    TwoHandSword,
    #[strum(serialize = "1h_mace")]
    OneHandMace,
    #[strum(serialize = "2h_mace")]
    TwoHandMace,
    #[strum(serialize = "1h_axe")]
    OneHandAxe,
    #[strum(serialize = "2h_axe")]
    TwoHandAxe,
    Polearm,
    Fist,
    Gun,
    Bow,
    Crossbow,
    Thrown,
}

impl WeaponType {
    /// Reference speed used by normalized damage.
    pub const fn normalization_speed(self) -> f64 {
        match self {
            Self::Thrown => 2.1,
            Self::Gun | Self::Bow | Self::Crossbow => 2.8,
            Self::TwoHandSword | Self::TwoHandMace | Self::TwoHandAxe | Self::Polearm => 3.3,
            Self::Dagger => 1.7,
            _ => 2.4,
        }
    }

    pub const fn is_melee(self) -> bool {
        !matches!(self, Self::Gun | Self::Bow | Self::Crossbow | Self::Thrown)
    }

    /// Parses a weapon type name.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::UnknownWeaponType` echoing `name`.
    pub fn parse(name: &str) -> Result<Self> {
        Self::from_str(name).map_err(|_| CalcError::UnknownWeaponType(name.to_owned()))
    }
}

/// Enchants that may be applied to a melee weapon.
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
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum MeleeEnchant {
    Avalanche,
    Hurricane,
    Landslide,
    Berserking,
    Mongoose,
}

impl MeleeEnchant {
    /// The proc this enchant grants.
    pub const fn proc(self) -> Proc {
        match self {
            Self::Avalanche => Proc {
                name: "Avalanche",
                stat: BoostStat::SpellDamage,
                value: 500.0,
                duration: 0,
                ppm: 5.0,
                icd: 0,
            },
            Self::Hurricane => Proc {
                name: "Hurricane",
                stat: BoostStat::Haste,
                value: 450.0,
                duration: 12,
                ppm: 1.0,
                icd: 0,
            },
            Self::Landslide => Proc {
                name: "Landslide",
                stat: BoostStat::AttackPower,
                value: 1000.0,
                duration: 12,
                ppm: 1.0,
                icd: 0,
            },
            Self::Berserking => Proc {
                name: "Berserking",
                stat: BoostStat::AttackPower,
                value: 400.0,
                duration: 15,
                ppm: 1.0,
                icd: 0,
            },
            Self::Mongoose => Proc {
                name: "Mongoose",
                stat: BoostStat::Agility,
                value: 120.0,
                duration: 15,
                ppm: 1.0,
                icd: 0,
            },
        }
    }
}

/// A single weapon.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Weapon {
    speed: f64,
    weapon_dps: f64,
    weapon_type: WeaponType,
    normalization_speed: f64,
    enchant: Option<MeleeEnchant>,
}

impl Weapon {
    /// Creates an unenchanted weapon from per-swing damage and speed.
    pub fn new(damage: f64, speed: f64, weapon_type: WeaponType) -> Self {
        Self {
            speed,
            weapon_dps: damage / speed,
            weapon_type,
            normalization_speed: weapon_type.normalization_speed(),
            enchant: None,
        }
    }

    /// Creates a weapon carrying `enchant`.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::EnchantOnNonMelee` for ranged and thrown weapons.
    pub fn with_enchant(
        damage: f64,
        speed: f64,
        weapon_type: WeaponType,
        enchant: MeleeEnchant,
    ) -> Result<Self> {
        let mut weapon = Self::new(damage, speed, weapon_type);
        weapon.set_enchant(Some(enchant))?;
        Ok(weapon)
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn weapon_dps(&self) -> f64 {
        self.weapon_dps
    }

    pub fn weapon_type(&self) -> WeaponType {
        self.weapon_type
    }

    pub fn normalization_speed(&self) -> f64 {
        self.normalization_speed
    }

    pub fn is_melee(&self) -> bool {
        self.weapon_type.is_melee()
    }

    pub fn is_dagger(&self) -> bool {
        self.weapon_type == WeaponType::Dagger
    }

    /// Replaces the current enchant. `None` removes it.
    ///
    /// Only one enchant is ever active; setting a new one discards the old.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::EnchantOnNonMelee` for ranged and thrown weapons. The
    /// previous enchant is left untouched on error.
    pub fn set_enchant(&mut self, enchant: Option<MeleeEnchant>) -> Result<()> {
        match enchant {
            None => self.enchant = None,
            Some(enchant) if self.is_melee() => self.enchant = Some(enchant),
            Some(enchant) => {
                return Err(CalcError::EnchantOnNonMelee {
                    enchant,
                    weapon: self.weapon_type,
                });
            }
        }
        Ok(())
    }

    /// Replaces the current enchant by name.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::EnchantNotAllowed` when `name` is not an allowed melee
    /// enchant, or `CalcError::EnchantOnNonMelee` for ranged and thrown weapons.
    pub fn set_enchant_by_name(&mut self, name: &str) -> Result<()> {
        let enchant = MeleeEnchant::from_str(name)
            .map_err(|_| CalcError::EnchantNotAllowed(name.to_owned()))?;
        self.set_enchant(Some(enchant))
    }

    pub fn enchant(&self) -> Option<MeleeEnchant> {
        self.enchant
    }

    pub fn has_enchant(&self, enchant: MeleeEnchant) -> bool {
        self.enchant == Some(enchant)
    }

    /// The proc granted by the active enchant, if any.
    pub fn enchant_proc(&self) -> Option<Proc> {
        self.enchant.map(MeleeEnchant::proc)
    }

    /// Damage of one swing at the weapon's own speed.
    pub fn raw_damage(&self, ap: f64) -> f64 {
        self.speed * (self.weapon_dps + ap / AP_PER_DPS)
    }

    /// Damage of one swing with the attack power term taken at the reference speed.
    pub fn normalized_damage(&self, ap: f64) -> f64 {
        self.speed * self.weapon_dps + self.normalization_speed * ap / AP_PER_DPS
    }
}
