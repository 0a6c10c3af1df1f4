//! Per-level rogue ability constants.
//!
//! Tables only cover the levels the patch data was published for. Several
//! abilities (mutilate, the poisons, venomous wounds) only have rows for 80 and
//! 85, so those are the only levels the engine evaluates at.

use crate::error::Result;
use crate::tables::LevelTable;

pub const BS_BONUS_DMG: LevelTable = LevelTable::new(
    "bs_bonus_dmg",
    &[(80, 310.0), (81, 317.0), (82, 324.0), (83, 331.0), (84, 338.0), (85, 345.0)],
);

pub const MUT_BONUS_DMG: LevelTable =
    LevelTable::new("mut_bonus_dmg", &[(80, 180.0), (85, 201.0)]);

pub const SS_BONUS_DMG: LevelTable = LevelTable::new(
    "ss_bonus_dmg",
    &[(80, 180.0), (81, 184.0), (82, 188.0), (83, 192.0), (84, 196.0), (85, 200.0)],
);

pub const AMBUSH_BONUS_DMG: LevelTable = LevelTable::new(
    "ambush_bonus_dmg",
    &[(80, 330.0), (81, 338.0), (82, 345.0), (83, 353.0), (84, 360.0), (85, 368.0)],
);

pub const VW_BASE_DMG: LevelTable = LevelTable::new("vw_base_dmg", &[(80, 363.0), (85, 675.0)]);

pub const VW_PERCENTAGE_DMG: LevelTable =
    LevelTable::new("vw_percentage_dmg", &[(80, 0.135), (85, 0.176)]);

pub const IP_BASE_DMG: LevelTable = LevelTable::new("ip_base_dmg", &[(80, 350.0), (85, 352.0)]);

pub const DP_BASE_DMG: LevelTable = LevelTable::new("dp_base_dmg", &[(80, 296.0), (85, 540.0)]);

pub const DP_PERCENTAGE_DMG: LevelTable =
    LevelTable::new("dp_percentage_dmg", &[(80, 0.108), (85, 0.14)]);

pub const WP_BASE_DMG: LevelTable = LevelTable::new("wp_base_dmg", &[(80, 231.0), (85, 276.0)]);

pub const WP_PERCENTAGE_DMG: LevelTable =
    LevelTable::new("wp_percentage_dmg", &[(80, 0.036), (85, 0.04)]);

pub const GARROTE_BASE_DMG: LevelTable = LevelTable::new(
    "garrote_base_dmg",
    &[(80, 119.0), (81, 122.0), (82, 125.0), (83, 127.0), (84, 130.0), (85, 133.0)],
);

pub const RUP_BASE_DMG: LevelTable = LevelTable::new(
    "rup_base_dmg",
    &[(80, 127.0), (81, 130.0), (82, 133.0), (83, 136.0), (84, 139.0), (85, 142.0)],
);

pub const RUP_BONUS_DMG: LevelTable = LevelTable::new(
    "rup_bonus_dmg",
    &[(80, 18.0), (81, 19.0), (82, 19.0), (83, 19.0), (84, 20.0), (85, 20.0)],
);

pub const EVIS_BASE_DMG: LevelTable = LevelTable::new(
    "evis_base_dmg",
    &[(80, 329.0), (81, 334.0), (82, 339.0), (83, 344.0), (84, 349.0), (85, 354.0)],
);

pub const EVIS_BONUS_DMG: LevelTable = LevelTable::new(
    "evis_bonus_dmg",
    &[(80, 481.0), (81, 488.0), (82, 495.0), (83, 503.0), (84, 510.0), (85, 517.0)],
);

pub const ENV_BASE_DMG: LevelTable = LevelTable::new(
    "env_base_dmg",
    &[(80, 216.0), (81, 221.0), (82, 226.0), (83, 231.0), (84, 236.0), (85, 241.0)],
);

pub const AGI_PER_CRIT: LevelTable = LevelTable::new(
    "agi_per_crit",
    &[
        (80, 83.15 * 100.0),
        (81, 109.18 * 100.0),
        (82, 143.37 * 100.0),
        (83, 188.34 * 100.0),
        (84, 247.3 * 100.0),
        (85, 324.72 * 100.0),
    ],
);

/// Raid boss armor before debuffs.
pub const BASE_ARMOR: LevelTable = LevelTable::new("base armor", &[(80, 10643.0), (85, 11977.0)]);

/// Ability constants resolved for one level.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AbilityConstants {
    pub level: u32,
    pub bs_bonus_dmg: f64,
    pub mut_bonus_dmg: f64,
    pub ss_bonus_dmg: f64,
    pub ambush_bonus_dmg: f64,
    pub vw_base_dmg: f64,
    pub vw_percentage_dmg: f64,
    pub ip_base_dmg: f64,
    pub dp_base_dmg: f64,
    pub dp_percentage_dmg: f64,
    pub wp_base_dmg: f64,
    pub wp_percentage_dmg: f64,
    pub garrote_base_dmg: f64,
    pub rup_base_dmg: f64,
    pub rup_bonus_dmg: f64,
    pub evis_base_dmg: f64,
    pub evis_bonus_dmg: f64,
    pub env_base_dmg: f64,
    pub agi_per_crit: f64,
    pub base_armor: f64,
}

impl AbilityConstants {
    /// Resolves every ability constant for `level`.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::InvalidLevel` naming the first table without a row,
    /// in declaration order.
    pub fn for_level(level: u32) -> Result<Self> {
        let constants = Self {
            level,
            bs_bonus_dmg: BS_BONUS_DMG.get(level)?,
            mut_bonus_dmg: MUT_BONUS_DMG.get(level)?,
            ss_bonus_dmg: SS_BONUS_DMG.get(level)?,
            ambush_bonus_dmg: AMBUSH_BONUS_DMG.get(level)?,
            vw_base_dmg: VW_BASE_DMG.get(level)?,
            vw_percentage_dmg: VW_PERCENTAGE_DMG.get(level)?,
            ip_base_dmg: IP_BASE_DMG.get(level)?,
            dp_base_dmg: DP_BASE_DMG.get(level)?,
            dp_percentage_dmg: DP_PERCENTAGE_DMG.get(level)?,
            wp_base_dmg: WP_BASE_DMG.get(level)?,
            wp_percentage_dmg: WP_PERCENTAGE_DMG.get(level)?,
            garrote_base_dmg: GARROTE_BASE_DMG.get(level)?,
            rup_base_dmg: RUP_BASE_DMG.get(level)?,
            rup_bonus_dmg: RUP_BONUS_DMG.get(level)?,
            evis_base_dmg: EVIS_BASE_DMG.get(level)?,
            evis_bonus_dmg: EVIS_BONUS_DMG.get(level)?,
            env_base_dmg: ENV_BASE_DMG.get(level)?,
            agi_per_crit: AGI_PER_CRIT.get(level)?,
            base_armor: BASE_ARMOR.get(level)?,
        };
        tracing::debug!(level, "resolved ability constants");
        Ok(constants)
    }
}
