//! In-memory oracles for unit tests.

use strum::EnumCount;

use super::{BuffsOracle, Glyph, GlyphsOracle, RaceOracle, Talent, TalentSpec, TalentsOracle};
use crate::error::Result;
use crate::stats::{ActivatedBoost, BoostStat};

#[derive(Clone, Debug)]
pub struct TestTalents {
    pub spec: TalentSpec,
    pub points: [u8; Talent::COUNT],
}

impl TestTalents {
    pub fn new(spec: TalentSpec) -> Self {
        Self {
            spec,
            points: [0; Talent::COUNT],
        }
    }

    pub fn with(mut self, talent: Talent, points: u8) -> Self {
        self.points[talent as usize] = points;
        self
    }
}

impl TalentsOracle for TestTalents {
    fn spec(&self) -> TalentSpec {
        self.spec
    }

    fn points(&self, talent: Talent) -> u8 {
        self.points[talent as usize]
    }
}

#[derive(Clone, Debug)]
pub struct TestBuffs {
    pub all_crit: f64,
    pub spell_crit: f64,
    pub physical: f64,
    pub spell: f64,
    pub bleed: f64,
    pub armor: f64,
    pub agi_flask: bool,
}

impl Default for TestBuffs {
    fn default() -> Self {
        Self {
            all_crit: 0.0,
            spell_crit: 0.0,
            physical: 1.0,
            spell: 1.0,
            bleed: 1.0,
            armor: 1.0,
            agi_flask: false,
        }
    }
}

impl BuffsOracle for TestBuffs {
    fn all_crit_bonus(&self) -> f64 {
        self.all_crit
    }

    fn spell_crit_bonus(&self) -> f64 {
        self.spell_crit
    }

    fn physical_damage_multiplier(&self) -> f64 {
        self.physical
    }

    fn spell_damage_multiplier(&self) -> f64 {
        self.spell
    }

    fn bleed_damage_multiplier(&self) -> f64 {
        self.bleed
    }

    fn armor_reduction_multiplier(&self) -> f64 {
        self.armor
    }

    fn agi_flask(&self) -> bool {
        self.agi_flask
    }
}

#[derive(Clone, Debug, Default)]
pub struct TestRace {
    pub crit: f64,
    pub boosts: Vec<ActivatedBoost>,
}

impl TestRace {
    pub fn with_attack_power_racial(value: f64) -> Self {
        Self {
            crit: 0.0,
            boosts: vec![ActivatedBoost::new(BoostStat::AttackPower, value, 15, Some(120))],
        }
    }
}

impl RaceOracle for TestRace {
    fn racial_crit(&self) -> f64 {
        self.crit
    }

    fn activated_boosts(&self, _level: u32) -> Result<Vec<ActivatedBoost>> {
        Ok(self.boosts.clone())
    }
}

#[derive(Clone, Debug, Default)]
pub struct TestGlyphs(pub Vec<Glyph>);

impl GlyphsOracle for TestGlyphs {
    fn has_glyph(&self, glyph: Glyph) -> bool {
        self.0.contains(&glyph)
    }
}
