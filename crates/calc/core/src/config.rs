/// Calculator configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CalcConfig {
    /// Character level. Selects the row of every level-indexed table.
    pub level: u32,

    /// Target armor before debuffs. `None` uses the boss armor for `level`.
    pub target_armor: Option<f64>,
}

impl CalcConfig {
    // ===== reference data coverage =====
    /// Levels with rating conversion entries.
    pub const STAT_LEVELS: [u32; 8] = [60, 70, 80, 81, 82, 83, 84, 85];
    /// Levels where every rogue ability table has an entry.
    pub const ABILITY_LEVELS: [u32; 2] = [80, 85];

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_LEVEL: u32 = 85;

    pub fn new() -> Self {
        Self {
            level: Self::DEFAULT_LEVEL,
            target_armor: None,
        }
    }

    pub fn with_level(level: u32) -> Self {
        Self {
            level,
            target_armor: None,
        }
    }

    pub fn target_armor(mut self, armor: f64) -> Self {
        self.target_armor = Some(armor);
        self
    }
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self::new()
    }
}
