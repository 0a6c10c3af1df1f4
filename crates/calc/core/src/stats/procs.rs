//! Proc and boost descriptors.
//!
//! Procs are resolved elsewhere (their random outcome is not modeled here); this
//! module only describes what a proc or activated boost grants so that callers
//! can check for presence and read its magnitude.

/// Stat affected by a proc or activated boost.
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
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BoostStat {
    #[strum(serialize = "agi")]
    Agility,
    Mastery,
    Haste,
    Crit,
    #[strum(serialize = "ap")]
    AttackPower,
    #[strum(serialize = "sp")]
    SpellPower,
    SpellDamage,
    /// Resolved by the caller to the highest of agility, strength or intellect.
    Varies,
}

/// Static description of a proc-based effect.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Proc {
    pub name: &'static str,
    pub stat: BoostStat,
    pub value: f64,
    /// Seconds.
    pub duration: u32,
    /// Procs per minute.
    pub ppm: f64,
    /// Internal cooldown in seconds.
    pub icd: u32,
}

/// Procs granted by gear other than weapon enchants.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ProcList {
    procs: Vec<Proc>,
}

impl ProcList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, proc: Proc) {
        self.procs.push(proc);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.procs.iter().any(|proc| proc.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Proc> {
        self.procs.iter()
    }

    pub fn len(&self) -> usize {
        self.procs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.procs.is_empty()
    }
}

impl FromIterator<Proc> for ProcList {
    fn from_iter<I: IntoIterator<Item = Proc>>(iter: I) -> Self {
        Self {
            procs: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn boost_stat_uses_short_names() {
        assert_eq!(BoostStat::from_str("agi"), Ok(BoostStat::Agility));
        assert_eq!(BoostStat::AttackPower.as_ref(), "ap");
        assert_eq!(BoostStat::SpellDamage.to_string(), "spell_damage");
    }

    #[test]
    fn proc_list_lookup_by_name() {
        let trinket = Proc {
            name: "Essence of the Cyclone",
            stat: BoostStat::Crit,
            value: 1926.0,
            duration: 10,
            ppm: 0.0,
            icd: 50,
        };
        let procs: ProcList = [trinket].into_iter().collect();
        assert!(procs.contains("Essence of the Cyclone"));
        assert!(!procs.contains("Hurricane"));
        assert_eq!(procs.len(), 1);
    }
}
