//! Calculator configuration loader.

use std::path::Path;

use calc_core::CalcConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for calculator configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys take their [`CalcConfig::default`] values. The level is
    /// checked against the levels every ability table covers.
    pub fn load(path: &Path) -> LoadResult<CalcConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<CalcConfig> {
        let config: CalcConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if !CalcConfig::ABILITY_LEVELS.contains(&config.level) {
            anyhow::bail!(
                "level {} is not supported (expected one of {:?})",
                config.level,
                CalcConfig::ABILITY_LEVELS
            );
        }
        if let Some(armor) = config.target_armor.filter(|armor| *armor < 0.0) {
            anyhow::bail!("target_armor must not be negative (got {armor})");
        }

        tracing::debug!(
            level = config.level,
            target_armor = ?config.target_armor,
            "loaded calc config"
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "level = 80\ntarget_armor = 9000.0").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config, CalcConfig::with_level(80).target_armor(9000.0));
    }

    #[test]
    fn missing_keys_use_defaults() {
        assert_eq!(ConfigLoader::parse("").unwrap(), CalcConfig::default());
    }

    #[test]
    fn rejects_unsupported_level() {
        let err = ConfigLoader::parse("level = 83").unwrap_err();
        assert!(err.to_string().contains("level 83"));
    }

    #[test]
    fn rejects_negative_armor() {
        assert!(ConfigLoader::parse("target_armor = -1.0").is_err());
    }

    #[test]
    fn missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calc.toml");
        let err = ConfigLoader::load(&path).unwrap_err();
        assert!(err.to_string().contains("calc.toml"));
    }
}
