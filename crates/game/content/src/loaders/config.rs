//! Game configuration loader.

use std::path::Path;

use roguelite_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a `GameConfig` from a TOML file and check it is playable.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        let config = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), "game config loaded");
        Ok(config)
    }

    /// Parse TOML text into a `GameConfig`.
    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        Self::validate(&config)?;
        Ok(config)
    }

    fn validate(config: &GameConfig) -> LoadResult<()> {
        anyhow::ensure!(
            (0.0..=1.0).contains(&config.skitter_wander_chance),
            "skitter_wander_chance must be within 0..=1, got {}",
            config.skitter_wander_chance
        );
        anyhow::ensure!(
            config.starting.max_hp > 0,
            "starting.max_hp must be positive"
        );
        anyhow::ensure!(
            config.starting.armor <= config.armor_cap,
            "starting.armor ({}) exceeds armor_cap ({})",
            config.starting.armor,
            config.armor_cap
        );
        anyhow::ensure!(
            config.tick_interval_ms > 0,
            "tick_interval_ms must be positive"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn missing_keys_keep_defaults() {
        let config = ConfigLoader::parse("carve_attempts = 300\n").unwrap();
        assert_eq!(config.carve_attempts, 300);
        assert_eq!(
            config.skitter_wander_chance,
            GameConfig::DEFAULT_SKITTER_WANDER_CHANCE
        );
        assert_eq!(config.starting, GameConfig::default().starting);
    }

    #[test]
    fn nested_starting_stats() {
        let config = ConfigLoader::parse(
            r#"
brute_rests_on_odd_turns = false

[starting]
max_hp = 14
medkits = 3
"#,
        )
        .unwrap();
        assert!(!config.brute_rests_on_odd_turns);
        assert_eq!(config.starting.max_hp, 14);
        assert_eq!(config.starting.medkits, 3);
        assert_eq!(config.starting.attack, 2);
    }

    #[test]
    fn rejects_out_of_range_chance() {
        let err = ConfigLoader::parse("skitter_wander_chance = 1.5\n").unwrap_err();
        assert!(err.to_string().contains("skitter_wander_chance"));
    }

    #[test]
    fn rejects_starting_armor_above_cap() {
        let err = ConfigLoader::parse(
            r#"
armor_cap = 2

[starting]
armor = 3
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("exceeds armor_cap"));

        let config = ConfigLoader::parse("[starting]\narmor = 4\n").unwrap();
        assert_eq!(config.starting.armor, 4);
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = ConfigLoader::parse("carve_attempts = \"many\"\n").unwrap_err();
        assert!(err.to_string().contains("Failed to parse config TOML"));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "loot_spawn_interval = 4").unwrap();
        writeln!(file, "armor_cap = 6").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.loot_spawn_interval, 4);
        assert_eq!(config.armor_cap, 6);
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ConfigLoader::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }
}
