//! Host configuration read from the environment.
use std::env;
use std::path::PathBuf;

use anyhow::Result;
use roguelite_content::ConfigLoader;
use roguelite_core::GameConfig;

/// Headless host settings.
///
/// Environment variables:
/// - `ROGUELITE_SEED` - Seed for the first run (default: fresh seed)
/// - `ROGUELITE_MAX_ACTIONS` - Input budget per run (default: 400)
/// - `ROGUELITE_RUNS` - Number of runs to play (default: 1)
/// - `ROGUELITE_CONFIG` - Optional TOML file with game tuning
/// - `ROGUELITE_LOG_DIR` - Optional directory for a `roguelite.log` copy
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub seed: Option<u32>,
    pub max_actions: u32,
    pub runs: u32,
    pub game_config_path: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
}

impl ClientConfig {
    pub const DEFAULT_MAX_ACTIONS: u32 = 400;
    pub const DEFAULT_RUNS: u32 = 1;

    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.seed = read_env::<u32>("ROGUELITE_SEED");
        if let Some(max_actions) = read_env::<u32>("ROGUELITE_MAX_ACTIONS") {
            config.max_actions = max_actions.max(1);
        }
        if let Some(runs) = read_env::<u32>("ROGUELITE_RUNS") {
            config.runs = runs.max(1);
        }
        config.game_config_path = read_path("ROGUELITE_CONFIG");
        config.log_dir = read_path("ROGUELITE_LOG_DIR");

        config
    }

    /// Game tuning from `game_config_path`, or the built-in defaults.
    pub fn game_config(&self) -> Result<GameConfig> {
        match &self.game_config_path {
            Some(path) => ConfigLoader::load(path),
            None => Ok(GameConfig::default()),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_actions: Self::DEFAULT_MAX_ACTIONS,
            runs: Self::DEFAULT_RUNS,
            game_config_path: None,
            log_dir: None,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_path(key: &str) -> Option<PathBuf> {
    env::var_os(key)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
