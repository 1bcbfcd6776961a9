/// Game configuration constants and tunable parameters.
///
/// Compile-time constants describe the fixed board; runtime fields are balance
/// knobs that hosts may override (for example from a TOML file loaded by
/// `roguelite-content`). Missing fields deserialize to their defaults.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Probability that a skitter steps to a random legal neighbor instead of chasing.
    pub skitter_wander_chance: f64,
    /// Brutes skip movement on odd turn counts.
    pub brute_rests_on_odd_turns: bool,
    /// A loot crate may spawn every N enemy turns.
    pub loot_spawn_interval: u32,
    /// Crates only spawn while fewer than this many loot items remain.
    pub loot_spawn_cap: usize,
    /// Host ticks between idle controller hints.
    pub idle_hint_interval: u32,
    /// Sampling budget for interior wall placement.
    pub carve_attempts: u32,
    /// Upper bound for player armor.
    pub armor_cap: u32,
    /// Stats a fresh run starts with.
    pub starting: StartingStats,
    /// Host tick cadence in milliseconds.
    pub tick_interval_ms: u64,
}

impl GameConfig {
    // ===== compile-time constants =====
    /// Side length of the square board, border included.
    pub const GRID_SIZE: i32 = 12;
    /// Number of cells on the board.
    pub const CELL_COUNT: usize = (Self::GRID_SIZE * Self::GRID_SIZE) as usize;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_SKITTER_WANDER_CHANCE: f64 = 0.48;
    pub const DEFAULT_LOOT_SPAWN_INTERVAL: u32 = 6;
    pub const DEFAULT_LOOT_SPAWN_CAP: usize = 4;
    pub const DEFAULT_IDLE_HINT_INTERVAL: u32 = 32;
    pub const DEFAULT_CARVE_ATTEMPTS: u32 = 900;
    pub const DEFAULT_ARMOR_CAP: u32 = 4;
    pub const DEFAULT_TICK_INTERVAL_MS: u64 = 120;

    pub fn new() -> Self {
        Self {
            skitter_wander_chance: Self::DEFAULT_SKITTER_WANDER_CHANCE,
            brute_rests_on_odd_turns: true,
            loot_spawn_interval: Self::DEFAULT_LOOT_SPAWN_INTERVAL,
            loot_spawn_cap: Self::DEFAULT_LOOT_SPAWN_CAP,
            idle_hint_interval: Self::DEFAULT_IDLE_HINT_INTERVAL,
            carve_attempts: Self::DEFAULT_CARVE_ATTEMPTS,
            armor_cap: Self::DEFAULT_ARMOR_CAP,
            starting: StartingStats::default(),
            tick_interval_ms: Self::DEFAULT_TICK_INTERVAL_MS,
        }
    }

    pub fn with_skitter_wander_chance(mut self, chance: f64) -> Self {
        self.skitter_wander_chance = chance.clamp(0.0, 1.0);
        self
    }

    pub fn with_brute_rests_on_odd_turns(mut self, rests: bool) -> Self {
        self.brute_rests_on_odd_turns = rests;
        self
    }

    pub fn with_starting_stats(mut self, starting: StartingStats) -> Self {
        self.starting = starting;
        self
    }

    pub fn with_carve_attempts(mut self, attempts: u32) -> Self {
        self.carve_attempts = attempts;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Player stats at the start of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StartingStats {
    pub max_hp: u32,
    pub attack: u32,
    pub armor: u32,
    pub medkits: u32,
    pub pulse_charges: u32,
}

impl Default for StartingStats {
    fn default() -> Self {
        Self {
            max_hp: 10,
            attack: 2,
            armor: 0,
            medkits: 1,
            pulse_charges: 1,
        }
    }
}
