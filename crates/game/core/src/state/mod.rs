//! Authoritative game state representation.
//!
//! This module owns the data structures that describe the current floor, the
//! player record and run status. Hosts read this state but mutate it
//! exclusively through the engine.
pub mod types;

pub use types::{
    Direction, Enemy, EnemyId, EnemyKind, Floor, Loot, LootKind, PlayerState, Position, Walls,
};

use crate::config::StartingStats;

/// Run status. `GameOver` is terminal until the next start or restart.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum GameStatus {
    Running,
    Paused,
    GameOver,
}

impl GameStatus {
    pub fn is_running(self) -> bool {
        matches!(self, GameStatus::Running)
    }
}

/// Canonical snapshot of one run.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub status: GameStatus,
    /// Always false today: runs end only in defeat.
    pub won: bool,
    pub floor: Floor,
    pub player: PlayerState,
    /// Latest event line for the status bar.
    pub message: String,
    /// Host ticks since the floor was entered; drives idle hints only.
    pub idle_ticks: u32,
}

impl GameState {
    pub const INITIAL_MESSAGE: &'static str = "Explore the floor";

    /// Fresh running state on `floor` with a new player at its spawn.
    pub fn new(floor: Floor, starting: &StartingStats) -> Self {
        let player = PlayerState::new(floor.spawn, starting);
        Self {
            status: GameStatus::Running,
            won: false,
            floor,
            player,
            message: Self::INITIAL_MESSAGE.to_owned(),
            idle_ticks: 0,
        }
    }

    /// Swaps in a freshly built floor and moves the player to its spawn.
    pub fn enter_floor(&mut self, floor: Floor) {
        self.player.position = floor.spawn;
        self.floor = floor;
        self.idle_ticks = 0;
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub fn player_on_exit(&self) -> bool {
        self.player.position == self.floor.exit
    }

    /// The floor is finished once the player stands on a cleared exit.
    pub fn floor_complete(&self) -> bool {
        self.player_on_exit() && self.floor.is_cleared()
    }

    /// A cell enemies and the player may enter: not a wall.
    pub fn is_walkable(&self, position: Position) -> bool {
        !self.floor.is_wall(position)
    }
}
