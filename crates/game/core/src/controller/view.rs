//! Read-only snapshots handed to renderers and HUD layers.

use std::fmt;

use crate::config::GameConfig;
use crate::engine::ActionRejected;
use crate::state::{EnemyId, EnemyKind, GameState, GameStatus, Loot, Position};

/// Everything a grid renderer needs for one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RenderSnapshot {
    pub grid_size: i32,
    /// Wall cells (border included) in row-major order.
    pub walls: Vec<Position>,
    pub player: Position,
    pub exit: Position,
    pub enemies: Vec<EnemyView>,
    pub loot: Vec<Loot>,
    pub status: GameStatus,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EnemyView {
    pub id: EnemyId,
    pub kind: EnemyKind,
    pub position: Position,
    pub hp: u32,
}

impl RenderSnapshot {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            grid_size: GameConfig::GRID_SIZE,
            walls: state.floor.walls.iter().collect(),
            player: state.player.position,
            exit: state.floor.exit,
            enemies: state
                .floor
                .enemies
                .iter()
                .map(|enemy| EnemyView {
                    id: enemy.id,
                    kind: enemy.kind,
                    position: enemy.position,
                    hp: enemy.hp,
                })
                .collect(),
            loot: state.floor.loot.clone(),
            status: state.status,
        }
    }
}

/// Authoritative numbers behind the HUD, copied verbatim from the state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HudSnapshot {
    pub score: u32,
    pub best_score: u32,
    pub floor: u32,
    pub hp: u32,
    pub max_hp: u32,
    pub attack: u32,
    pub armor: u32,
    pub medkits: u32,
    pub pulse_charges: u32,
    pub status: GameStatus,
    pub message: String,
    /// Text for the most recent rejected input, shown in place of `message`.
    pub rejection: Option<&'static str>,
}

impl HudSnapshot {
    pub fn from_state(state: &GameState, best_score: u32) -> Self {
        let player = &state.player;
        Self {
            score: player.score,
            best_score: best_score.max(player.score),
            floor: player.floor,
            hp: player.hp,
            max_hp: player.max_hp,
            attack: player.attack,
            armor: player.armor,
            medkits: player.medkits,
            pulse_charges: player.pulse_charges,
            status: state.status,
            message: state.message.clone(),
            rejection: None,
        }
    }

    pub fn with_rejection(mut self, rejection: Option<ActionRejected>) -> Self {
        self.rejection = rejection.map(|rejection| rejection.as_message());
        self
    }

    /// Composes the text HUD.
    pub fn compose(&self) -> Hud {
        let score_line = self.to_string();
        let (status_line, pause_label, pause_disabled) = match self.status {
            GameStatus::GameOver => (
                "Run over. Press Restart or Enter.".to_owned(),
                "Pause",
                true,
            ),
            GameStatus::Paused => (
                "Paused. Press Pause or Space to continue.".to_owned(),
                "Resume",
                false,
            ),
            GameStatus::Running => (
                format!(
                    "{}. Reach exit after clearing enemies. Select/F uses pulse skill.",
                    self.rejection.unwrap_or(self.message.as_str())
                ),
                "Pause",
                false,
            ),
        };

        Hud {
            score_line,
            status_line,
            pause_label,
            pause_disabled,
        }
    }
}

impl fmt::Display for HudSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Score: {} | Floor: {} | HP: {}/{} | ATK: {} | ARM: {} | Med: {} | Pulse: {} | Best: {}",
            self.score,
            self.floor,
            self.hp,
            self.max_hp,
            self.attack,
            self.armor,
            self.medkits,
            self.pulse_charges,
            self.best_score
        )
    }
}

/// Text HUD for hosts that do not lay out their own.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Hud {
    pub score_line: String,
    pub status_line: String,
    pub pause_label: &'static str,
    pub pause_disabled: bool,
}
