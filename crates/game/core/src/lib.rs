//! Deterministic rules for a single-player grid roguelite.
//!
//! `roguelite-core` generates floors, resolves player actions and enemy turns,
//! and exposes a small controller seam for hosts. All state mutation flows
//! through [`engine::TurnEngine`]; hosts usually talk to
//! [`controller::GameController`] and read back snapshots.
pub mod config;
pub mod controller;
pub mod engine;
pub mod generation;
pub mod rng;
pub mod state;

pub use config::{GameConfig, StartingStats};
pub use controller::{ControlAction, EnemyView, GameController, Hud, HudSnapshot, RenderSnapshot};
pub use engine::{ActionOutcome, ActionRejected, ActionResult, StepPolicy, TurnEngine};
pub use generation::{FloorBuilder, first_step, path_exists};
pub use rng::{DeterministicRng, fresh_seed};
pub use state::{
    Direction, Enemy, EnemyId, EnemyKind, Floor, GameState, GameStatus, Loot, LootKind,
    PlayerState, Position, Walls,
};
