//! Turn resolution for the roguelite run.
//!
//! The [`TurnEngine`] is the authoritative owner of [`GameState`]. One player
//! action resolves completely (movement or combat, loot, floor completion)
//! before the enemy turn runs; the enemy turn is never scheduled on its own.
//! Rejected actions return [`ActionRejected`] and leave the state untouched.

mod ai;
mod combat;
mod errors;
mod progression;
mod turns;

pub use ai::StepPolicy;
pub use errors::ActionRejected;

use crate::config::GameConfig;
use crate::generation::FloorBuilder;
use crate::rng::DeterministicRng;
use crate::state::{Direction, EnemyId, GameState, GameStatus, LootKind, Position};

/// What the player's action did before the enemies answered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionResult {
    /// Melee attack from bumping into an enemy.
    Strike {
        target: EnemyId,
        damage: u32,
        defeated: bool,
    },
    /// Plain move, with any loot collected on arrival.
    Move {
        destination: Position,
        loot: Option<LootKind>,
    },
    /// Pulse discharge; `hits` adjacent enemies were damaged.
    Pulse { hits: u32 },
    /// Medkit used in place of an empty pulse.
    Medkit { healed: u32 },
}

/// Complete outcome of an accepted player action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionOutcome {
    pub result: ActionResult,
    /// The action finished the floor and a new one was generated.
    pub floor_advanced: bool,
    /// Enemies took their turn after the action.
    pub enemy_turn_ran: bool,
}

/// Owns the run state, its RNG and tuning.
#[derive(Clone, Debug)]
pub struct TurnEngine {
    state: GameState,
    rng: DeterministicRng,
    config: GameConfig,
    seed: u32,
}

impl TurnEngine {
    /// Starts a fresh run on floor 1 from `seed`.
    pub fn new(config: GameConfig, seed: u32) -> Self {
        let mut rng = DeterministicRng::new(seed);
        let state = Self::initial_state(&config, &mut rng);
        tracing::info!(seed, "run started");
        Self {
            state,
            rng,
            config,
            seed,
        }
    }

    /// Resumes from an existing state, drawing further randomness from `seed`.
    pub fn from_state(config: GameConfig, state: GameState, seed: u32) -> Self {
        Self {
            state,
            rng: DeterministicRng::new(seed),
            config,
            seed,
        }
    }

    /// Replaces the run with a fresh floor-1 state seeded from `seed`.
    pub fn reset(&mut self, seed: u32) {
        self.rng = DeterministicRng::new(seed);
        self.state = Self::initial_state(&self.config, &mut self.rng);
        self.seed = seed;
        tracing::info!(seed, "run restarted");
    }

    fn initial_state(config: &GameConfig, rng: &mut DeterministicRng) -> GameState {
        let floor = FloorBuilder::new(config).build(1, rng);
        GameState::new(floor, &config.starting)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Moves one cell, or attacks when an enemy holds the destination.
    pub fn move_player(&mut self, direction: Direction) -> Result<ActionOutcome, ActionRejected> {
        self.ensure_running()?;

        let destination = self.state.player.position.step(direction);
        if self.state.floor.is_wall(destination) {
            return Err(ActionRejected::Blocked { destination });
        }

        let result = match self.state.floor.enemy_at(destination).map(|enemy| enemy.id) {
            Some(target) => self.strike(target),
            None => self.step_player(destination),
        };
        Ok(self.finish_player_action(result))
    }

    /// Fires the pulse skill, or falls back to a medkit when out of charges.
    pub fn use_skill(&mut self) -> Result<ActionOutcome, ActionRejected> {
        self.ensure_running()?;

        let player = &self.state.player;
        let result = if player.pulse_charges > 0 {
            self.discharge_pulse()
        } else if player.medkits > 0 && player.is_wounded() {
            self.use_medkit()
        } else {
            return Err(ActionRejected::NoPulseCharges);
        };
        Ok(self.finish_player_action(result))
    }

    /// Flips running and paused. No effect once the run is over.
    pub fn toggle_pause(&mut self) {
        self.state.status = match self.state.status {
            GameStatus::Running => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Running,
            GameStatus::GameOver => return,
        };
    }

    /// Pauses a running game; no-op otherwise.
    pub fn pause(&mut self) {
        if self.state.status.is_running() {
            self.state.status = GameStatus::Paused;
        }
    }

    /// Idle bookkeeping driven by the host clock. No gameplay effect.
    pub fn tick(&mut self) {
        if !self.state.status.is_running() {
            return;
        }

        self.state.idle_ticks += 1;
        let interval = self.config.idle_hint_interval;
        if interval > 0 && self.state.idle_ticks % interval == 0 && !self.state.floor.is_cleared()
        {
            self.state
                .set_message("Controller hint: D-pad/Left Stick + A(Select)");
        }
    }

    fn ensure_running(&self) -> Result<(), ActionRejected> {
        match self.state.status {
            GameStatus::Running => Ok(()),
            status => Err(ActionRejected::NotRunning { status }),
        }
    }

    /// Either advances the floor or hands the turn to the enemies.
    fn finish_player_action(&mut self, result: ActionResult) -> ActionOutcome {
        if self.state.floor_complete() {
            self.advance_floor();
            return ActionOutcome {
                result,
                floor_advanced: true,
                enemy_turn_ran: false,
            };
        }

        self.run_enemy_turn();
        ActionOutcome {
            result,
            floor_advanced: false,
            enemy_turn_ran: true,
        }
    }
}
