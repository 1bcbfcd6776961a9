//! Host-facing seam around the [`TurnEngine`].
//!
//! A host loop drives [`GameController`] with lifecycle calls (`start`,
//! `stop`, `restart`), a periodic `tick`, and translated inputs. Inputs answer
//! with a plain accepted flag; the controller remembers why the last input was
//! rejected and tracks the best score of the session.

mod view;

pub use view::{EnemyView, Hud, HudSnapshot, RenderSnapshot};

use std::time::Duration;

use crate::config::GameConfig;
use crate::engine::{ActionOutcome, ActionRejected, TurnEngine};
use crate::rng::fresh_seed;
use crate::state::{Direction, GameState};

/// Abstract controls a host maps its devices onto.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum ControlAction {
    Up,
    Down,
    Left,
    Right,
    /// Uses the pulse skill.
    Select,
}

impl ControlAction {
    pub fn direction(self) -> Option<Direction> {
        match self {
            ControlAction::Up => Some(Direction::Up),
            ControlAction::Down => Some(Direction::Down),
            ControlAction::Left => Some(Direction::Left),
            ControlAction::Right => Some(Direction::Right),
            ControlAction::Select => None,
        }
    }
}

impl From<Direction> for ControlAction {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => ControlAction::Up,
            Direction::Down => ControlAction::Down,
            Direction::Left => ControlAction::Left,
            Direction::Right => ControlAction::Right,
        }
    }
}

pub struct GameController {
    engine: TurnEngine,
    best_score: u32,
    last_rejection: Option<ActionRejected>,
}

impl GameController {
    pub const TITLE: &'static str = "Roguelite Grid";

    /// Controller with a fresh, unpredictable run.
    pub fn new(config: GameConfig) -> Self {
        Self::with_seed(config, fresh_seed())
    }

    /// Controller whose first run is reproducible from `seed`.
    pub fn with_seed(config: GameConfig, seed: u32) -> Self {
        Self {
            engine: TurnEngine::new(config, seed),
            best_score: 0,
            last_rejection: None,
        }
    }

    pub fn title(&self) -> &'static str {
        Self::TITLE
    }

    /// Cadence the host should call [`Self::tick`] at.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.engine.config().tick_interval_ms)
    }

    /// Begins a new run from a fresh seed.
    pub fn start(&mut self) {
        self.start_with_seed(fresh_seed());
    }

    pub fn start_with_seed(&mut self, seed: u32) {
        self.engine.reset(seed);
        self.last_rejection = None;
    }

    /// Pauses a running game; otherwise nothing happens.
    pub fn stop(&mut self) {
        self.engine.pause();
        self.last_rejection = None;
    }

    pub fn restart(&mut self) {
        self.start();
    }

    /// Flips pause; a pending rejection no longer applies afterwards.
    pub fn toggle_pause(&mut self) {
        self.engine.toggle_pause();
        self.last_rejection = None;
    }

    pub fn tick(&mut self) {
        self.engine.tick();
    }

    pub fn on_directional_input(&mut self, direction: Direction) -> bool {
        let result = self.engine.move_player(direction);
        self.record(result)
    }

    pub fn on_skill_input(&mut self) -> bool {
        let result = self.engine.use_skill();
        self.record(result)
    }

    pub fn on_control(&mut self, action: ControlAction) -> bool {
        match action.direction() {
            Some(direction) => self.on_directional_input(direction),
            None => self.on_skill_input(),
        }
    }

    pub fn state(&self) -> &GameState {
        self.engine.state()
    }

    pub fn seed(&self) -> u32 {
        self.engine.seed()
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    /// Why the most recent input was turned down. Cleared by the next accepted
    /// input and by any pause, stop or restart.
    pub fn last_rejection(&self) -> Option<ActionRejected> {
        self.last_rejection
    }

    pub fn renderable_state(&self) -> RenderSnapshot {
        RenderSnapshot::from_state(self.engine.state())
    }

    pub fn hud_snapshot(&self) -> HudSnapshot {
        HudSnapshot::from_state(self.engine.state(), self.best_score)
            .with_rejection(self.last_rejection)
    }

    pub fn hud(&self) -> Hud {
        self.hud_snapshot().compose()
    }

    fn record(&mut self, result: Result<ActionOutcome, ActionRejected>) -> bool {
        match result {
            Ok(outcome) => {
                self.last_rejection = None;
                self.best_score = self.best_score.max(self.engine.state().player.score);
                tracing::trace!(?outcome, "action accepted");
                true
            }
            Err(rejection) => {
                tracing::debug!(reason = rejection.code(), %rejection, "action rejected");
                self.last_rejection = Some(rejection);
                false
            }
        }
    }
}
