//! Scripted player used by the headless host.
//!
//! The autopilot reads the same [`GameState`] a renderer would and answers
//! with one [`ControlAction`] per call. It is deterministic: the same state
//! always yields the same control.

use roguelite_core::{
    ControlAction, Direction, Enemy, GameController, GameState, GameStatus, Position, first_step,
};

/// Greedy policy: finish adjacent foes, pulse crowds, heal when low, then
/// path toward the nearest enemy or, once the floor is clear, the exit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Autopilot {
    /// Adjacent enemy count at which the pulse is preferred over a strike.
    pub pulse_crowd: usize,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self { pulse_crowd: 2 }
    }
}

impl Autopilot {
    pub fn choose(&self, state: &GameState) -> ControlAction {
        let player = &state.player;
        let here = player.position;

        let mut adjacent: Vec<&Enemy> = state
            .floor
            .enemies
            .iter()
            .filter(|enemy| enemy.position.is_adjacent(here))
            .collect();

        if adjacent.len() >= self.pulse_crowd && player.pulse_charges > 0 {
            return ControlAction::Select;
        }

        adjacent.sort_by_key(|enemy| (enemy.hp, enemy.id));
        if let Some(direction) = adjacent
            .first()
            .and_then(|enemy| direction_towards(here, enemy.position))
        {
            return ControlAction::from(direction);
        }

        if player.pulse_charges == 0 && player.medkits > 0 && player.hp * 3 <= player.max_hp {
            return ControlAction::Select;
        }

        let target = state
            .floor
            .enemies
            .iter()
            .min_by_key(|enemy| (here.manhattan(enemy.position), enemy.id))
            .map_or(state.floor.exit, |enemy| enemy.position);

        let avoiding_enemies = first_step(&state.floor.walls, here, target, |cell| {
            state.floor.enemy_at(cell).is_some()
        });
        let direction = avoiding_enemies
            .or_else(|| first_step(&state.floor.walls, here, target, |_| false))
            .or_else(|| {
                Direction::ALL
                    .into_iter()
                    .find(|&direction| !state.floor.is_wall(here.step(direction)))
            });

        direction.map_or(ControlAction::Select, ControlAction::from)
    }
}

fn direction_towards(from: Position, to: Position) -> Option<Direction> {
    Direction::ALL
        .into_iter()
        .find(|&direction| from.step(direction) == to)
}

/// How one autopiloted run ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub seed: u32,
    pub floor: u32,
    pub score: u32,
    pub actions: u32,
    pub rejected: u32,
    pub status: GameStatus,
}

/// Plays the controller's current run until it ends or `max_actions` inputs
/// have been sent.
pub fn play_run(
    controller: &mut GameController,
    autopilot: &Autopilot,
    max_actions: u32,
) -> RunSummary {
    let mut actions = 0;
    let mut rejected = 0;

    while actions < max_actions && controller.state().status == GameStatus::Running {
        let control = autopilot.choose(controller.state());
        let floor_before = controller.state().player.floor;
        actions += 1;

        if !controller.on_control(control) {
            rejected += 1;
            tracing::debug!(
                %control,
                rejection = ?controller.last_rejection(),
                "autopilot input rejected"
            );
        }
        controller.tick();

        if controller.state().player.floor != floor_before {
            tracing::info!("{}", controller.hud().score_line);
        }
    }

    let state = controller.state();
    RunSummary {
        seed: controller.seed(),
        floor: state.player.floor,
        score: state.player.score,
        actions,
        rejected,
        status: state.status,
    }
}
