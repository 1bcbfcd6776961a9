//! Enemy step policies.
//!
//! Each [`EnemyKind`] maps to a [`StepPolicy`] for the current turn; the
//! engine then turns the policy into a concrete destination cell.

use arrayvec::ArrayVec;

use super::TurnEngine;
use crate::config::GameConfig;
use crate::state::{Direction, Enemy, EnemyKind, Position};

/// How an enemy that is not adjacent to the player moves this turn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StepPolicy {
    /// Stay put.
    Hold,
    /// Step to the legal neighbor closest to the player.
    Chase,
    /// Random legal neighbor with probability `wander_chance`, otherwise chase.
    Erratic { wander_chance: f64 },
}

impl EnemyKind {
    pub fn step_policy(self, turn: u32, config: &GameConfig) -> StepPolicy {
        match self {
            EnemyKind::Brute if config.brute_rests_on_odd_turns && turn % 2 == 1 => {
                StepPolicy::Hold
            }
            EnemyKind::Brute | EnemyKind::Stalker => StepPolicy::Chase,
            EnemyKind::Skitter => StepPolicy::Erratic {
                wander_chance: config.skitter_wander_chance,
            },
        }
    }
}

impl TurnEngine {
    /// Destination for `enemy` this turn, or `None` when it holds or is boxed in.
    pub(super) fn choose_step(&mut self, enemy: &Enemy) -> Option<Position> {
        let policy = enemy
            .kind
            .step_policy(self.state.player.turn_counter, &self.config);
        if policy == StepPolicy::Hold {
            return None;
        }

        let candidates = self.step_candidates(enemy);
        if candidates.is_empty() {
            return None;
        }

        if let StepPolicy::Erratic { wander_chance } = policy {
            if self.rng.chance(wander_chance) {
                return self.rng.pick(&candidates).copied();
            }
        }

        let target = self.state.player.position;
        candidates
            .into_iter()
            .min_by_key(|cell| cell.manhattan(target))
    }

    /// Walkable neighbors not held by another enemy, in shuffled order.
    fn step_candidates(&mut self, enemy: &Enemy) -> ArrayVec<Position, 4> {
        let mut directions = Direction::ALL;
        self.rng.shuffle(&mut directions);

        directions
            .into_iter()
            .map(|direction| enemy.position.step(direction))
            .filter(|&cell| {
                self.state.is_walkable(cell)
                    && self.state.floor.other_enemy_at(cell, enemy.id).is_none()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brute_holds_on_odd_turns() {
        let config = GameConfig::default();
        assert_eq!(EnemyKind::Brute.step_policy(3, &config), StepPolicy::Hold);
        assert_eq!(EnemyKind::Brute.step_policy(4, &config), StepPolicy::Chase);
    }

    #[test]
    fn brute_rest_can_be_disabled() {
        let config = GameConfig::default().with_brute_rests_on_odd_turns(false);
        assert_eq!(EnemyKind::Brute.step_policy(3, &config), StepPolicy::Chase);
    }

    #[test]
    fn stalker_always_chases() {
        let config = GameConfig::default();
        for turn in 0..4 {
            assert_eq!(
                EnemyKind::Stalker.step_policy(turn, &config),
                StepPolicy::Chase
            );
        }
    }

    #[test]
    fn skitter_uses_configured_wander_chance() {
        let config = GameConfig::default().with_skitter_wander_chance(0.25);
        assert_eq!(
            EnemyKind::Skitter.step_policy(1, &config),
            StepPolicy::Erratic {
                wander_chance: 0.25
            }
        );
    }
}
