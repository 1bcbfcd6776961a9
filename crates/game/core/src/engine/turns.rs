use std::collections::HashSet;

use super::TurnEngine;
use crate::generation::take_open_cell;
use crate::state::{Enemy, EnemyId, GameStatus, Loot, LootKind, Position};

impl TurnEngine {
    /// Enemy ids in acting order: kind priority first, then id.
    pub fn turn_order(&self) -> Vec<EnemyId> {
        let mut order: Vec<(u8, EnemyId)> = self
            .state
            .floor
            .enemies
            .iter()
            .map(|enemy| (enemy.kind.priority(), enemy.id))
            .collect();
        order.sort_unstable();
        order.into_iter().map(|(_, id)| id).collect()
    }

    /// Runs one full enemy turn. Only ever follows an accepted player action.
    pub(super) fn run_enemy_turn(&mut self) {
        if !self.state.status.is_running() {
            return;
        }

        self.state.player.turn_counter += 1;
        let turn = self.state.player.turn_counter;

        for id in self.turn_order() {
            if !self.state.status.is_running() {
                return;
            }
            // Re-fetch: an earlier step of this turn may have changed the floor.
            let Some(enemy) = self.state.floor.enemy(id).cloned() else {
                continue;
            };

            if enemy.position.is_adjacent(self.state.player.position) {
                self.enemy_attack(&enemy);
                continue;
            }

            let Some(next) = self.choose_step(&enemy) else {
                tracing::trace!(enemy = %id, kind = %enemy.kind, turn, "enemy holds");
                continue;
            };

            if next == self.state.player.position {
                self.enemy_attack(&enemy);
            } else if self.state.is_walkable(next)
                && self.state.floor.other_enemy_at(next, id).is_none()
            {
                if let Some(moving) = self.state.floor.enemy_mut(id) {
                    moving.position = next;
                }
                tracing::trace!(enemy = %id, kind = %enemy.kind, to = %next, "enemy moves");
            }
        }

        let interval = self.config.loot_spawn_interval;
        if self.state.status.is_running()
            && interval > 0
            && turn % interval == 0
            && self.state.floor.loot.len() < self.config.loot_spawn_cap
        {
            self.spawn_loot_crate();
        }
    }

    fn enemy_attack(&mut self, enemy: &Enemy) {
        let damage = enemy.damage.saturating_sub(self.state.player.armor).max(1);
        let downed = self.state.player.take_damage(damage);
        self.state
            .set_message(format!("{} hits for {damage}", enemy.kind));

        if downed {
            self.state.status = GameStatus::GameOver;
            self.state.won = false;
            let floor = self.state.player.floor;
            self.state.set_message(format!("Run lost on floor {floor}"));
            tracing::info!(
                floor,
                score = self.state.player.score,
                killer = %enemy.kind,
                "run lost"
            );
        }
    }

    /// Drops a random loot item on a free interior cell, if any remain.
    fn spawn_loot_crate(&mut self) {
        let floor = &self.state.floor;
        let mut blocked: HashSet<Position> = floor.walls.iter().collect();
        blocked.insert(self.state.player.position);
        blocked.insert(floor.exit);
        blocked.extend(floor.enemies.iter().map(|enemy| enemy.position));
        blocked.extend(floor.loot.iter().map(|item| item.position));

        let interior: Vec<Position> = Position::interior_cells().collect();
        let Some(cell) = take_open_cell(&interior, &blocked, &mut self.rng) else {
            return;
        };
        let kind = LootKind::from_roll(self.rng.next_f64());
        self.state.floor.loot.push(Loot::new(cell, kind));
        tracing::debug!(%cell, %kind, "loot crate spawned");
    }
}
