//! Procedural floor generation.
//!
//! [`FloorBuilder`] turns a floor number and the run RNG into a connected
//! [`Floor`]. Generation is total: wall carving works from a bounded sampling
//! budget and keeps a wall only while the spawn still reaches the exit, and
//! entity placement stops early when the board runs out of open cells.

pub mod connectivity;

pub use connectivity::{first_step, path_exists};

use std::collections::HashSet;

use crate::config::GameConfig;
use crate::rng::DeterministicRng;
use crate::state::{Enemy, EnemyId, EnemyKind, Floor, Loot, LootKind, Position, Walls};

/// Builds floors according to the configured carving budget.
#[derive(Clone, Copy, Debug)]
pub struct FloorBuilder<'a> {
    config: &'a GameConfig,
}

impl<'a> FloorBuilder<'a> {
    pub fn new(config: &'a GameConfig) -> Self {
        Self { config }
    }

    /// Minimum spawn-to-exit distance for `floor`.
    pub fn exit_distance(floor: u32) -> u32 {
        6 + floor.min(4)
    }

    /// Interior wall count the carver aims for on `floor`.
    pub fn wall_target(floor: u32) -> usize {
        (8 + floor.saturating_mul(2)).clamp(8, 26) as usize
    }

    pub fn enemy_count(floor: u32) -> usize {
        (2 + floor).clamp(3, 10) as usize
    }

    pub fn loot_count(floor: u32) -> usize {
        (2 + floor / 2).clamp(2, 6) as usize
    }

    pub fn build(&self, floor: u32, rng: &mut DeterministicRng) -> Floor {
        let interior: Vec<Position> = Position::interior_cells().collect();

        let spawn = rng.pick(&interior).copied().unwrap_or(Position::new(1, 1));
        let exit = pick_far_cell(&interior, spawn, Self::exit_distance(floor), rng);

        let walls = self.carve_walls(floor, &interior, spawn, exit, rng);

        let mut blocked: HashSet<Position> = walls.iter().collect();
        blocked.insert(spawn);
        blocked.insert(exit);

        let mut enemies = Vec::with_capacity(Self::enemy_count(floor));
        let mut next_id = EnemyId::FIRST;
        for _ in 0..Self::enemy_count(floor) {
            let Some(cell) = take_open_cell(&interior, &blocked, rng) else {
                break;
            };
            let kind = EnemyKind::from_roll(rng.next_f64());
            enemies.push(Enemy::spawn(next_id, kind, cell, floor));
            next_id = next_id.next();
            blocked.insert(cell);
        }

        let mut loot = Vec::with_capacity(Self::loot_count(floor));
        for _ in 0..Self::loot_count(floor) {
            let Some(cell) = take_open_cell(&interior, &blocked, rng) else {
                break;
            };
            loot.push(Loot::new(cell, LootKind::from_roll(rng.next_f64())));
            blocked.insert(cell);
        }

        tracing::debug!(
            floor,
            %spawn,
            %exit,
            walls = walls.interior_count(),
            enemies = enemies.len(),
            loot = loot.len(),
            "floor generated"
        );

        Floor {
            walls,
            spawn,
            exit,
            enemies,
            loot,
        }
    }

    fn carve_walls(
        &self,
        floor: u32,
        interior: &[Position],
        spawn: Position,
        exit: Position,
        rng: &mut DeterministicRng,
    ) -> Walls {
        let mut walls = Walls::bordered();
        let target = Self::wall_target(floor);
        let mut placed = 0;
        let mut attempts = 0;

        while attempts < self.config.carve_attempts && placed < target {
            attempts += 1;
            let Some(&candidate) = rng.pick(interior) else {
                break;
            };
            if candidate == spawn || candidate == exit || walls.contains(candidate) {
                continue;
            }

            walls.insert(candidate);
            if path_exists(&walls, spawn, exit) {
                placed += 1;
            } else {
                walls.remove(candidate);
            }
        }

        if placed < target {
            tracing::trace!(floor, placed, target, attempts, "wall target not reached");
        }

        walls
    }
}

/// Uniform cell at least `minimum` away from `from`; falls back to any other
/// cell when none qualifies.
fn pick_far_cell(
    cells: &[Position],
    from: Position,
    minimum: u32,
    rng: &mut DeterministicRng,
) -> Position {
    let far: Vec<Position> = cells
        .iter()
        .copied()
        .filter(|cell| cell.manhattan(from) >= minimum)
        .collect();
    if let Some(&cell) = rng.pick(&far) {
        return cell;
    }

    let others: Vec<Position> = cells.iter().copied().filter(|&cell| cell != from).collect();
    rng.pick(&others)
        .copied()
        .unwrap_or(Position::new(from.x + 1, from.y))
}

/// Uniform cell from `cells` that is not in `blocked`.
pub(crate) fn take_open_cell(
    cells: &[Position],
    blocked: &HashSet<Position>,
    rng: &mut DeterministicRng,
) -> Option<Position> {
    let open: Vec<Position> = cells
        .iter()
        .copied()
        .filter(|cell| !blocked.contains(cell))
        .collect();
    rng.pick(&open).copied()
}
