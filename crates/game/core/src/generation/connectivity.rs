//! Breadth-first reachability over the wall grid.

use std::collections::VecDeque;

use crate::config::GameConfig;
use crate::state::{Direction, Position, Walls};

/// True when a 4-connected walkable path joins `from` and `to`.
pub fn path_exists(walls: &Walls, from: Position, to: Position) -> bool {
    search(walls, from, to, |_| false).is_some()
}

/// First step of a shortest walkable path from `from` to `to`, skipping cells
/// for which `blocked` returns true (the goal itself is never treated as
/// blocked). Returns `None` when `from == to` or the goal is unreachable.
pub fn first_step<F>(walls: &Walls, from: Position, to: Position, blocked: F) -> Option<Direction>
where
    F: Fn(Position) -> bool,
{
    if from == to {
        return None;
    }
    let came_from = search(walls, from, to, blocked)?;

    // Walk back from the goal until the cell whose parent is the start.
    let mut current = to;
    loop {
        let parent = came_from[current.index()?]?;
        if parent == from {
            return Direction::ALL
                .into_iter()
                .find(|&direction| from.step(direction) == current);
        }
        current = parent;
    }
}

/// BFS returning the parent table once `to` is reached.
fn search<F>(
    walls: &Walls,
    from: Position,
    to: Position,
    blocked: F,
) -> Option<Vec<Option<Position>>>
where
    F: Fn(Position) -> bool,
{
    let start = from.index()?;
    to.index()?;

    let mut visited = vec![false; GameConfig::CELL_COUNT];
    let mut came_from = vec![None; GameConfig::CELL_COUNT];
    let mut queue = VecDeque::from([from]);
    visited[start] = true;

    while let Some(current) = queue.pop_front() {
        if current == to {
            return Some(came_from);
        }

        for next in current.neighbors() {
            let Some(index) = next.index() else {
                continue;
            };
            if visited[index] || walls.contains(next) || (next != to && blocked(next)) {
                continue;
            }
            visited[index] = true;
            came_from[index] = Some(current);
            queue.push_back(next);
        }
    }

    None
}
