use std::fmt;

use crate::config::GameConfig;

/// Identifier for an enemy, unique within its floor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyId(pub u32);

impl EnemyId {
    /// First identifier handed out on a fresh floor.
    pub const FIRST: Self = Self(1);

    #[inline]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for EnemyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Discrete grid position expressed in cell coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// `|dx| + |dy|`.
    pub fn manhattan(self, other: Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    pub fn is_adjacent(self, other: Position) -> bool {
        self.manhattan(other) == 1
    }

    pub fn step(self, direction: Direction) -> Position {
        let (dx, dy) = direction.delta();
        Position::new(self.x + dx, self.y + dy)
    }

    /// The four orthogonal neighbors in [`Direction::ALL`] order.
    pub fn neighbors(self) -> [Position; 4] {
        Direction::ALL.map(|direction| self.step(direction))
    }

    pub fn in_bounds(self) -> bool {
        (0..GameConfig::GRID_SIZE).contains(&self.x) && (0..GameConfig::GRID_SIZE).contains(&self.y)
    }

    /// True for cells inside the always-wall border.
    pub fn is_interior(self) -> bool {
        (1..GameConfig::GRID_SIZE - 1).contains(&self.x)
            && (1..GameConfig::GRID_SIZE - 1).contains(&self.y)
    }

    /// Row-major cell index, `None` outside the board.
    pub fn index(self) -> Option<usize> {
        self.in_bounds()
            .then(|| (self.y * GameConfig::GRID_SIZE + self.x) as usize)
    }

    /// Every interior cell, row by row.
    pub fn interior_cells() -> impl Iterator<Item = Position> {
        (1..GameConfig::GRID_SIZE - 1)
            .flat_map(|y| (1..GameConfig::GRID_SIZE - 1).map(move |x| Position::new(x, y)))
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Cardinal movement direction. Screen coordinates: `Up` decreases `y`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric() {
        let a = Position::new(1, 7);
        let b = Position::new(4, 2);
        assert_eq!(a.manhattan(b), 8);
        assert_eq!(b.manhattan(a), 8);
    }

    #[test]
    fn border_cells_are_not_interior() {
        assert!(!Position::new(0, 5).is_interior());
        assert!(!Position::new(11, 5).is_interior());
        assert!(Position::new(1, 1).is_interior());
        assert!(Position::new(10, 10).is_interior());
    }

    #[test]
    fn interior_has_one_hundred_cells() {
        assert_eq!(Position::interior_cells().count(), 100);
    }

    #[test]
    fn index_rejects_out_of_bounds() {
        assert_eq!(Position::new(-1, 0).index(), None);
        assert_eq!(Position::new(12, 0).index(), None);
        assert_eq!(Position::new(3, 2).index(), Some(27));
    }

    #[test]
    fn direction_parses_from_control_names() {
        assert_eq!("UP".parse::<Direction>(), Ok(Direction::Up));
        assert_eq!("left".parse::<Direction>(), Ok(Direction::Left));
        assert!("SELECT".parse::<Direction>().is_err());
    }
}
