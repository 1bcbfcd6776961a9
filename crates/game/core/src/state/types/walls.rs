use super::Position;
use crate::config::GameConfig;

/// Wall layout of one floor, stored as a row-major cell grid.
///
/// The outer ring is always wall. Positions outside the board read as walls
/// so movement and pathing never need a separate bounds check.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Walls {
    cells: Vec<bool>,
}

impl Walls {
    /// Grid with only the border walled.
    pub fn bordered() -> Self {
        let mut cells = vec![false; GameConfig::CELL_COUNT];
        for y in 0..GameConfig::GRID_SIZE {
            for x in 0..GameConfig::GRID_SIZE {
                let position = Position::new(x, y);
                if let Some(index) = position.index() {
                    cells[index] = !position.is_interior();
                }
            }
        }
        Self { cells }
    }

    pub fn contains(&self, position: Position) -> bool {
        position
            .index()
            .and_then(|index| self.cells.get(index).copied())
            .unwrap_or(true)
    }

    /// Walls an interior cell. Returns false for border or out-of-board cells
    /// and for cells that are already walls.
    pub fn insert(&mut self, position: Position) -> bool {
        if !position.is_interior() || self.contains(position) {
            return false;
        }
        match position.index() {
            Some(index) => {
                self.cells[index] = true;
                true
            }
            None => false,
        }
    }

    /// Opens an interior cell again. The border cannot be removed.
    pub fn remove(&mut self, position: Position) -> bool {
        if !position.is_interior() || !self.contains(position) {
            return false;
        }
        match position.index() {
            Some(index) => {
                self.cells[index] = false;
                true
            }
            None => false,
        }
    }

    pub fn interior_count(&self) -> usize {
        Position::interior_cells()
            .filter(|&cell| self.contains(cell))
            .count()
    }

    /// All wall cells, border included, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &is_wall)| is_wall)
            .map(|(index, _)| {
                let index = index as i32;
                Position::new(index % GameConfig::GRID_SIZE, index / GameConfig::GRID_SIZE)
            })
    }
}

impl Default for Walls {
    fn default() -> Self {
        Self::bordered()
    }
}

impl std::fmt::Debug for Walls {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..GameConfig::GRID_SIZE {
            for x in 0..GameConfig::GRID_SIZE {
                let glyph = if self.contains(Position::new(x, y)) { '#' } else { '.' };
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
