use super::{Enemy, EnemyId, Loot, Position, Walls};

/// One generated dungeon level.
///
/// Built by [`crate::generation::FloorBuilder`] and replaced wholesale when the
/// player advances; it is never carried over between floors.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Floor {
    pub walls: Walls,
    /// Where the player enters this floor.
    pub spawn: Position,
    pub exit: Position,
    pub enemies: Vec<Enemy>,
    pub loot: Vec<Loot>,
}

impl Floor {
    pub fn is_wall(&self, position: Position) -> bool {
        self.walls.contains(position)
    }

    pub fn enemy(&self, id: EnemyId) -> Option<&Enemy> {
        self.enemies.iter().find(|enemy| enemy.id == id)
    }

    pub fn enemy_mut(&mut self, id: EnemyId) -> Option<&mut Enemy> {
        self.enemies.iter_mut().find(|enemy| enemy.id == id)
    }

    pub fn enemy_at(&self, position: Position) -> Option<&Enemy> {
        self.enemies.iter().find(|enemy| enemy.position == position)
    }

    /// Enemy on `position` other than `except`.
    pub fn other_enemy_at(&self, position: Position, except: EnemyId) -> Option<&Enemy> {
        self.enemies
            .iter()
            .find(|enemy| enemy.id != except && enemy.position == position)
    }

    /// Removes an enemy by id, returning it if it was present.
    pub fn remove_enemy(&mut self, id: EnemyId) -> Option<Enemy> {
        let index = self.enemies.iter().position(|enemy| enemy.id == id)?;
        Some(self.enemies.remove(index))
    }

    /// Removes and returns the loot lying on `position`.
    pub fn take_loot_at(&mut self, position: Position) -> Option<Loot> {
        let index = self.loot.iter().position(|item| item.position == position)?;
        Some(self.loot.remove(index))
    }

    pub fn is_cleared(&self) -> bool {
        self.enemies.is_empty()
    }
}
