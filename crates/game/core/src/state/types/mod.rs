pub mod common;
pub mod entities;
pub mod floor;
pub mod player;
pub mod walls;

// Re-export common types
pub use common::{Direction, EnemyId, Position};

// Re-export entity types
pub use entities::{Enemy, EnemyKind, Loot, LootKind};

// Re-export floor layout
pub use floor::Floor;

// Re-export player record
pub use player::PlayerState;

// Re-export wall grid
pub use walls::Walls;
