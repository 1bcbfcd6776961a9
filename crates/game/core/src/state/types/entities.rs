use super::{EnemyId, Position};

/// Enemy archetype. Each kind carries its own stat curve, turn priority and
/// step policy.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum EnemyKind {
    /// Heavy hitter that only moves on even turns.
    Brute,
    /// Always closes distance.
    Stalker,
    /// Fragile and erratic.
    Skitter,
}

impl EnemyKind {
    /// Lower values act first within an enemy turn.
    pub const fn priority(self) -> u8 {
        match self {
            EnemyKind::Brute => 0,
            EnemyKind::Stalker => 1,
            EnemyKind::Skitter => 2,
        }
    }

    /// Maps a uniform roll in `[0, 1)` to a kind (28% brute, 39% stalker, 33% skitter).
    pub fn from_roll(roll: f64) -> Self {
        if roll < 0.28 {
            EnemyKind::Brute
        } else if roll < 0.67 {
            EnemyKind::Stalker
        } else {
            EnemyKind::Skitter
        }
    }

    pub const fn base_hp(self, floor: u32) -> u32 {
        match self {
            EnemyKind::Brute => 5 + floor,
            EnemyKind::Stalker => 3 + floor,
            EnemyKind::Skitter => 2 + floor,
        }
    }

    pub const fn base_damage(self, floor: u32) -> u32 {
        match self {
            EnemyKind::Brute => 3 + floor / 3,
            EnemyKind::Stalker => 2 + floor / 4,
            EnemyKind::Skitter => 1 + floor / 4,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enemy {
    pub id: EnemyId,
    pub kind: EnemyKind,
    pub position: Position,
    pub hp: u32,
    pub damage: u32,
}

impl Enemy {
    /// Spawns an enemy with stats scaled to `floor`.
    pub fn spawn(id: EnemyId, kind: EnemyKind, position: Position, floor: u32) -> Self {
        Self {
            id,
            kind,
            position,
            hp: kind.base_hp(floor),
            damage: kind.base_damage(floor),
        }
    }

    /// Applies damage and reports whether the enemy died.
    pub fn take_damage(&mut self, amount: u32) -> bool {
        self.hp = self.hp.saturating_sub(amount);
        self.hp == 0
    }
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LootKind {
    /// +3 hp, capped at max hp.
    Potion,
    /// +1 attack.
    Forge,
    /// +1 armor, capped.
    Shield,
    /// +1 medkit.
    Medkit,
    /// +1 pulse charge.
    Pulse,
}

impl LootKind {
    /// Maps a uniform roll in `[0, 1)` to a kind
    /// (potion 28%, forge 20%, shield 18%, medkit 18%, pulse 16%).
    pub fn from_roll(roll: f64) -> Self {
        if roll < 0.28 {
            LootKind::Potion
        } else if roll < 0.48 {
            LootKind::Forge
        } else if roll < 0.66 {
            LootKind::Shield
        } else if roll < 0.84 {
            LootKind::Medkit
        } else {
            LootKind::Pulse
        }
    }

    /// Pickup message shown in the status line.
    pub const fn pickup_message(self) -> &'static str {
        match self {
            LootKind::Potion => "Found nanite potion (+3 HP)",
            LootKind::Forge => "Found forge core (+1 ATK)",
            LootKind::Shield => "Found shield plate (+1 ARM)",
            LootKind::Medkit => "Found medkit",
            LootKind::Pulse => "Found pulse charge",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Loot {
    pub position: Position,
    pub kind: LootKind,
}

impl Loot {
    pub fn new(position: Position, kind: LootKind) -> Self {
        Self { position, kind }
    }
}
