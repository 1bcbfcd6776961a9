use super::Position;
use crate::config::StartingStats;

/// Player record carried across floors for the whole run.
///
/// All counters are unsigned; `hp` never exceeds `max_hp`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    pub position: Position,
    pub hp: u32,
    pub max_hp: u32,
    pub attack: u32,
    pub armor: u32,
    pub medkits: u32,
    pub pulse_charges: u32,
    pub score: u32,
    pub floor: u32,
    /// Completed enemy turns this run.
    pub turn_counter: u32,
}

impl PlayerState {
    /// Fresh floor-1 player at `position`.
    pub fn new(position: Position, starting: &StartingStats) -> Self {
        Self {
            position,
            hp: starting.max_hp,
            max_hp: starting.max_hp,
            attack: starting.attack,
            armor: starting.armor,
            medkits: starting.medkits,
            pulse_charges: starting.pulse_charges,
            score: 0,
            floor: 1,
            turn_counter: 0,
        }
    }

    /// Restores hp up to `max_hp`, returning the amount actually healed.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.hp;
        self.hp = self.hp.saturating_add(amount).min(self.max_hp);
        self.hp - before
    }

    /// Removes hp, stopping at zero. Returns true if the player is down.
    pub fn take_damage(&mut self, amount: u32) -> bool {
        self.hp = self.hp.saturating_sub(amount);
        self.hp == 0
    }

    pub fn is_wounded(&self) -> bool {
        self.hp < self.max_hp
    }

    /// Melee damage for the current turn; every fifth turn lands a bonus point.
    pub fn strike_damage(&self) -> u32 {
        let bonus = u32::from(self.turn_counter % 5 == 0);
        self.attack + bonus
    }

    /// Damage dealt to each enemy caught by a pulse.
    pub fn pulse_damage(&self) -> u32 {
        self.attack.saturating_sub(1).max(2)
    }
}
