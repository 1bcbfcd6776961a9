use super::TurnEngine;
use crate::generation::FloorBuilder;

/// Score for reaching `floor`.
pub(crate) fn floor_reward(floor: u32) -> u32 {
    120 + floor * 18
}

impl TurnEngine {
    /// Moves the run to the next floor: rewards, carried-stat growth and a
    /// freshly generated layout.
    pub(super) fn advance_floor(&mut self) {
        let player = &mut self.state.player;
        player.floor += 1;
        let floor = player.floor;

        player.score = player.score.saturating_add(floor_reward(floor));
        if floor % 3 == 0 {
            player.max_hp += 1;
        }
        player.heal(3);
        player.pulse_charges += 1;

        let next = FloorBuilder::new(&self.config).build(floor, &mut self.rng);
        self.state.enter_floor(next);
        self.state.set_message(format!("Floor {floor} deployed"));

        tracing::info!(
            floor,
            score = self.state.player.score,
            hp = self.state.player.hp,
            "floor advanced"
        );
    }
}
