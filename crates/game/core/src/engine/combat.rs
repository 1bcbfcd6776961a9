//! Player-side resolution: melee, movement with loot pickup, pulse and medkit.

use super::{ActionResult, TurnEngine};
use crate::state::{EnemyId, LootKind, Position};

/// Score for defeating an enemy on `floor`.
pub(crate) fn kill_reward(floor: u32) -> u32 {
    24 + floor * 6
}

/// Score for picking up any loot item.
pub(crate) const LOOT_REWARD: u32 = 12;

impl TurnEngine {
    pub(super) fn strike(&mut self, target: EnemyId) -> ActionResult {
        let damage = self.state.player.strike_damage();
        if let Some(kind) = self.state.floor.enemy(target).map(|enemy| enemy.kind) {
            self.state.set_message(format!("You strike {kind}"));
        }
        let defeated = self.damage_enemy(target, damage);
        ActionResult::Strike {
            target,
            damage,
            defeated,
        }
    }

    /// Applies damage to an enemy, removing and scoring it on death.
    pub(super) fn damage_enemy(&mut self, id: EnemyId, amount: u32) -> bool {
        let Some(enemy) = self.state.floor.enemy_mut(id) else {
            return false;
        };
        if !enemy.take_damage(amount) {
            tracing::trace!(enemy = %id, amount, hp = enemy.hp, "enemy hit");
            return false;
        }

        if let Some(enemy) = self.state.floor.remove_enemy(id) {
            let player = &mut self.state.player;
            player.score = player.score.saturating_add(kill_reward(player.floor));
            self.state.set_message(format!("{} defeated", enemy.kind));
            tracing::debug!(enemy = %id, kind = %enemy.kind, "enemy defeated");
        }
        true
    }

    pub(super) fn step_player(&mut self, destination: Position) -> ActionResult {
        self.state.player.position = destination;
        let loot = self.collect_loot();

        if self.state.player_on_exit() && !self.state.floor.is_cleared() {
            self.state
                .set_message("Exit sealed until enemies are cleared");
        }

        ActionResult::Move { destination, loot }
    }

    /// Picks up whatever lies under the player.
    fn collect_loot(&mut self) -> Option<LootKind> {
        let item = self.state.floor.take_loot_at(self.state.player.position)?;
        let armor_cap = self.config.armor_cap;
        let player = &mut self.state.player;

        match item.kind {
            LootKind::Potion => {
                player.heal(3);
            }
            LootKind::Forge => player.attack += 1,
            LootKind::Shield => player.armor = (player.armor + 1).min(armor_cap),
            LootKind::Medkit => player.medkits += 1,
            LootKind::Pulse => player.pulse_charges += 1,
        }
        player.score = player.score.saturating_add(LOOT_REWARD);

        self.state.set_message(item.kind.pickup_message());
        Some(item.kind)
    }

    /// Spends a charge to hit every orthogonally adjacent enemy.
    pub(super) fn discharge_pulse(&mut self) -> ActionResult {
        self.state.player.pulse_charges -= 1;
        let damage = self.state.player.pulse_damage();

        let targets: Vec<EnemyId> = self
            .state
            .player
            .position
            .neighbors()
            .into_iter()
            .filter_map(|cell| self.state.floor.enemy_at(cell).map(|enemy| enemy.id))
            .collect();

        for &target in &targets {
            self.damage_enemy(target, damage);
        }

        let hits = targets.len() as u32;
        if hits == 0 {
            self.state.player.heal(1);
            self.state.set_message("Pulse barrier restored 1 HP");
        } else {
            let plural = if hits > 1 { "s" } else { "" };
            self.state.set_message(format!("Pulse hit {hits} foe{plural}"));
        }

        ActionResult::Pulse { hits }
    }

    pub(super) fn use_medkit(&mut self) -> ActionResult {
        self.state.player.medkits -= 1;
        let healed = self.state.player.heal(4);
        self.state.set_message("Used medkit");
        ActionResult::Medkit { healed }
    }
}
