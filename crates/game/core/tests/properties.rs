//! Property tests for floor generation and turn resolution.

use std::collections::HashSet;

use proptest::prelude::*;
use roguelite_core::{
    ActionOutcome, ActionRejected, ActionResult, Direction, DeterministicRng, FloorBuilder,
    GameConfig, GameStatus, Position, TurnEngine, path_exists,
};

/// Index 4 is the skill, everything else a direction.
fn act(engine: &mut TurnEngine, code: u8) -> Result<ActionOutcome, ActionRejected> {
    match Direction::ALL.get(code as usize) {
        Some(&direction) => engine.move_player(direction),
        None => engine.use_skill(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_generated_floor_is_connected(seed in any::<u32>(), floor in 1u32..=40) {
        let config = GameConfig::default();
        let built = FloorBuilder::new(&config).build(floor, &mut DeterministicRng::new(seed));

        prop_assert_ne!(built.spawn, built.exit);
        prop_assert!(path_exists(&built.walls, built.spawn, built.exit));
        prop_assert!(built.walls.interior_count() <= FloorBuilder::wall_target(floor));
    }

    #[test]
    fn prop_generated_entities_never_overlap(seed in any::<u32>(), floor in 1u32..=40) {
        let config = GameConfig::default();
        let built = FloorBuilder::new(&config).build(floor, &mut DeterministicRng::new(seed));

        let mut cells: Vec<Position> = vec![built.spawn, built.exit];
        cells.extend(built.enemies.iter().map(|enemy| enemy.position));
        cells.extend(built.loot.iter().map(|item| item.position));

        let unique: HashSet<Position> = cells.iter().copied().collect();
        prop_assert_eq!(unique.len(), cells.len());
        for cell in cells {
            prop_assert!(cell.is_interior());
            prop_assert!(!built.walls.contains(cell));
        }
        prop_assert!(built.enemies.len() <= FloorBuilder::enemy_count(floor));
        prop_assert!(built.loot.len() <= FloorBuilder::loot_count(floor));
    }

    #[test]
    fn prop_generation_is_deterministic(seed in any::<u32>(), floor in 1u32..=20) {
        let config = GameConfig::default();
        let left = FloorBuilder::new(&config).build(floor, &mut DeterministicRng::new(seed));
        let right = FloorBuilder::new(&config).build(floor, &mut DeterministicRng::new(seed));
        prop_assert_eq!(left, right);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_hp_stays_within_bounds(
        seed in any::<u32>(),
        inputs in prop::collection::vec(0u8..5, 1..150),
    ) {
        let mut engine = TurnEngine::new(GameConfig::default(), seed);

        for code in inputs {
            let _ = act(&mut engine, code);
            let state = engine.state();
            prop_assert!(state.player.hp <= state.player.max_hp);
            prop_assert_eq!(state.status == GameStatus::GameOver, state.player.hp == 0);
            prop_assert!(!state.won);

            let occupied: HashSet<Position> =
                state.floor.enemies.iter().map(|enemy| enemy.position).collect();
            prop_assert_eq!(occupied.len(), state.floor.enemies.len());
            prop_assert!(!occupied.contains(&state.player.position));
        }
    }

    #[test]
    fn prop_skill_consumes_exactly_one_resource(
        seed in any::<u32>(),
        charges in 0u32..3,
        medkits in 0u32..3,
        hp in 1u32..=10,
    ) {
        let config = GameConfig::default();
        let mut state = TurnEngine::new(config.clone(), seed).state().clone();
        state.player.pulse_charges = charges;
        state.player.medkits = medkits;
        state.player.hp = hp;
        let mut engine = TurnEngine::from_state(config, state, seed);
        let before = engine.state().clone();

        let result = engine.use_skill();
        let player = &engine.state().player;

        if charges > 0 {
            let pulsed = matches!(result, Ok(ActionOutcome { result: ActionResult::Pulse { .. }, .. }));
            prop_assert!(pulsed, "expected a pulse, got {:?}", result);
            prop_assert_eq!(player.pulse_charges, charges - 1);
            prop_assert_eq!(player.medkits, medkits);
        } else if medkits > 0 && hp < before.player.max_hp {
            let healed = matches!(result, Ok(ActionOutcome { result: ActionResult::Medkit { .. }, .. }));
            prop_assert!(healed, "expected a medkit, got {:?}", result);
            prop_assert_eq!(player.pulse_charges, 0);
            prop_assert_eq!(player.medkits, medkits - 1);
        } else {
            prop_assert_eq!(result, Err(ActionRejected::NoPulseCharges));
            prop_assert_eq!(engine.state(), &before);
        }
    }

    #[test]
    fn prop_floor_advances_only_from_cleared_exit(
        seed in any::<u32>(),
        inputs in prop::collection::vec(0u8..5, 1..200),
    ) {
        let mut engine = TurnEngine::new(GameConfig::default(), seed);

        for code in inputs {
            let before = engine.state().clone();
            let Ok(outcome) = act(&mut engine, code) else {
                prop_assert_eq!(engine.state(), &before);
                continue;
            };
            let after = engine.state();

            if !outcome.floor_advanced {
                prop_assert_eq!(after.player.floor, before.player.floor);
                prop_assert!(outcome.enemy_turn_ran);
                continue;
            }

            prop_assert_eq!(after.player.floor, before.player.floor + 1);
            prop_assert!(!outcome.enemy_turn_ran);
            prop_assert_eq!(after.player.turn_counter, before.player.turn_counter);

            let enemies_before = before.floor.enemies.len() as u32;
            let landing = match outcome.result {
                ActionResult::Move { destination, .. } => {
                    prop_assert_eq!(enemies_before, 0);
                    destination
                }
                ActionResult::Strike { defeated, .. } => {
                    prop_assert!(defeated);
                    prop_assert_eq!(enemies_before, 1);
                    before.player.position
                }
                ActionResult::Pulse { hits } => {
                    prop_assert!(hits >= enemies_before);
                    before.player.position
                }
                ActionResult::Medkit { .. } => {
                    prop_assert_eq!(enemies_before, 0);
                    before.player.position
                }
            };
            prop_assert_eq!(landing, before.floor.exit);
        }
    }
}
