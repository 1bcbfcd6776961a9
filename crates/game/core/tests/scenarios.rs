use roguelite_core::{
    ActionRejected, ActionResult, Direction, Enemy, EnemyId, EnemyKind, Floor, GameConfig,
    GameState, GameStatus, Position, StartingStats, TurnEngine, Walls,
};

fn open_floor(enemies: Vec<Enemy>) -> Floor {
    Floor {
        walls: Walls::bordered(),
        spawn: Position::new(2, 2),
        exit: Position::new(9, 9),
        enemies,
        loot: Vec::new(),
    }
}

fn enemy(id: u32, kind: EnemyKind, x: i32, y: i32) -> Enemy {
    Enemy::spawn(EnemyId(id), kind, Position::new(x, y), 1)
}

fn engine_with(state: GameState) -> TurnEngine {
    TurnEngine::from_state(GameConfig::default(), state, 31)
}

fn state_with(enemies: Vec<Enemy>) -> GameState {
    GameState::new(open_floor(enemies), &StartingStats::default())
}

#[test]
fn striking_a_weak_skitter_kills_and_scores() {
    let mut skitter = enemy(1, EnemyKind::Skitter, 3, 2);
    skitter.hp = 2;
    let mut state = state_with(vec![skitter]);
    state.player.turn_counter = 1;
    let mut engine = engine_with(state);

    let outcome = engine.move_player(Direction::Right).unwrap();

    assert_eq!(
        outcome.result,
        ActionResult::Strike {
            target: EnemyId(1),
            damage: 2,
            defeated: true,
        }
    );
    let state = engine.state();
    assert!(state.floor.enemies.is_empty());
    assert_eq!(state.player.score, 24 + 6);
    assert_eq!(state.player.position, Position::new(2, 2));
    assert_eq!(state.message, "Skitter defeated");
}

#[test]
fn fifth_turn_strike_gets_bonus_damage() {
    let mut state = state_with(vec![enemy(1, EnemyKind::Brute, 3, 2)]);
    state.player.turn_counter = 5;
    let mut engine = engine_with(state);

    let outcome = engine.move_player(Direction::Right).unwrap();

    assert!(matches!(
        outcome.result,
        ActionResult::Strike {
            damage: 3,
            defeated: false,
            ..
        }
    ));
    assert_eq!(engine.state().floor.enemies[0].hp, 3);
}

#[test]
fn empty_pulse_falls_back_to_medkit() {
    let mut state = state_with(vec![enemy(1, EnemyKind::Stalker, 9, 2)]);
    state.player.pulse_charges = 0;
    state.player.medkits = 1;
    state.player.hp = 5;
    let mut engine = engine_with(state);

    let outcome = engine.use_skill().unwrap();

    assert_eq!(outcome.result, ActionResult::Medkit { healed: 4 });
    assert!(outcome.enemy_turn_ran);
    let player = &engine.state().player;
    assert_eq!(player.medkits, 0);
    assert_eq!(player.hp, 9);
    assert_eq!(engine.state().message, "Used medkit");
}

#[test]
fn skill_without_resources_is_rejected_untouched() {
    let mut state = state_with(vec![enemy(1, EnemyKind::Stalker, 9, 2)]);
    state.player.pulse_charges = 0;
    state.player.medkits = 1;
    let mut engine = engine_with(state);
    let before = engine.state().clone();

    assert_eq!(engine.use_skill(), Err(ActionRejected::NoPulseCharges));
    assert_eq!(engine.state(), &before);
}

#[test]
fn pulse_without_targets_restores_one_hp() {
    let mut state = state_with(vec![enemy(1, EnemyKind::Stalker, 9, 2)]);
    state.player.hp = 6;
    let mut engine = engine_with(state);

    let outcome = engine.use_skill().unwrap();

    assert_eq!(outcome.result, ActionResult::Pulse { hits: 0 });
    assert_eq!(engine.state().player.hp, 7);
    assert_eq!(engine.state().player.pulse_charges, 0);
}

#[test]
fn lethal_hit_ends_the_run() {
    let mut state = state_with(vec![enemy(1, EnemyKind::Brute, 2, 3)]);
    state.player.hp = 1;
    let mut engine = engine_with(state);

    engine.use_skill().unwrap();

    let state = engine.state().clone();
    assert_eq!(state.player.hp, 0);
    assert_eq!(state.status, GameStatus::GameOver);
    assert!(!state.won);
    assert_eq!(state.message, "Run lost on floor 1");

    assert!(matches!(
        engine.move_player(Direction::Up),
        Err(ActionRejected::NotRunning {
            status: GameStatus::GameOver
        })
    ));
    engine.toggle_pause();
    assert_eq!(engine.state(), &state);
}

#[test]
fn exit_opens_only_after_last_enemy_dies() {
    let mut skitter = enemy(1, EnemyKind::Skitter, 9, 10);
    skitter.hp = 2;
    let mut state = state_with(vec![skitter]);
    state.player.position = Position::new(9, 8);
    let mut engine = engine_with(state);

    let outcome = engine.move_player(Direction::Down).unwrap();
    assert!(!outcome.floor_advanced);
    assert!(outcome.enemy_turn_ran);
    assert_eq!(engine.state().player.floor, 1);
    assert_eq!(engine.state().player.hp, 9);

    let outcome = engine.move_player(Direction::Down).unwrap();
    assert!(outcome.floor_advanced);
    assert!(!outcome.enemy_turn_ran);

    let state = engine.state();
    assert_eq!(state.player.floor, 2);
    assert_eq!(state.player.score, 30 + 120 + 36);
    assert_eq!(state.player.hp, 10);
    assert_eq!(state.player.position, state.floor.spawn);
    assert_eq!(state.message, "Floor 2 deployed");
}

#[test]
fn turn_order_follows_kind_then_id() {
    let state = state_with(vec![
        enemy(1, EnemyKind::Skitter, 5, 5),
        enemy(2, EnemyKind::Stalker, 6, 6),
        enemy(3, EnemyKind::Brute, 7, 7),
        enemy(4, EnemyKind::Brute, 8, 8),
    ]);
    let engine = engine_with(state);

    assert_eq!(
        engine.turn_order(),
        vec![EnemyId(3), EnemyId(4), EnemyId(2), EnemyId(1)]
    );
}

#[test]
fn pause_blocks_actions_until_resumed() {
    let mut engine = engine_with(state_with(Vec::new()));
    engine.toggle_pause();

    assert!(matches!(
        engine.move_player(Direction::Down),
        Err(ActionRejected::NotRunning {
            status: GameStatus::Paused
        })
    ));

    engine.toggle_pause();
    assert!(engine.move_player(Direction::Down).is_ok());
    assert_eq!(engine.state().player.position, Position::new(2, 3));
}

#[test]
fn idle_ticks_raise_controller_hint() {
    let mut engine = engine_with(state_with(vec![enemy(1, EnemyKind::Stalker, 9, 2)]));

    for _ in 0..31 {
        engine.tick();
    }
    assert_eq!(engine.state().message, GameState::INITIAL_MESSAGE);

    engine.tick();
    assert_eq!(
        engine.state().message,
        "Controller hint: D-pad/Left Stick + A(Select)"
    );
}

#[test]
fn restart_rebuilds_floor_one() {
    let mut engine = TurnEngine::new(GameConfig::default(), 404);
    let fresh = engine.state().clone();
    let _ = engine.use_skill();
    engine.reset(404);

    assert_eq!(engine.state(), &fresh);
    assert_eq!(engine.seed(), 404);
}
