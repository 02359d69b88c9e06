//! Tests for the simulation engine, mode transitions, spawning and combat.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use laststand_core::commands::{InputEvent, InputFrame, MovementKeys};
use laststand_core::components::*;
use laststand_core::constants::*;
use laststand_core::enums::*;
use laststand_core::events::GameEvent;
use laststand_core::state::{Resources, WorldSnapshot};
use laststand_core::types::{PlayBounds, Position, Velocity};

use crate::engine::{SimConfig, SimulationEngine};
use crate::error::SimError;
use crate::session::WorldState;
use crate::systems::spawn_director::{self, SpawnConfig, SpawnPolicy};
use crate::world_setup;

/// No opening zombies, no loot, no trickle: only what a test places.
fn quiet_config() -> SimConfig {
    SimConfig {
        spawn: SpawnConfig {
            policy: SpawnPolicy::EdgeTrickle {
                chance: 0.0,
                night_multiplier: NIGHT_SPAWN_MULTIPLIER,
                initial_count: 0,
            },
            tier_weights: ZOMBIE_TIER_WEIGHTS,
            initial_pickups: 0,
        },
        ..Default::default()
    }
}

fn idle() -> InputFrame {
    InputFrame::default()
}

fn start(engine: &mut SimulationEngine) -> WorldSnapshot {
    engine.tick(&InputFrame::with_events([InputEvent::Start]))
}

fn run_ticks(engine: &mut SimulationEngine, frame: &InputFrame, n: usize) -> WorldSnapshot {
    let mut snap = engine.snapshot();
    for _ in 0..n {
        snap = engine.tick(frame);
    }
    snap
}

fn player_position(engine: &SimulationEngine) -> Position {
    let mut query = engine.world().query::<(&Player, &Position)>();
    let (_, (_, pos)) = query.iter().next().expect("player exists");
    *pos
}

fn despawn_all_zombies(engine: &mut SimulationEngine) {
    let state = engine.state_mut();
    let zombies: Vec<hecs::Entity> = state.world.query::<&Zombie>().iter().map(|(e, _)| e).collect();
    for entity in zombies {
        state.world.despawn(entity).unwrap();
    }
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let mut engine_a = SimulationEngine::new(SimConfig {
        seed: 12345,
        ..Default::default()
    });
    let mut engine_b = SimulationEngine::new(SimConfig {
        seed: 12345,
        ..Default::default()
    });

    start(&mut engine_a);
    start(&mut engine_b);

    for i in 0..300 {
        let mut frame = InputFrame {
            keys: MovementKeys {
                up: i % 90 < 30,
                right: i % 60 < 20,
                ..Default::default()
            },
            cursor: Position::new(100.0, 50.0),
            events: Vec::new(),
        };
        if i % 7 == 0 {
            frame.events.push(InputEvent::Fire);
        }

        let json_a = serde_json::to_string(&engine_a.tick(&frame)).unwrap();
        let json_b = serde_json::to_string(&engine_b.tick(&frame)).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed");
    }
}

#[test]
fn test_determinism_different_seeds() {
    let mut engine_a = SimulationEngine::new(SimConfig {
        seed: 111,
        ..Default::default()
    });
    let mut engine_b = SimulationEngine::new(SimConfig {
        seed: 222,
        ..Default::default()
    });

    let json_a = serde_json::to_string(&start(&mut engine_a)).unwrap();
    let json_b = serde_json::to_string(&start(&mut engine_b)).unwrap();
    assert_ne!(json_a, json_b, "Different seeds should place zombies differently");
}

// ---- Mode transitions ----

#[test]
fn test_engine_starts_in_menu() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    assert_eq!(engine.mode(), GameMode::Menu);

    let snap = run_ticks(&mut engine, &idle(), 10);
    assert_eq!(snap.mode, GameMode::Menu);
    assert_eq!(snap.tick, 0);
    assert!(snap.entities.is_empty());
}

#[test]
fn test_start_initializes_session() {
    let mut config = SimConfig::default();
    // Loot could land on the player and change the weapon or ammunition.
    config.spawn.initial_pickups = 0;
    let mut engine = SimulationEngine::new(config);
    let snap = start(&mut engine);

    assert_eq!(snap.mode, GameMode::Playing);
    assert_eq!(snap.day, 1);
    assert_eq!(snap.wave, 1);
    assert_eq!(snap.resources, Resources::default());
    assert!(snap.error_message.is_empty());
    assert_eq!(engine.sessions_started(), 1);

    let player = snap.player().expect("player spawned");
    assert_eq!(player.position, Position::new(400.0, 300.0));
    assert_eq!(player.health, Some(PLAYER_MAX_HEALTH));
    assert_eq!(player.weapon, Some(WeaponKind::Pistol));

    assert!(snap.count(EntityKind::Zombie) >= INITIAL_ZOMBIES as usize);
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::WaveStarted { wave: 1, count: INITIAL_ZOMBIES })));
}

#[test]
fn test_pause_freezes_everything() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    start(&mut engine);
    run_ticks(&mut engine, &idle(), 30);

    let paused = engine.tick(&InputFrame::with_events([InputEvent::TogglePause]));
    assert_eq!(paused.mode, GameMode::Paused);
    let frozen = serde_json::to_string(&paused).unwrap();

    let held = InputFrame {
        keys: MovementKeys {
            left: true,
            ..Default::default()
        },
        cursor: Position::new(0.0, 0.0),
        events: vec![InputEvent::Fire],
    };
    let later = run_ticks(&mut engine, &held, 120);
    assert_eq!(serde_json::to_string(&later).unwrap(), frozen, "Paused world must not change");

    let resumed = engine.tick(&InputFrame::with_events([InputEvent::TogglePause]));
    assert_eq!(resumed.mode, GameMode::Playing);
    assert_eq!(resumed.tick, paused.tick + 1);
}

#[test]
fn test_start_ignored_while_playing() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    start(&mut engine);
    run_ticks(&mut engine, &idle(), 10);

    let snap = start(&mut engine);
    assert_eq!(snap.mode, GameMode::Playing);
    assert_eq!(snap.tick, 12);
    assert_eq!(engine.sessions_started(), 1);
}

#[test]
fn test_quit_sets_flag() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    assert!(!engine.quit_requested());
    engine.tick(&InputFrame::with_events([InputEvent::Quit]));
    assert!(engine.quit_requested());
}

// ---- Clock ----

#[test]
fn test_clock_runs_sixty_game_minutes_per_second() {
    let mut engine = SimulationEngine::new(quiet_config());
    start(&mut engine);
    let snap = run_ticks(&mut engine, &idle(), 59);

    assert_eq!(snap.tick, 60);
    assert!((snap.minute - 60.0).abs() < 1e-9, "minute = {}", snap.minute);
    assert!(snap.is_night);
}

// ---- Pursuit ----

#[test]
fn test_zombie_closes_in_at_tier_speed() {
    let mut engine = SimulationEngine::new(quiet_config());
    start(&mut engine);
    assert_eq!(player_position(&engine), Position::new(400.0, 300.0));

    let start_pos = Position::new(200.0, -32.0);
    let zombie = engine.spawn_test_zombie(ZombieTier::Shambler, start_pos);

    run_ticks(&mut engine, &idle(), 60);

    let pos = *engine.world().get::<&Position>(zombie).unwrap();
    let dx: f64 = 200.0;
    let dy: f64 = 332.0;
    let len = (dx * dx + dy * dy).sqrt();
    let expected = Position::new(200.0 + 50.0 * dx / len, -32.0 + 50.0 * dy / len);
    assert!((pos.x - expected.x).abs() < 1e-6, "x = {}", pos.x);
    assert!((pos.y - expected.y).abs() < 1e-6, "y = {}", pos.y);
    assert!((pos.distance_to(&start_pos) - 50.0).abs() < 1e-6);
}

#[test]
fn test_zombie_on_player_stays_put() {
    let mut engine = SimulationEngine::new(quiet_config());
    start(&mut engine);
    let zombie = engine.spawn_test_zombie(ZombieTier::Sprinter, Position::new(400.0, 300.0));

    engine.tick(&idle());
    let vel = *engine.world().get::<&Velocity>(zombie).unwrap();
    assert_eq!(vel, Velocity::zero());
}

// ---- Player movement ----

#[test]
fn test_player_clamped_to_play_area() {
    let mut engine = SimulationEngine::new(quiet_config());
    start(&mut engine);

    let frame = InputFrame {
        keys: MovementKeys {
            left: true,
            down: true,
            ..Default::default()
        },
        ..Default::default()
    };
    run_ticks(&mut engine, &frame, 600);

    let pos = player_position(&engine);
    assert_eq!(pos.x, 0.0);
    assert_eq!(pos.y, SCREEN_HEIGHT - TILE_SIZE);
}

#[test]
fn test_diagonal_movement_not_faster() {
    let mut engine = SimulationEngine::new(quiet_config());
    start(&mut engine);
    let before = player_position(&engine);

    let frame = InputFrame {
        keys: MovementKeys {
            up: true,
            right: true,
            ..Default::default()
        },
        ..Default::default()
    };
    engine.tick(&frame);

    let moved = player_position(&engine).distance_to(&before);
    assert!((moved - PLAYER_SPEED * DT).abs() < 1e-9, "moved {moved}");
}

// ---- Weapons ----

#[test]
fn test_fire_rate_limited_by_cooldown() {
    let mut engine = SimulationEngine::new(SimConfig {
        tick_rate: 10,
        ..quiet_config()
    });
    let fire = InputFrame {
        cursor: Position::new(0.0, 0.0),
        events: vec![InputEvent::Fire],
        ..Default::default()
    };

    // t = 0.0: start and fire in the same frame.
    let snap = engine.tick(&InputFrame {
        events: vec![InputEvent::Start, InputEvent::Fire],
        ..fire.clone()
    });
    assert_eq!(snap.score.shots_fired, 1);

    // t = 0.1: still cooling down.
    let snap = engine.tick(&fire);
    assert_eq!(snap.score.shots_fired, 1);

    run_ticks(&mut engine, &idle(), 3);

    // t = 0.5: pistol cooldown elapsed.
    let snap = engine.tick(&fire);
    assert_eq!(snap.score.shots_fired, 2);
    assert_eq!(snap.resources.ammunition, STARTING_AMMUNITION - 2);
}

#[test]
fn test_fire_at_exact_cooldown_accepted_at_default_rate() {
    let fire = InputFrame {
        cursor: Position::new(0.0, 0.0),
        events: vec![InputEvent::Fire],
        ..Default::default()
    };

    for offset in 0..90 {
        let mut engine = SimulationEngine::new(quiet_config());
        start(&mut engine);
        run_ticks(&mut engine, &idle(), offset);

        let snap = engine.tick(&fire);
        assert_eq!(snap.score.shots_fired, 1, "first shot at offset {offset}");

        // 500 ms at 60 Hz is 30 ticks: one tick early is refused.
        run_ticks(&mut engine, &idle(), 28);
        let snap = engine.tick(&fire);
        assert_eq!(snap.score.shots_fired, 1, "early shot at offset {offset}");

        let snap = engine.tick(&fire);
        assert_eq!(snap.score.shots_fired, 2, "shot at +500ms refused at offset {offset}");
    }
}

#[test]
fn test_smg_fires_every_six_ticks() {
    let mut engine = SimulationEngine::new(quiet_config());
    start(&mut engine);
    let player = engine.state_mut().player_entity().unwrap();
    engine.state_mut().world.get::<&mut Player>(player).unwrap().weapon = Weapon::new(WeaponKind::Smg);

    let fire = InputFrame {
        cursor: Position::new(0.0, 0.0),
        events: vec![InputEvent::Fire],
        ..Default::default()
    };
    let snap = run_ticks(&mut engine, &fire, 60);
    assert_eq!(snap.score.shots_fired, 10);
    assert_eq!(snap.resources.ammunition, STARTING_AMMUNITION - 10);
}

#[test]
fn test_fire_needs_ammunition() {
    let mut engine = SimulationEngine::new(quiet_config());
    start(&mut engine);
    engine.state_mut().resources.ammunition = 0;

    let snap = engine.tick(&InputFrame::with_events([InputEvent::Fire]));
    assert_eq!(snap.score.shots_fired, 0);
    assert_eq!(snap.count(EntityKind::Bullet), 0);
    assert_eq!(snap.resources.ammunition, 0);
}

#[test]
fn test_bullet_kills_zombie() {
    let mut engine = SimulationEngine::new(quiet_config());
    start(&mut engine);
    let zombie = engine.spawn_test_zombie(ZombieTier::Shambler, Position::new(600.0, 300.0));
    engine.state_mut().world.get::<&mut Health>(zombie).unwrap().current = 20.0;

    let mut killed = false;
    let mut snap = engine.tick(&InputFrame {
        cursor: Position::new(616.0, 316.0),
        events: vec![InputEvent::Fire],
        ..Default::default()
    });
    for _ in 0..60 {
        killed |= snap
            .events
            .iter()
            .any(|e| matches!(e, GameEvent::ZombieKilled { tier: ZombieTier::Shambler, .. }));
        snap = engine.tick(&idle());
    }

    assert!(killed, "Bullet should have killed the zombie");
    assert!(!engine.world().contains(zombie));
    assert_eq!(snap.score.zombies_killed, 1);
    assert_eq!(snap.count(EntityKind::Bullet), 0);
}

#[test]
fn test_bullet_leaving_play_area_is_removed() {
    let mut engine = SimulationEngine::new(quiet_config());
    start(&mut engine);

    let snap = engine.tick(&InputFrame {
        cursor: Position::new(0.0, 316.0),
        events: vec![InputEvent::Fire],
        ..Default::default()
    });
    assert_eq!(snap.count(EntityKind::Bullet), 1);

    // 416px at 600px/s is under a second.
    let snap = run_ticks(&mut engine, &idle(), 60);
    assert_eq!(snap.count(EntityKind::Bullet), 0);
}

#[test]
fn test_bullet_expires_after_lifetime() {
    let mut engine = SimulationEngine::new(quiet_config());
    start(&mut engine);
    let bullet = world_setup::spawn_bullet(
        engine.state_mut(),
        &Weapon::new(WeaponKind::Pistol),
        Position::new(100.0, 100.0),
        Velocity::zero(),
    )
    .unwrap();

    run_ticks(&mut engine, &idle(), 119);
    assert!(engine.world().contains(bullet), "Bullet removed before its lifetime");

    run_ticks(&mut engine, &idle(), 6);
    assert!(!engine.world().contains(bullet), "Bullet outlived its lifetime");
}

// ---- Pickups ----

#[test]
fn test_ammunition_pickup_consumed() {
    let mut engine = SimulationEngine::new(quiet_config());
    start(&mut engine);
    world_setup::spawn_pickup(
        engine.state_mut(),
        PickupKind::Ammunition(AMMO_CRATE_AMOUNT),
        Position::new(410.0, 310.0),
    )
    .unwrap();

    let snap = engine.tick(&idle());
    assert_eq!(snap.resources.ammunition, STARTING_AMMUNITION + AMMO_CRATE_AMOUNT);
    assert_eq!(snap.count(EntityKind::Pickup), 0);
    assert_eq!(snap.score.pickups_collected, 1);
}

#[test]
fn test_weapon_pickup_swaps_weapon() {
    let mut engine = SimulationEngine::new(quiet_config());
    start(&mut engine);
    world_setup::spawn_pickup(
        engine.state_mut(),
        PickupKind::Weapon(WeaponKind::Shotgun),
        Position::new(390.0, 290.0),
    )
    .unwrap();

    let snap = engine.tick(&idle());
    assert_eq!(snap.player().unwrap().weapon, Some(WeaponKind::Shotgun));
    assert!(snap.events.contains(&GameEvent::PickupCollected {
        kind: PickupKind::Weapon(WeaponKind::Shotgun)
    }));
}

// ---- Contact damage and game over ----

#[test]
fn test_contact_damage_scales_with_zombies_and_time() {
    let mut engine = SimulationEngine::new(quiet_config());
    start(&mut engine);
    engine.spawn_test_zombie(ZombieTier::Shambler, Position::new(400.0, 300.0));
    engine.spawn_test_zombie(ZombieTier::Runner, Position::new(400.0, 300.0));

    let snap = run_ticks(&mut engine, &idle(), 60);
    let health = snap.player().unwrap().health.unwrap();
    let expected = PLAYER_MAX_HEALTH - ZOMBIE_CONTACT_DPS * 2.0 * 1.0;
    assert!((health - expected).abs() < 1e-9, "health = {health}");
    assert_eq!(snap.mode, GameMode::Playing);
}

#[test]
fn test_game_over_exactly_when_health_depleted() {
    let mut engine = SimulationEngine::new(quiet_config());
    start(&mut engine);
    let player = engine.state_mut().player_entity().unwrap();
    engine.state_mut().world.get::<&mut Health>(player).unwrap().current = 1.0;
    engine.spawn_test_zombie(ZombieTier::Shambler, Position::new(400.0, 300.0));

    let mut ended = false;
    for _ in 0..30 {
        let snap = engine.tick(&idle());
        let health = snap.player().unwrap().health.unwrap();
        if snap.mode == GameMode::GameOver {
            assert!(health <= 0.0);
            assert!(snap.events.contains(&GameEvent::PlayerDowned));
            ended = true;
            break;
        }
        assert!(health > 0.0, "Still playing with health {health}");
    }
    assert!(ended, "Player should have died");

    let tick = engine.time().tick;
    run_ticks(&mut engine, &idle(), 10);
    assert_eq!(engine.time().tick, tick, "Game over must freeze the world");
}

// ---- Crash guard ----

#[test]
fn test_pursuit_fault_crashes_playing_session() {
    let mut engine = SimulationEngine::new(quiet_config());
    start(&mut engine);
    engine.spawn_test_zombie(ZombieTier::Shambler, Position::new(10.0, 10.0));
    let player = engine.state_mut().player_entity().unwrap();
    *engine.state_mut().world.get::<&mut Position>(player).unwrap() = Position::new(f64::NAN, 300.0);

    let snap = engine.tick(&idle());
    assert_eq!(snap.mode, GameMode::Crashed);
    assert!(snap.error_message.starts_with("AI error for zombie"), "{}", snap.error_message);
    assert!(!snap.crash_lines().is_empty());
}

#[test]
fn test_bad_tier_weights_crash_on_start() {
    let mut config = SimConfig::default();
    config.spawn.tier_weights = [0.0, 0.0, 0.0];
    let mut engine = SimulationEngine::new(config);

    let snap = start(&mut engine);
    assert_eq!(snap.mode, GameMode::Crashed);
    assert_eq!(snap.error_message, "Error spawning zombies: invalid tier weights");
    assert_eq!(engine.sessions_started(), 0);
}

#[test]
fn test_quit_survives_fault_in_same_frame() {
    let mut config = SimConfig::default();
    config.spawn.tier_weights = [0.0, 0.0, 0.0];
    let mut engine = SimulationEngine::new(config);

    let snap = engine.tick(&InputFrame::with_events([InputEvent::Start, InputEvent::Quit]));
    assert_eq!(snap.mode, GameMode::Crashed);
    assert!(engine.quit_requested());
}

#[test]
fn test_fault_reaches_crashed_from_any_mode() {
    // Menu
    let mut engine = SimulationEngine::new(quiet_config());
    engine.force_crash("boom");
    assert_eq!(engine.mode(), GameMode::Crashed);

    // Paused
    let mut engine = SimulationEngine::new(quiet_config());
    start(&mut engine);
    engine.tick(&InputFrame::with_events([InputEvent::TogglePause]));
    engine.force_crash("boom");
    assert_eq!(engine.mode(), GameMode::Crashed);

    // GameOver
    let mut engine = SimulationEngine::new(quiet_config());
    start(&mut engine);
    engine.state_mut().mode = GameMode::GameOver;
    engine.force_crash("boom");
    assert_eq!(engine.mode(), GameMode::Crashed);
    assert_eq!(engine.error_message(), "boom");
}

#[test]
fn test_crashed_ignores_everything_but_restart() {
    let mut engine = SimulationEngine::new(quiet_config());
    start(&mut engine);
    engine.force_crash("Critical error");
    let tick = engine.time().tick;

    let snap = engine.tick(&InputFrame {
        keys: MovementKeys {
            up: true,
            ..Default::default()
        },
        cursor: Position::new(0.0, 0.0),
        events: vec![InputEvent::TogglePause, InputEvent::Fire],
    });
    assert_eq!(snap.mode, GameMode::Crashed);
    assert_eq!(snap.tick, tick);
    assert_eq!(snap.count(EntityKind::Bullet), 0);
    assert_eq!(snap.error_message, "Critical error");

    let snap = start(&mut engine);
    assert_eq!(snap.mode, GameMode::Playing);
    assert!(snap.error_message.is_empty());
}

#[test]
fn test_restart_matches_fresh_session() {
    let config = SimConfig {
        spawn: SpawnConfig {
            policy: SpawnPolicy::EdgeTrickle {
                chance: 0.0,
                night_multiplier: NIGHT_SPAWN_MULTIPLIER,
                initial_count: INITIAL_ZOMBIES,
            },
            initial_pickups: 0,
            ..Default::default()
        },
        ..Default::default()
    };
    let mut engine = SimulationEngine::new(config);
    start(&mut engine);

    let busy = InputFrame {
        keys: MovementKeys {
            right: true,
            up: true,
            ..Default::default()
        },
        cursor: Position::new(0.0, 0.0),
        events: vec![InputEvent::Fire],
    };
    run_ticks(&mut engine, &busy, 200);
    engine.force_crash("Critical error");

    let snap = start(&mut engine);
    assert_eq!(snap.mode, GameMode::Playing);
    assert_eq!(snap.tick, 1);
    assert_eq!(snap.day, 1);
    assert_eq!(snap.wave, 1);
    assert_eq!(snap.resources, Resources::default());
    assert_eq!(snap.score, Default::default());
    assert!(snap.error_message.is_empty());
    assert_eq!(snap.count(EntityKind::Bullet), 0);
    assert_eq!(snap.count(EntityKind::Zombie), INITIAL_ZOMBIES as usize);

    let player = snap.player().unwrap();
    assert_eq!(player.position, Position::new(400.0, 300.0));
    assert_eq!(player.health, Some(PLAYER_MAX_HEALTH));
    assert_eq!(player.weapon, Some(WeaponKind::Pistol));
    assert_eq!(engine.sessions_started(), 2);
}

// ---- Spawn director ----

#[test]
fn test_edge_spawns_one_tile_outside() {
    let bounds = PlayBounds::default();
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut seen = [false; 4];

    for _ in 0..1000 {
        let (edge, pos) = spawn_director::edge_position(&mut rng, &bounds);
        match edge {
            Edge::Top => {
                assert_eq!(pos.y, -TILE_SIZE);
                assert!((0.0..=bounds.width).contains(&pos.x));
            }
            Edge::Right => {
                assert_eq!(pos.x, bounds.width + TILE_SIZE);
                assert!((0.0..=bounds.height).contains(&pos.y));
            }
            Edge::Bottom => {
                assert_eq!(pos.y, bounds.height + TILE_SIZE);
                assert!((0.0..=bounds.width).contains(&pos.x));
            }
            Edge::Left => {
                assert_eq!(pos.x, -TILE_SIZE);
                assert!((0.0..=bounds.height).contains(&pos.y));
            }
        }
        assert!(!bounds.contains(&pos));
        seen[edge as usize] = true;
    }
    assert!(seen.iter().all(|s| *s), "All four edges should be used");
}

#[test]
fn test_tier_weights_respected() {
    let mut state = WorldState::new(PlayBounds::default());
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    spawn_director::spawn_zombies(&mut state, &mut rng, &[0.0, 0.0, 1.0], 20).unwrap();

    let tiers: Vec<ZombieTier> = state.world.query::<&Zombie>().iter().map(|(_, z)| z.tier).collect();
    assert_eq!(tiers.len(), 20);
    assert!(tiers.iter().all(|t| *t == ZombieTier::Sprinter));
}

#[test]
fn test_trickle_batches_triple_at_night() {
    let config = SpawnConfig {
        policy: SpawnPolicy::EdgeTrickle {
            chance: 1.0,
            night_multiplier: NIGHT_SPAWN_MULTIPLIER,
            initial_count: 0,
        },
        ..Default::default()
    };
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let mut state = WorldState::new(PlayBounds::default());
    state.clock.minute = 23.0 * 60.0;
    assert_eq!(spawn_director::run(&mut state, &mut rng, &config).unwrap(), 3);

    let mut state = WorldState::new(PlayBounds::default());
    state.clock.minute = 12.0 * 60.0;
    assert_eq!(spawn_director::run(&mut state, &mut rng, &config).unwrap(), 1);
    assert_eq!(spawn_director::live_zombies(&state), 1);
}

#[test]
fn test_unknown_tier_index_is_a_fault() {
    assert_eq!(spawn_director::tier_for_index(2).unwrap(), ZombieTier::Sprinter);
    assert!(matches!(
        spawn_director::tier_for_index(3),
        Err(SimError::UnknownTier(3))
    ));
}

#[test]
fn test_invalid_spawn_chance_is_a_fault() {
    let config = SpawnConfig {
        policy: SpawnPolicy::EdgeTrickle {
            chance: 1.5,
            night_multiplier: NIGHT_SPAWN_MULTIPLIER,
            initial_count: 0,
        },
        ..Default::default()
    };
    let mut state = WorldState::new(PlayBounds::default());
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let err = spawn_director::run(&mut state, &mut rng, &config).unwrap_err();
    assert!(matches!(err, SimError::InvalidSpawnChance(c) if c == 1.5));
}

#[test]
fn test_wave_size_overflow_is_a_fault() {
    assert_eq!(spawn_director::wave_size(5, 3).unwrap(), 15);
    assert!(matches!(
        spawn_director::wave_size(u32::MAX, 2),
        Err(SimError::SpawnCount { wave: 2, .. })
    ));
}

#[test]
fn test_waves_grow_with_index() {
    let config = SimConfig {
        spawn: SpawnConfig {
            policy: SpawnPolicy::waves(),
            initial_pickups: 0,
            ..Default::default()
        },
        ..Default::default()
    };
    let mut engine = SimulationEngine::new(config);
    let snap = start(&mut engine);
    assert_eq!(snap.wave, 1);
    assert_eq!(snap.count(EntityKind::Zombie), WAVE_BASE_RATE as usize);

    let mut last_wave = snap.wave;
    for expected_wave in 2..=4u32 {
        despawn_all_zombies(&mut engine);
        let snap = engine.tick(&idle());
        assert_eq!(snap.wave, expected_wave);
        assert!(snap.wave > last_wave);
        assert_eq!(snap.count(EntityKind::Zombie), (WAVE_BASE_RATE * expected_wave) as usize);
        assert!(snap.events.contains(&GameEvent::WaveStarted {
            wave: expected_wave,
            count: WAVE_BASE_RATE * expected_wave,
        }));
        last_wave = snap.wave;
    }

    // A live zombie holds the wave.
    let snap = run_ticks(&mut engine, &idle(), 5);
    assert_eq!(snap.wave, 4);
}

#[test]
fn test_entity_ids_unique_and_sorted() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    let snap = start(&mut engine);
    let ids: Vec<EntityId> = snap.entities.iter().map(|e| e.id).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(ids, sorted);
}
