use arena_sim::core::commands::PlayerCommand;
use arena_sim::core::components::{Item, Projectile};
use arena_sim::core::config::{ArenaConfig, ReplenishPolicy, SpawnPolicy, Variant};
use arena_sim::core::constants::FRAME_MS;
use arena_sim::core::enums::{ItemCategory, ItemColor, SpellType};
use arena_sim::core::events::SimEvent;
use arena_sim::core::input::InputVector;
use arena_sim::core::state::GameStateSnapshot;
use arena_sim::core::types::{Position, Velocity};
use arena_sim::random::{RandomSource, SeededRandom};
use arena_sim::store::EntityStore;
use arena_sim::systems::spawner;
use arena_sim::world_setup::make_player;
use arena_sim::SimulationEngine;

/// A walking pattern that exercises every direction and idle stretches.
fn scripted_input(tick: u64) -> InputVector {
    match (tick / 45) % 6 {
        0 => InputVector {
            up: true,
            ..Default::default()
        },
        1 => InputVector {
            up: true,
            right: true,
            ..Default::default()
        },
        2 => InputVector::IDLE,
        3 => InputVector {
            down: true,
            left: true,
            ..Default::default()
        },
        4 => InputVector {
            left: true,
            ..Default::default()
        },
        _ => InputVector::IDLE,
    }
}

fn run_json(config: ArenaConfig, ticks: u64) -> Vec<String> {
    let mut engine = SimulationEngine::new(config);
    (0..ticks)
        .map(|t| {
            let snapshot = engine.tick(FRAME_MS, scripted_input(t));
            serde_json::to_string(&snapshot).unwrap()
        })
        .collect()
}

fn count_fired(snapshot: &GameStateSnapshot) -> usize {
    snapshot
        .events
        .iter()
        .filter(|e| matches!(e, SimEvent::ProjectileFired { .. }))
        .count()
}

/// One hit kills, so the population turns over quickly.
fn fragile(replenish: ReplenishPolicy) -> ArenaConfig {
    ArenaConfig {
        hostile_health: 25,
        replenish,
        ..Default::default()
    }
}

// --- Determinism ---

#[test]
fn same_seed_same_run() {
    let a = run_json(ArenaConfig::preset(Variant::Treasure), 900);
    let b = run_json(ArenaConfig::preset(Variant::Treasure), 900);
    assert_eq!(a, b);
}

#[test]
fn different_seed_different_run() {
    let a = run_json(ArenaConfig::default(), 1);
    let b = run_json(
        ArenaConfig {
            seed: 43,
            ..Default::default()
        },
        1,
    );
    assert_ne!(a, b);
}

#[test]
fn first_tick_reports_initial_spawns() {
    let mut engine = SimulationEngine::new(ArenaConfig::default());
    assert_eq!(engine.snapshot().hostiles.len(), 6);

    let snapshot = engine.tick(FRAME_MS, InputVector::IDLE);
    let spawned = snapshot
        .events
        .iter()
        .filter(|e| matches!(e, SimEvent::HostileSpawned { .. }))
        .count();
    assert_eq!(spawned, 6);

    let snapshot = engine.tick(FRAME_MS, InputVector::IDLE);
    assert!(!snapshot
        .events
        .iter()
        .any(|e| matches!(e, SimEvent::HostileSpawned { .. })));
}

// --- Population ---

#[test]
fn spawn_on_kill_keeps_population_constant() {
    let mut engine = SimulationEngine::new(fragile(ReplenishPolicy::SpawnOnKill));
    for _ in 0..3000 {
        let snapshot = engine.tick(FRAME_MS, InputVector::IDLE);
        assert_eq!(snapshot.hostiles.len(), 6);
    }
    assert!(engine.score().kills > 0, "auto-fire should have scored kills");
}

#[test]
fn fixed_population_only_shrinks() {
    let mut engine = SimulationEngine::new(fragile(ReplenishPolicy::FixedPopulation));
    let mut previous = engine.snapshot().hostiles.len();
    for _ in 0..3000 {
        let snapshot = engine.tick(FRAME_MS, InputVector::IDLE);
        assert!(snapshot.hostiles.len() <= previous);
        assert_eq!(
            snapshot.hostiles.len() as u32 + snapshot.score.kills,
            6,
            "every missing hostile is a kill"
        );
        previous = snapshot.hostiles.len();
    }
    assert!(previous < 6);
}

#[test]
fn uniform_policy_spawns_inside_world() {
    let config = ArenaConfig {
        spawn_policy: SpawnPolicy::Uniform,
        initial_hostiles: 200,
        ..Default::default()
    };
    let bounds = config.bounds();
    let engine = SimulationEngine::new(config);
    for hostile in &engine.snapshot().hostiles {
        assert!(bounds.contains(&hostile.position));
    }
}

#[test]
fn annulus_policy_spawns_around_player() {
    let engine = SimulationEngine::new(ArenaConfig {
        initial_hostiles: 200,
        ..Default::default()
    });
    let player = engine.snapshot().player.position;
    for hostile in &engine.snapshot().hostiles {
        let d = hostile.position.distance_to(&player);
        assert!(d >= 300.0 - 1e-9 && d < 500.0 + 1e-9, "distance {d}");
    }
}

// --- Elite rolls ---

#[test]
fn elite_fraction_matches_probability() {
    let mut rng = SeededRandom::new(2024);
    let rolls = 100_000;
    let elites = (0..rolls)
        .filter(|_| spawner::roll_elite(&mut rng, 0.15))
        .count();
    let fraction = elites as f64 / rolls as f64;
    assert!((fraction - 0.15).abs() < 0.01, "fraction {fraction}");
}

#[test]
fn elite_fraction_of_spawned_hostiles() {
    let config = ArenaConfig {
        elite_probability: 0.15,
        spawn_policy: SpawnPolicy::Uniform,
        ..Default::default()
    };
    let mut store = EntityStore::new(make_player(&config));
    let mut rng = SeededRandom::new(7);
    for _ in 0..10_000 {
        spawner::spawn_hostile(&mut store, &mut rng, &config);
    }
    let hostiles = store.hostiles();
    let elites = hostiles.iter().filter(|(_, _, h)| h.elite).count();
    let fraction = elites as f64 / hostiles.len() as f64;
    assert!((fraction - 0.15).abs() < 0.01, "fraction {fraction}");

    for (_, _, hostile) in &hostiles {
        let expected = if hostile.elite { 200 } else { 100 };
        assert_eq!(hostile.max_health, expected);
    }
}

#[test]
fn zero_elite_probability_never_rolls_elite() {
    let mut rng = SeededRandom::new(1);
    for _ in 0..10_000 {
        assert!(!spawner::roll_elite(&mut rng, 0.0));
    }
    let mut untouched = SeededRandom::new(1);
    assert_eq!(rng.next_f64(), untouched.next_f64());
}

// --- Invariants over long runs ---

#[test]
fn health_stays_in_bounds() {
    let mut engine = SimulationEngine::new(ArenaConfig::preset(Variant::Horde));
    for t in 0..4000 {
        let snapshot = engine.tick(FRAME_MS, scripted_input(t));
        for hostile in &snapshot.hostiles {
            assert!(hostile.health > 0, "dead hostile left in the world");
            assert!(hostile.health <= hostile.max_health);
        }
        for event in &snapshot.events {
            if let SimEvent::HostileHit {
                remaining_health, ..
            } = event
            {
                assert!(*remaining_health > 0);
            }
        }
        assert_eq!(snapshot.player.health, snapshot.player.max_health);
    }
}

#[test]
fn player_stays_inside_world() {
    let config = ArenaConfig::default();
    let bounds = config.bounds();
    let mut engine = SimulationEngine::new(config);
    let hold_up_left = InputVector {
        up: true,
        left: true,
        ..Default::default()
    };
    for _ in 0..1000 {
        let snapshot = engine.tick(FRAME_MS, hold_up_left);
        assert!(bounds.contains(&snapshot.player.position));
    }
    assert_eq!(engine.snapshot().player.position, Position::new(0.0, 0.0));
}

#[test]
fn camera_centres_on_player() {
    let mut engine = SimulationEngine::new(ArenaConfig::default());
    let right = InputVector {
        right: true,
        ..Default::default()
    };
    let snapshot = engine.tick(FRAME_MS, right);
    assert_eq!(snapshot.player.position, Position::new(2504.0, 2500.0));
    assert_eq!(snapshot.camera.x, 2004.0);
    assert_eq!(snapshot.camera.y, 2200.0);
    assert_eq!(snapshot.camera.width, 1000.0);
    assert_eq!(snapshot.camera.height, 600.0);
}

// --- Auto-fire through the engine ---

#[test]
fn cooldown_follows_frame_time() {
    let mut engine = SimulationEngine::new(ArenaConfig::default());
    let shots: usize = (0..10)
        .map(|_| count_fired(&engine.tick(100.0, InputVector::IDLE)))
        .sum();
    assert_eq!(shots, 2);

    let mut engine = SimulationEngine::new(ArenaConfig::default());
    let shots: usize = (0..10)
        .map(|_| count_fired(&engine.tick(600.0, InputVector::IDLE)))
        .sum();
    assert_eq!(shots, 10);
}

#[test]
fn no_hostiles_no_projectiles() {
    let mut engine = SimulationEngine::new(ArenaConfig {
        initial_hostiles: 0,
        ..Default::default()
    });
    for _ in 0..120 {
        let snapshot = engine.tick(FRAME_MS, InputVector::IDLE);
        assert!(snapshot.projectiles.is_empty());
    }
    assert_eq!(engine.score().shots_fired, 0);
}

#[test]
fn hostile_killed_this_tick_is_not_targeted() {
    let mut engine = SimulationEngine::new(ArenaConfig {
        initial_hostiles: 0,
        replenish: ReplenishPolicy::FixedPopulation,
        ..Default::default()
    });
    let store = engine.store_mut();
    let near_at = Position::new(2500.0, 2480.0);
    let near = store.spawn_hostile(near_at, 25, 1.5, false);
    let far = store.spawn_hostile(Position::new(2500.0, 2900.0), 100, 1.5, false);
    store.spawn_projectile(
        near_at,
        Velocity::default(),
        Projectile {
            life: 120,
            spell: SpellType::Arcane,
        },
    );

    let snapshot = engine.tick(FRAME_MS, InputVector::IDLE);

    assert!(snapshot.events.iter().any(|e| matches!(
        e,
        SimEvent::HostileKilled { serial, .. } if *serial == near
    )));
    let targets: Vec<u32> = snapshot
        .events
        .iter()
        .filter_map(|e| match e {
            SimEvent::ProjectileFired { target_serial, .. } => Some(*target_serial),
            _ => None,
        })
        .collect();
    assert_eq!(targets, vec![far]);
}

#[test]
fn stray_projectile_expires() {
    let mut engine = SimulationEngine::new(ArenaConfig {
        initial_hostiles: 1,
        replenish: ReplenishPolicy::FixedPopulation,
        ..Default::default()
    });
    let first = engine.tick(FRAME_MS, InputVector::IDLE);
    assert_eq!(count_fired(&first), 1);

    // Remove the target so nothing can absorb the bolt.
    let target = engine.store().hostiles()[0].0;
    engine.store_mut().mark_for_removal(target);
    engine.store_mut().flush_removals();

    let mut life_seen = Vec::new();
    for _ in 0..118 {
        let snapshot = engine.tick(FRAME_MS, InputVector::IDLE);
        life_seen.push(snapshot.projectiles.len());
    }
    assert!(life_seen.iter().all(|&n| n == 1));
    let last = engine.tick(FRAME_MS, InputVector::IDLE);
    assert!(last.projectiles.is_empty());
}

// --- Pause and commands ---

#[test]
fn paused_ticks_change_nothing() {
    let mut engine = SimulationEngine::new(ArenaConfig::default());
    for t in 0..100 {
        engine.tick(FRAME_MS, scripted_input(t));
    }

    engine.queue_command(PlayerCommand::Pause);
    let frozen = serde_json::to_string(&engine.tick(FRAME_MS, scripted_input(0))).unwrap();
    assert!(engine.paused());

    for t in 0..300 {
        let snapshot = engine.tick(FRAME_MS, scripted_input(t));
        assert_eq!(serde_json::to_string(&snapshot).unwrap(), frozen);
    }

    engine.queue_command(PlayerCommand::Resume);
    let resumed = engine.tick(FRAME_MS, scripted_input(0));
    assert!(!resumed.paused);
    assert_eq!(resumed.time.tick, 101);
}

#[test]
fn toggle_pause_flips_state() {
    let mut engine = SimulationEngine::new(ArenaConfig::default());
    engine.queue_command(PlayerCommand::TogglePause);
    assert!(engine.tick(FRAME_MS, InputVector::IDLE).paused);
    engine.queue_command(PlayerCommand::TogglePause);
    assert!(!engine.tick(FRAME_MS, InputVector::IDLE).paused);
}

#[test]
fn pause_stops_cooldown_clock() {
    let mut engine = SimulationEngine::new(ArenaConfig::default());
    assert_eq!(count_fired(&engine.tick(100.0, InputVector::IDLE)), 1);

    engine.queue_command(PlayerCommand::Pause);
    for _ in 0..20 {
        engine.tick(100.0, InputVector::IDLE);
    }
    engine.queue_command(PlayerCommand::Resume);
    assert_eq!(
        count_fired(&engine.tick(100.0, InputVector::IDLE)),
        0,
        "paused frames must not count toward the cooldown"
    );
}

#[test]
fn set_spell_changes_projectiles() {
    let mut engine = SimulationEngine::new(ArenaConfig::default());
    engine.queue_command(PlayerCommand::SetSpell {
        spell: SpellType::Fire,
    });
    let snapshot = engine.tick(FRAME_MS, InputVector::IDLE);
    assert_eq!(snapshot.player.spell, SpellType::Fire);
    let fired: Vec<SpellType> = snapshot
        .events
        .iter()
        .filter_map(|e| match e {
            SimEvent::ProjectileFired { spell, .. } => Some(*spell),
            _ => None,
        })
        .collect();
    assert_eq!(fired, vec![SpellType::Fire]);
    assert!(snapshot
        .projectiles
        .iter()
        .all(|p| p.spell == SpellType::Fire));
}

#[test]
fn equipment_commands_update_snapshot() {
    let mut engine = SimulationEngine::new(ArenaConfig::default());
    let crown = Item {
        category: ItemCategory::Helmet,
        color: ItemColor::Gold,
    };
    let staff = Item {
        category: ItemCategory::Staff,
        color: ItemColor::Violet,
    };
    engine.queue_commands([
        PlayerCommand::Equip { item: crown },
        PlayerCommand::Equip { item: staff },
    ]);
    let snapshot = engine.tick(FRAME_MS, InputVector::IDLE);
    assert_eq!(snapshot.equipment.helmet, Some(crown));
    assert_eq!(snapshot.equipment.staff, Some(staff));
    assert_eq!(snapshot.equipment.ring, None);

    engine.queue_command(PlayerCommand::Unequip {
        slot: ItemCategory::Helmet,
    });
    let snapshot = engine.tick(FRAME_MS, InputVector::IDLE);
    assert_eq!(snapshot.equipment.helmet, None);
    assert_eq!(snapshot.equipment.staff, Some(staff));
}

#[test]
fn player_commands_wait_for_resume() {
    let mut engine = SimulationEngine::new(ArenaConfig::default());
    engine.queue_command(PlayerCommand::Pause);
    let frozen = serde_json::to_string(&engine.tick(FRAME_MS, InputVector::IDLE)).unwrap();

    let ring = Item {
        category: ItemCategory::Ring,
        color: ItemColor::Gold,
    };
    engine.queue_commands([
        PlayerCommand::Equip { item: ring },
        PlayerCommand::SetSpell {
            spell: SpellType::Lightning,
        },
    ]);
    for _ in 0..3 {
        let snapshot = engine.tick(FRAME_MS, InputVector::IDLE);
        assert_eq!(serde_json::to_string(&snapshot).unwrap(), frozen);
        assert_eq!(snapshot.equipment.ring, None);
        assert_eq!(snapshot.player.spell, SpellType::Arcane);
    }

    engine.queue_command(PlayerCommand::Resume);
    let snapshot = engine.tick(FRAME_MS, InputVector::IDLE);
    assert!(!snapshot.paused);
    assert_eq!(snapshot.equipment.ring, Some(ring));
    assert_eq!(snapshot.player.spell, SpellType::Lightning);
}

#[test]
fn command_before_pause_still_applies() {
    let mut engine = SimulationEngine::new(ArenaConfig::default());
    engine.queue_commands([
        PlayerCommand::SetSpell {
            spell: SpellType::Fire,
        },
        PlayerCommand::Pause,
        PlayerCommand::SetSpell {
            spell: SpellType::Lightning,
        },
    ]);
    let snapshot = engine.tick(FRAME_MS, InputVector::IDLE);
    assert!(snapshot.paused);
    assert_eq!(snapshot.player.spell, SpellType::Fire);
    assert_eq!(snapshot.time.tick, 0);

    engine.queue_command(PlayerCommand::TogglePause);
    let snapshot = engine.tick(FRAME_MS, InputVector::IDLE);
    assert_eq!(snapshot.player.spell, SpellType::Lightning);
}

// --- Loot ---

#[test]
fn treasure_variant_accumulates_drops() {
    let mut engine = SimulationEngine::new(ArenaConfig::preset(Variant::Treasure));
    for _ in 0..6000 {
        engine.tick(FRAME_MS, InputVector::IDLE);
    }
    let snapshot = engine.snapshot();
    assert!(snapshot.score.kills > 0);
    assert!(snapshot.score.drops_created > 0);
    assert_eq!(snapshot.drops.len() as u32, snapshot.score.drops_created);
    assert!(snapshot
        .drops
        .iter()
        .all(|d| d.item.category != ItemCategory::Staff));
}

#[test]
fn classic_variant_never_drops_loot() {
    let mut engine = SimulationEngine::new(fragile(ReplenishPolicy::SpawnOnKill));
    for _ in 0..3000 {
        engine.tick(FRAME_MS, InputVector::IDLE);
    }
    assert!(engine.score().kills > 0);
    assert!(engine.snapshot().drops.is_empty());
}

// --- Config errors ---

#[test]
fn try_new_rejects_invalid_config() {
    let bad = ArenaConfig {
        loot_probability: 1.5,
        ..Default::default()
    };
    assert!(SimulationEngine::try_new(bad).is_err());
    assert!(SimulationEngine::try_new(ArenaConfig::preset(Variant::Horde)).is_ok());
}
