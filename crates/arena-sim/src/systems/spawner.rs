//! Spawn: seeds the initial population and replaces kills.

use std::f64::consts::TAU;

use tracing::debug;

use arena_core::config::{ArenaConfig, ReplenishPolicy, SpawnPolicy};
use arena_core::events::SimEvent;
use arena_core::types::{Position, WorldBounds};

use crate::random::RandomSource;
use crate::store::EntityStore;

/// Pick a spawn point under the given placement policy.
pub fn spawn_position(
    rng: &mut dyn RandomSource,
    policy: SpawnPolicy,
    bounds: WorldBounds,
    around: Position,
) -> Position {
    match policy {
        SpawnPolicy::Annulus {
            min_distance,
            max_distance,
        } => {
            let angle = rng.range(0.0, TAU);
            let distance = rng.range(min_distance, max_distance);
            Position::new(
                around.x + angle.cos() * distance,
                around.y + angle.sin() * distance,
            )
        }
        SpawnPolicy::Uniform => Position::new(
            rng.range(0.0, bounds.width),
            rng.range(0.0, bounds.height),
        ),
    }
}

/// Elite roll. A zero probability never consumes a sample.
pub fn roll_elite(rng: &mut dyn RandomSource, probability: f64) -> bool {
    probability > 0.0 && rng.chance(probability)
}

/// Create one hostile near the player (or anywhere, under the uniform policy).
pub fn spawn_hostile(
    store: &mut EntityStore,
    rng: &mut dyn RandomSource,
    config: &ArenaConfig,
) -> SimEvent {
    let around = store.player().position;
    let position = spawn_position(rng, config.spawn_policy, config.bounds(), around);
    let elite = roll_elite(rng, config.elite_probability);

    let (health, speed) = if elite {
        (
            ((config.hostile_health as f64) * config.elite_health_multiplier)
                .round()
                .max(1.0) as i32,
            config.hostile_speed * config.elite_speed_multiplier,
        )
    } else {
        (config.hostile_health, config.hostile_speed)
    };

    let serial = store.spawn_hostile(position, health, speed, elite);
    debug!(serial, elite, x = position.x, y = position.y, "hostile spawned");
    SimEvent::HostileSpawned {
        serial,
        position,
        elite,
    }
}

/// Spawn the configured starting population.
pub fn seed_population(
    store: &mut EntityStore,
    rng: &mut dyn RandomSource,
    config: &ArenaConfig,
    events: &mut Vec<SimEvent>,
) {
    for _ in 0..config.initial_hostiles {
        events.push(spawn_hostile(store, rng, config));
    }
}

/// React to a kill according to the replenish policy.
///
/// Spawn-on-kill adds exactly one replacement; fixed population adds nothing.
pub fn on_hostile_killed(
    store: &mut EntityStore,
    rng: &mut dyn RandomSource,
    config: &ArenaConfig,
    events: &mut Vec<SimEvent>,
) {
    match config.replenish {
        ReplenishPolicy::SpawnOnKill => events.push(spawn_hostile(store, rng, config)),
        ReplenishPolicy::FixedPopulation => {}
    }
}
