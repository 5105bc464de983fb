//! Factories for the initial simulation state.

use arena_core::components::{AnimationState, Equipment, Player};
use arena_core::config::ArenaConfig;
use arena_core::events::SimEvent;

use crate::random::RandomSource;
use crate::store::EntityStore;
use crate::systems::spawner;

/// Build the player record at the configured start point, full health, no gear.
pub fn make_player(config: &ArenaConfig) -> Player {
    Player {
        position: config.player_start(),
        speed: config.player_speed,
        health: config.player_max_health,
        max_health: config.player_max_health,
        damage: config.player_damage,
        spell: config.starting_spell,
        last_shot_ms: None,
        animation: AnimationState::default(),
        equipment: Equipment::default(),
    }
}

/// Create the store with the player and the seeded hostile population.
pub fn setup_arena(
    config: &ArenaConfig,
    rng: &mut dyn RandomSource,
    events: &mut Vec<SimEvent>,
) -> EntityStore {
    let mut store = EntityStore::new(make_player(config));
    spawner::seed_population(&mut store, rng, config, events);
    store
}
