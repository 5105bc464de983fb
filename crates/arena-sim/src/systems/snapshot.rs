//! Snapshot system: reads the entity store and builds a complete GameStateSnapshot.
//!
//! This system is read-only; it never modifies the store.

use arena_core::config::ArenaConfig;
use arena_core::events::SimEvent;
use arena_core::state::*;
use arena_core::types::{Position, SimTime};

use crate::store::EntityStore;

/// Per-tick engine flags that are not part of the store.
pub struct FrameInfo {
    pub time: SimTime,
    pub paused: bool,
    pub moving: bool,
}

/// Build a complete GameStateSnapshot from the current store state.
pub fn build_snapshot(
    store: &EntityStore,
    frame: &FrameInfo,
    events: Vec<SimEvent>,
    score: &ScoreView,
    config: &ArenaConfig,
) -> GameStateSnapshot {
    let player = store.player();

    GameStateSnapshot {
        time: frame.time,
        paused: frame.paused,
        player: PlayerView {
            position: player.position,
            health: player.health,
            max_health: player.max_health,
            spell: player.spell,
            animation: player.animation,
            moving: frame.moving,
        },
        camera: build_camera(&player.position, config),
        hostiles: build_hostiles(store),
        projectiles: build_projectiles(store),
        drops: build_drops(store),
        equipment: player.equipment,
        events,
        score: score.clone(),
    }
}

/// Viewport centred on the player. Not clamped to the world.
fn build_camera(center: &Position, config: &ArenaConfig) -> CameraView {
    CameraView {
        x: center.x - config.viewport_width / 2.0,
        y: center.y - config.viewport_height / 2.0,
        width: config.viewport_width,
        height: config.viewport_height,
    }
}

fn build_hostiles(store: &EntityStore) -> Vec<HostileView> {
    store
        .hostiles()
        .into_iter()
        .map(|(_, position, hostile)| HostileView {
            serial: hostile.serial,
            position,
            health: hostile.health,
            max_health: hostile.max_health,
            elite: hostile.elite,
        })
        .collect()
}

fn build_projectiles(store: &EntityStore) -> Vec<ProjectileView> {
    store
        .projectiles()
        .into_iter()
        .map(|(_, position, velocity, projectile)| ProjectileView {
            position,
            velocity,
            life: projectile.life,
            spell: projectile.spell,
        })
        .collect()
}

fn build_drops(store: &EntityStore) -> Vec<DropView> {
    store
        .drops()
        .into_iter()
        .map(|(position, drop)| DropView {
            position,
            item: drop.item,
        })
        .collect()
}
