//! Collision: projectile-hostile proximity, damage and kills.

use tracing::debug;

use arena_core::components::Hostile;
use arena_core::events::SimEvent;
use arena_core::types::Position;

use crate::store::EntityStore;

/// A hostile whose health reached zero this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KilledHostile {
    pub serial: u32,
    pub position: Position,
    pub elite: bool,
}

/// Resolve every projectile-hostile pair closer than `hit_radius`.
///
/// Hostiles are visited in encounter order. Each projectile is spent on the
/// first hostile it touches; a hostile can absorb several projectiles in one
/// tick until it dies, after which the remaining projectiles fly on.
/// Spent projectiles and dead hostiles are removed in one batch at the end.
pub fn resolve_collisions(
    store: &mut EntityStore,
    hit_radius: f64,
    events: &mut Vec<SimEvent>,
) -> Vec<KilledHostile> {
    let damage = store.player().damage;
    let hostiles = store.hostiles();
    let projectiles: Vec<(hecs::Entity, Position)> = store
        .projectiles()
        .into_iter()
        .map(|(entity, pos, _, _)| (entity, pos))
        .collect();

    let mut spent = vec![false; projectiles.len()];
    let mut health_updates: Vec<(hecs::Entity, i32)> = Vec::new();
    let mut killed: Vec<KilledHostile> = Vec::new();

    for (entity, pos, hostile) in &hostiles {
        let mut health = hostile.health;

        for (index, (_, projectile_pos)) in projectiles.iter().enumerate() {
            if spent[index] || pos.distance_to(projectile_pos) >= hit_radius {
                continue;
            }
            spent[index] = true;
            // Clamp before checking so a kill is reported exactly once.
            health = (health - damage).max(0);

            if health == 0 {
                break;
            }
            events.push(SimEvent::HostileHit {
                serial: hostile.serial,
                damage,
                remaining_health: health,
            });
        }

        if health == hostile.health {
            continue;
        }
        if health == 0 {
            killed.push(KilledHostile {
                serial: hostile.serial,
                position: *pos,
                elite: hostile.elite,
            });
        } else {
            health_updates.push((*entity, health));
        }
    }

    for (entity, health) in health_updates {
        if let Ok(mut hostile) = store.world_mut().get::<&mut Hostile>(entity) {
            hostile.health = health;
        }
    }

    for (index, (entity, _)) in projectiles.iter().enumerate() {
        if spent[index] {
            store.mark_for_removal(*entity);
        }
    }
    for (entity, _, hostile) in &hostiles {
        if killed.iter().any(|k| k.serial == hostile.serial) {
            store.mark_for_removal(*entity);
        }
    }
    store.flush_removals();

    for kill in &killed {
        debug!(serial = kill.serial, elite = kill.elite, "hostile killed");
        events.push(SimEvent::HostileKilled {
            serial: kill.serial,
            position: kill.position,
            elite: kill.elite,
        });
    }

    killed
}
