//! Auto-fire: shoot the nearest hostile once the cooldown has elapsed.

use tracing::debug;

use arena_core::components::Projectile;
use arena_core::config::ArenaConfig;
use arena_core::events::SimEvent;
use arena_steering::aim::{aim_velocity, nearest};

use crate::store::EntityStore;

/// Fire one projectile at the nearest hostile if allowed.
///
/// No-op when there are no hostiles, when `now_ms` is still inside the
/// cooldown window, or when the target sits exactly on the player.
pub fn try_auto_fire(
    store: &mut EntityStore,
    now_ms: f64,
    config: &ArenaConfig,
) -> Option<SimEvent> {
    let hostiles = store.hostiles();
    if hostiles.is_empty() {
        return None;
    }

    let (origin, spell, last_shot_ms) = {
        let player = store.player();
        (player.position, player.spell, player.last_shot_ms)
    };

    if let Some(last) = last_shot_ms {
        if now_ms - last < config.shot_cooldown_ms {
            return None;
        }
    }

    let (index, distance) = nearest(origin, hostiles.iter().map(|(_, pos, _)| *pos))?;
    let (_, target_pos, target) = &hostiles[index];
    let velocity = aim_velocity(origin, *target_pos, config.projectile_speed)?;

    store.spawn_projectile(
        origin,
        velocity,
        Projectile {
            life: config.projectile_life,
            spell,
        },
    );
    store.player_mut().last_shot_ms = Some(now_ms);

    debug!(target = target.serial, distance, ?spell, "auto-fire");
    Some(SimEvent::ProjectileFired {
        target_serial: target.serial,
        spell,
    })
}
