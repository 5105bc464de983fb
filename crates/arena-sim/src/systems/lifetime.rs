//! Lifetime system: flies projectiles and removes the ones out of life.
//!
//! Drops have no lifetime; they stay until something outside the core
//! removes them.

use arena_core::components::Projectile;
use arena_core::types::{Position, Velocity};

use crate::store::EntityStore;

/// Advance every projectile one tick and decrement its life.
/// A projectile is removed on the tick its life reaches zero.
/// Returns the number of projectiles removed.
pub fn run(store: &mut EntityStore) -> usize {
    let mut expired = Vec::new();

    for (entity, (pos, vel, projectile)) in store
        .world_mut()
        .query_mut::<(&mut Position, &Velocity, &mut Projectile)>()
    {
        pos.advance(vel);
        projectile.life = projectile.life.saturating_sub(1);
        if projectile.life == 0 {
            expired.push(entity);
        }
    }

    for entity in expired {
        store.mark_for_removal(entity);
    }
    store.flush_removals()
}
