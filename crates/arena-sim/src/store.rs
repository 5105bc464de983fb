//! Entity store: the player record plus the hostile, projectile and drop
//! collections held in a hecs world.
//!
//! Systems never despawn while a query is live. They mark entities with
//! `mark_for_removal` and the store applies the whole batch in `flush_removals`.

use hecs::{Entity, World};

use arena_core::components::{Hostile, Item, LootDrop, Player, Projectile};
use arena_core::types::{Position, Velocity};

pub struct EntityStore {
    world: World,
    player: Player,
    next_serial: u32,
    despawn_buffer: Vec<Entity>,
}

impl EntityStore {
    pub fn new(player: Player) -> Self {
        Self {
            world: World::new(),
            player,
            next_serial: 0,
            despawn_buffer: Vec::new(),
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Add a hostile at full health. Returns its serial.
    pub fn spawn_hostile(&mut self, position: Position, health: i32, speed: f64, elite: bool) -> u32 {
        let serial = self.next_serial;
        self.next_serial += 1;
        self.world.spawn((
            position,
            Hostile {
                serial,
                health,
                max_health: health,
                speed,
                elite,
            },
        ));
        serial
    }

    pub fn spawn_projectile(
        &mut self,
        position: Position,
        velocity: Velocity,
        projectile: Projectile,
    ) -> Entity {
        self.world.spawn((position, velocity, projectile))
    }

    pub fn spawn_drop(&mut self, position: Position, item: Item) -> Entity {
        self.world.spawn((position, LootDrop { item }))
    }

    /// Hostiles in encounter (spawn) order.
    pub fn hostiles(&self) -> Vec<(Entity, Position, Hostile)> {
        let mut hostiles: Vec<(Entity, Position, Hostile)> = self
            .world
            .query::<(&Position, &Hostile)>()
            .iter()
            .map(|(entity, (pos, hostile))| (entity, *pos, hostile.clone()))
            .collect();
        hostiles.sort_by_key(|(_, _, h)| h.serial);
        hostiles
    }

    pub fn projectiles(&self) -> Vec<(Entity, Position, Velocity, Projectile)> {
        self.world
            .query::<(&Position, &Velocity, &Projectile)>()
            .iter()
            .map(|(entity, (pos, vel, projectile))| (entity, *pos, *vel, *projectile))
            .collect()
    }

    pub fn drops(&self) -> Vec<(Position, LootDrop)> {
        self.world
            .query::<(&Position, &LootDrop)>()
            .iter()
            .map(|(_, (pos, drop))| (*pos, *drop))
            .collect()
    }

    pub fn hostile_count(&self) -> usize {
        self.world.query::<&Hostile>().iter().count()
    }

    pub fn projectile_count(&self) -> usize {
        self.world.query::<&Projectile>().iter().count()
    }

    pub fn drop_count(&self) -> usize {
        self.world.query::<&LootDrop>().iter().count()
    }

    /// Queue an entity for the next batched removal.
    pub fn mark_for_removal(&mut self, entity: Entity) {
        self.despawn_buffer.push(entity);
    }

    /// Despawn every queued entity. Duplicates and stale handles are ignored.
    /// Returns how many entities were actually removed.
    pub fn flush_removals(&mut self) -> usize {
        let mut removed = 0;
        for entity in self.despawn_buffer.drain(..) {
            if self.world.despawn(entity).is_ok() {
                removed += 1;
            }
        }
        removed
    }
}
