//! Events emitted by the simulation for UI feedback.

use serde::{Deserialize, Serialize};

use crate::components::Item;
use crate::enums::SpellType;
use crate::types::Position;

/// Something that happened during a tick. Drained into each snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// Auto-fire released a projectile toward a hostile.
    ProjectileFired { target_serial: u32, spell: SpellType },
    /// A projectile struck a hostile that survived.
    HostileHit {
        serial: u32,
        damage: i32,
        remaining_health: i32,
    },
    /// A hostile's health reached zero.
    HostileKilled {
        serial: u32,
        position: Position,
        elite: bool,
    },
    /// A hostile entered the world.
    HostileSpawned {
        serial: u32,
        position: Position,
        elite: bool,
    },
    /// Loot fell at a kill position.
    LootDropped { position: Position, item: Item },
}
