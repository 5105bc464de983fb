//! Systems that operate on the entity store each tick.
//!
//! Systems are free functions over `&mut EntityStore` (or `&EntityStore` for
//! read-only work). They do not own state; all state lives in the store.

pub mod collision;
pub mod equipment;
pub mod lifetime;
pub mod loot;
pub mod movement;
pub mod snapshot;
pub mod spawner;
pub mod targeting;
