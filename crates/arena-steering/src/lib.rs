//! Steering and aiming math for ARENA.
//!
//! Pure functions over plain positions: chase steering for hostiles,
//! movement integration for the player, and nearest-target selection and
//! aiming for auto-fire. No ECS dependency; operates on plain data.

pub mod aim;
pub mod chase;

pub use arena_core as core;
