//! Entity records.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Position;

/// Autonomous enemy that chases the player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hostile {
    /// Spawn sequence number; defines encounter order for tie-breaks.
    pub serial: u32,
    /// Current health, never below zero.
    pub health: i32,
    /// Health at spawn (after the elite multiplier).
    pub max_health: i32,
    /// Chase speed (units per tick).
    pub speed: f64,
    /// Rolled once at spawn.
    pub elite: bool,
}

/// Auto-fired spell bolt. Travels with its `Velocity` component.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    /// Remaining ticks before automatic removal.
    pub life: u32,
    /// Cosmetic tag inherited from the caster.
    pub spell: SpellType,
}

/// Equipment payload. Carries no stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub category: ItemCategory,
    pub color: ItemColor,
}

/// Item lying in the world after a kill.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LootDrop {
    pub item: Item,
}

/// One optional item per slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    pub helmet: Option<Item>,
    pub chest: Option<Item>,
    pub staff: Option<Item>,
    pub ring: Option<Item>,
}

/// Walk-cycle bookkeeping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationState {
    /// Current walk frame.
    pub frame: u32,
    /// Moving ticks since the last frame change.
    pub tick: u32,
}

/// The single controllable entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub position: Position,
    /// Units per tick, per axis.
    pub speed: f64,
    pub health: i32,
    pub max_health: i32,
    pub damage: i32,
    pub spell: SpellType,
    /// Clock reading of the last auto-fired shot; `None` before the first.
    pub last_shot_ms: Option<f64>,
    pub animation: AnimationState,
    pub equipment: Equipment,
}
