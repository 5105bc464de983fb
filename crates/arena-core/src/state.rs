//! Game state snapshot: the complete visible state handed to the renderer each tick.

use serde::{Deserialize, Serialize};

use crate::components::{AnimationState, Equipment, Item};
use crate::enums::SpellType;
use crate::events::SimEvent;
use crate::types::{Position, SimTime, Velocity};

/// Complete read-only game state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub paused: bool,
    pub player: PlayerView,
    pub camera: CameraView,
    pub hostiles: Vec<HostileView>,
    pub projectiles: Vec<ProjectileView>,
    pub drops: Vec<DropView>,
    pub equipment: Equipment,
    pub events: Vec<SimEvent>,
    pub score: ScoreView,
}

/// Player state for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    pub health: i32,
    pub max_health: i32,
    pub spell: SpellType,
    pub animation: AnimationState,
    /// Whether directional input moved the player this tick.
    pub moving: bool,
}

/// Viewport rectangle centred on the player. The renderer draws relative to it.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CameraView {
    /// Top-left corner in world units.
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostileView {
    pub serial: u32,
    pub position: Position,
    pub health: i32,
    pub max_health: i32,
    pub elite: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Position,
    pub velocity: Velocity,
    pub life: u32,
    pub spell: SpellType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DropView {
    pub position: Position,
    pub item: Item,
}

/// Running tallies for the HUD.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreView {
    pub kills: u32,
    pub elite_kills: u32,
    pub shots_fired: u32,
    pub drops_created: u32,
}
