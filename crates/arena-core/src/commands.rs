//! Player commands sent from the host to the simulation.
//!
//! Commands are queued and applied at the next tick boundary, paused or not.

use serde::{Deserialize, Serialize};

use crate::components::Item;
use crate::enums::*;

/// All discrete player actions. Continuous movement arrives as an `InputVector`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Halt the update phase.
    Pause,
    /// Resume the update phase.
    Resume,
    /// Flip the paused flag (bound to the pause key).
    TogglePause,
    /// Change the cosmetic spell school of future projectiles.
    SetSpell { spell: SpellType },
    /// Put an item into the slot matching its category.
    Equip { item: Item },
    /// Empty a slot.
    Unequip { slot: ItemCategory },
}
