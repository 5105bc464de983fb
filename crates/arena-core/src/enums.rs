//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Spell school of the player. Only selects projectile visuals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpellType {
    #[default]
    Arcane,
    Fire,
    Lightning,
}

/// Item category, doubling as the equipment slot the item occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Helmet,
    Chest,
    Staff,
    Ring,
}

impl ItemCategory {
    /// Categories hostiles can drop. Staves are never dropped.
    pub const LOOT: [ItemCategory; 3] = [
        ItemCategory::Helmet,
        ItemCategory::Chest,
        ItemCategory::Ring,
    ];
}

/// Cosmetic item tint, picked independently of the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemColor {
    Crimson,
    Azure,
    Emerald,
    Gold,
    Violet,
}

impl ItemColor {
    /// The fixed loot palette.
    pub const PALETTE: [ItemColor; 5] = [
        ItemColor::Crimson,
        ItemColor::Azure,
        ItemColor::Emerald,
        ItemColor::Gold,
        ItemColor::Violet,
    ];
}
