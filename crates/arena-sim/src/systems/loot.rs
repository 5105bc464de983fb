//! Loot: random drops at kill positions.

use tracing::debug;

use arena_core::components::Item;
use arena_core::config::ArenaConfig;
use arena_core::enums::{ItemCategory, ItemColor};
use arena_core::events::SimEvent;
use arena_core::types::Position;

use crate::random::RandomSource;
use crate::store::EntityStore;

/// Roll a drop's contents. Category and color are drawn independently.
pub fn roll_item(rng: &mut dyn RandomSource) -> Item {
    let category = ItemCategory::LOOT[rng.index(ItemCategory::LOOT.len())];
    let color = ItemColor::PALETTE[rng.index(ItemColor::PALETTE.len())];
    Item { category, color }
}

/// Maybe leave an item where a hostile died.
pub fn on_hostile_killed(
    store: &mut EntityStore,
    rng: &mut dyn RandomSource,
    config: &ArenaConfig,
    position: Position,
    events: &mut Vec<SimEvent>,
) -> Option<Item> {
    if config.loot_probability <= 0.0 || !rng.chance(config.loot_probability) {
        return None;
    }

    let item = roll_item(rng);
    store.spawn_drop(position, item);
    debug!(?item, x = position.x, y = position.y, "loot dropped");
    events.push(SimEvent::LootDropped { position, item });
    Some(item)
}
