//! Equipment bookkeeping.
//!
//! Equipped items are display data only. Nothing here reads or changes
//! damage, health or speed, and drops are never picked up automatically.

use arena_core::components::{Equipment, Item};
use arena_core::enums::ItemCategory;

/// Put `item` into the slot matching its category. Returns the item it replaced.
pub fn equip(equipment: &mut Equipment, item: Item) -> Option<Item> {
    slot_mut(equipment, item.category).replace(item)
}

/// Empty a slot. Returns what was in it.
pub fn unequip(equipment: &mut Equipment, slot: ItemCategory) -> Option<Item> {
    slot_mut(equipment, slot).take()
}

pub fn equipped(equipment: &Equipment, slot: ItemCategory) -> Option<Item> {
    match slot {
        ItemCategory::Helmet => equipment.helmet,
        ItemCategory::Chest => equipment.chest,
        ItemCategory::Staff => equipment.staff,
        ItemCategory::Ring => equipment.ring,
    }
}

fn slot_mut(equipment: &mut Equipment, slot: ItemCategory) -> &mut Option<Item> {
    match slot {
        ItemCategory::Helmet => &mut equipment.helmet,
        ItemCategory::Chest => &mut equipment.chest,
        ItemCategory::Staff => &mut equipment.staff,
        ItemCategory::Ring => &mut equipment.ring,
    }
}
