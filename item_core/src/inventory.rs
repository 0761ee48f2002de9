//! Inventory collaborator and the click-to-pick-up flow

use crate::item::Item;
use crate::types::{EntityId, Vec2};

/// Slot storage the pick-up flow hands items to
pub trait Inventory {
    /// First free slot, if any
    fn open_slot(&self) -> Option<usize>;

    /// Store `item` in `slot`
    fn assign_to(&mut self, item: Item, slot: usize);
}

/// Pick an item up off the ground into the first open slot
///
/// Ownership moves into the inventory on success. When every slot is taken
/// the item is handed back unchanged.
pub fn pick_up<I: Inventory + ?Sized>(
    inventory: &mut I,
    mut item: Item,
    owner: EntityId,
) -> Result<usize, Item> {
    let Some(slot) = inventory.open_slot() else {
        tracing::debug!(item = %item.name, "no open slot");
        return Err(item);
    };

    item.take_by(owner);
    inventory.assign_to(item, slot);
    Ok(slot)
}

/// Fixed-size inventory of optional slots
#[derive(Debug, Clone, Default)]
pub struct SlotInventory {
    slots: Vec<Option<Item>>,
}

impl SlotInventory {
    /// Create an inventory with `capacity` empty slots
    pub fn new(capacity: usize) -> Self {
        SlotInventory {
            slots: vec![None; capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn get(&self, slot: usize) -> Option<&Item> {
        self.slots.get(slot).and_then(|s| s.as_ref())
    }

    /// Remove whatever is in `slot`
    pub fn take(&mut self, slot: usize) -> Option<Item> {
        self.slots.get_mut(slot).and_then(|s| s.take())
    }

    /// Drop the item in `slot` onto the ground
    ///
    /// Undroppable items stay in the slot and `None` is returned.
    pub fn drop_slot(&mut self, slot: usize, position: Vec2) -> Option<Item> {
        let entry = self.slots.get_mut(slot)?;
        if !entry.as_ref()?.is_droppable() {
            return None;
        }
        let mut item = entry.take()?;
        item.drop_at(position);
        Some(item)
    }

    /// Iterate over occupied slots
    pub fn items(&self) -> impl Iterator<Item = (usize, &Item)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|item| (i, item)))
    }
}

impl Inventory for SlotInventory {
    fn open_slot(&self) -> Option<usize> {
        self.slots.iter().position(|s| s.is_none())
    }

    fn assign_to(&mut self, item: Item, slot: usize) {
        if let Some(entry) = self.slots.get_mut(slot) {
            *entry = Some(item);
        }
    }
}
