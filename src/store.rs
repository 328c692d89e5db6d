//! In-memory auction store
//!
//! Owns every [`Item`] of a run, keyed by item number. Iteration follows
//! insertion order, which is the order items are shown, bid on and settled.
use crate::auction::{Item, ItemNumber};
use indexmap::IndexMap;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("An item with number {0} already exists. Please enter a different number.")]
    DuplicateItem(ItemNumber),
}

#[derive(Clone, Debug, Default)]
pub struct AuctionStore {
    items: IndexMap<ItemNumber, Item>,
}

impl AuctionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, number: ItemNumber) -> bool {
        self.items.contains_key(&number)
    }

    /// Add a new item; an existing item is never replaced
    pub fn insert(&mut self, item: Item) -> Result<(), StoreError> {
        if self.contains(item.number()) {
            return Err(StoreError::DuplicateItem(item.number()));
        }
        self.items.insert(item.number(), item);
        Ok(())
    }

    #[cfg(test)]
    pub fn get(&self, number: ItemNumber) -> Option<&Item> {
        self.items.get(&number)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Item> {
        self.items.values_mut()
    }
}
