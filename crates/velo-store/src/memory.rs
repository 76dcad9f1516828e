//! In-memory item store.
//!
//! [`InMemoryItemStore`] keeps items in a `Vec` (insertion order, used for
//! listing) plus a `HashMap` from id to position (point lookups), both behind
//! a single `RwLock`. Data is lost when the store is dropped.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use tracing::{debug, warn};
use velo_types::{Item, ItemId, ItemPatch, NewItem};

use crate::error::{StoreError, StoreResult};
use crate::traits::ItemStore;

/// Items in insertion order with an id -> position index.
///
/// Invariant: `index[items[i].id] == i` for every `i`, and `index` has no
/// other entries.
#[derive(Default)]
struct Inner {
    items: Vec<Item>,
    index: HashMap<ItemId, usize>,
}

impl Inner {
    fn get(&self, id: &ItemId) -> Option<&Item> {
        self.index.get(id).map(|&pos| &self.items[pos])
    }

    fn get_mut(&mut self, id: &ItemId) -> Option<&mut Item> {
        let pos = *self.index.get(id)?;
        Some(&mut self.items[pos])
    }

    /// Append an item. Returns `false` and leaves the store untouched if the
    /// id is already taken.
    fn push(&mut self, item: Item) -> bool {
        if self.index.contains_key(&item.id) {
            return false;
        }
        self.index.insert(item.id.clone(), self.items.len());
        self.items.push(item);
        true
    }

    fn remove(&mut self, id: &ItemId) -> Option<Item> {
        let pos = self.index.remove(id)?;
        let removed = self.items.remove(pos);
        for item in &self.items[pos..] {
            if let Some(slot) = self.index.get_mut(&item.id) {
                *slot -= 1;
            }
        }
        Some(removed)
    }
}

/// An in-memory implementation of [`ItemStore`].
///
/// Reads share the lock; `update_item`, `delete_item` and `create_item` hold
/// it exclusively for their entire critical section, so writes to the same
/// id are linearized and no caller sees a half-applied patch.
pub struct InMemoryItemStore {
    inner: RwLock<Inner>,
}

impl InMemoryItemStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
        }
    }

    /// Create a store pre-populated with `items`, keeping their order.
    ///
    /// If an id appears more than once only the first record is kept.
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> Self {
        let mut inner = Inner::default();
        for item in items {
            let id = item.id.clone();
            if !inner.push(item) {
                warn!(id = %id, "dropping seed item with duplicate id");
            }
        }
        Self {
            inner: RwLock::new(inner),
        }
    }

    /// Number of items currently stored.
    pub fn len(&self) -> usize {
        self.read().items.len()
    }

    /// Returns `true` if the store holds no items.
    pub fn is_empty(&self) -> bool {
        self.read().items.is_empty()
    }

    // Critical sections never panic part-way through a mutation, so the data
    // behind a poisoned lock is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemStore for InMemoryItemStore {
    fn get_item(&self, id: &ItemId) -> StoreResult<Item> {
        self.read()
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(id))
    }

    fn get_items(&self) -> StoreResult<Vec<Item>> {
        Ok(self.read().items.clone())
    }

    fn update_item(&self, id: &ItemId, patch: &ItemPatch) -> StoreResult<Item> {
        let updated = {
            let mut inner = self.write();
            let item = inner.get_mut(id).ok_or_else(|| StoreError::not_found(id))?;
            patch.apply(item);
            item.clone()
        };
        debug!(id = %id, fields = ?patch.present_fields(), "item updated");
        Ok(updated)
    }

    fn delete_item(&self, id: &ItemId) -> StoreResult<()> {
        self.write()
            .remove(id)
            .ok_or_else(|| StoreError::not_found(id))?;
        debug!(id = %id, "item deleted");
        Ok(())
    }

    fn create_item(&self, new: NewItem) -> StoreResult<Item> {
        let item = Item::from_new(ItemId::generate(), new, Utc::now());
        let mut inner = self.write();
        // UUID v7 ids are unique; a collision would mean a broken generator.
        if !inner.push(item.clone()) {
            return Err(StoreError::Backend(format!("generated duplicate id {}", item.id)));
        }
        drop(inner);
        debug!(id = %item.id, "item created");
        Ok(item)
    }
}

impl std::fmt::Debug for InMemoryItemStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryItemStore")
            .field("item_count", &self.len())
            .finish()
    }
}
