use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use invtrack_core::{DomainError, DomainResult, ItemId};

use crate::item::{InventoryItem, ItemFields};

/// Storage seam for the inventory collection.
///
/// Implementations keep insertion order and own id assignment, so that
/// "pick the next id, then append" happens as one step.
pub trait InventoryStore: Send + Sync {
    /// All items in insertion order.
    fn list(&self) -> DomainResult<Vec<InventoryItem>>;
    fn get(&self, id: ItemId) -> DomainResult<Option<InventoryItem>>;
    /// Append a new item under a freshly assigned id.
    fn insert(&self, fields: ItemFields) -> DomainResult<InventoryItem>;
    /// Overwrite the first item with `id`; `None` if absent.
    fn update(&self, id: ItemId, fields: ItemFields) -> DomainResult<Option<InventoryItem>>;
    /// Remove every item with `id`, returning how many were removed.
    fn remove(&self, id: ItemId) -> DomainResult<usize>;
    fn len(&self) -> DomainResult<usize>;

    fn is_empty(&self) -> DomainResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl<S> InventoryStore for Arc<S>
where
    S: InventoryStore + ?Sized,
{
    fn list(&self) -> DomainResult<Vec<InventoryItem>> {
        (**self).list()
    }

    fn get(&self, id: ItemId) -> DomainResult<Option<InventoryItem>> {
        (**self).get(id)
    }

    fn insert(&self, fields: ItemFields) -> DomainResult<InventoryItem> {
        (**self).insert(fields)
    }

    fn update(&self, id: ItemId, fields: ItemFields) -> DomainResult<Option<InventoryItem>> {
        (**self).update(id, fields)
    }

    fn remove(&self, id: ItemId) -> DomainResult<usize> {
        (**self).remove(id)
    }

    fn len(&self) -> DomainResult<usize> {
        (**self).len()
    }
}

#[derive(Debug)]
struct Collection {
    items: Vec<InventoryItem>,
    next_id: ItemId,
}

/// In-process store; contents are lost when the process exits.
#[derive(Debug)]
pub struct InMemoryInventoryStore {
    inner: RwLock<Collection>,
}

impl InMemoryInventoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Collection {
                items: Vec::new(),
                next_id: ItemId::FIRST,
            }),
        }
    }

    fn read(&self) -> DomainResult<RwLockReadGuard<'_, Collection>> {
        self.inner
            .read()
            .map_err(|_| DomainError::unavailable("inventory lock poisoned"))
    }

    fn write(&self) -> DomainResult<RwLockWriteGuard<'_, Collection>> {
        self.inner
            .write()
            .map_err(|_| DomainError::unavailable("inventory lock poisoned"))
    }
}

impl Default for InMemoryInventoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryStore for InMemoryInventoryStore {
    fn list(&self) -> DomainResult<Vec<InventoryItem>> {
        Ok(self.read()?.items.clone())
    }

    fn get(&self, id: ItemId) -> DomainResult<Option<InventoryItem>> {
        Ok(self.read()?.items.iter().find(|i| i.id == id).cloned())
    }

    fn insert(&self, fields: ItemFields) -> DomainResult<InventoryItem> {
        let mut coll = self.write()?;
        let id = coll.next_id;
        coll.next_id = id.next();

        let item = InventoryItem::new(id, fields);
        coll.items.push(item.clone());
        Ok(item)
    }

    fn update(&self, id: ItemId, fields: ItemFields) -> DomainResult<Option<InventoryItem>> {
        let mut coll = self.write()?;
        Ok(coll.items.iter_mut().find(|i| i.id == id).map(|item| {
            item.apply(fields);
            item.clone()
        }))
    }

    fn remove(&self, id: ItemId) -> DomainResult<usize> {
        let mut coll = self.write()?;
        let before = coll.items.len();
        coll.items.retain(|i| i.id != id);
        Ok(before - coll.items.len())
    }

    fn len(&self) -> DomainResult<usize> {
        Ok(self.read()?.items.len())
    }
}
