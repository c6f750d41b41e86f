use invtrack_core::{DomainError, DomainResult, ItemId};

use crate::item::{InventoryItem, ItemFields};
use crate::store::InventoryStore;

/// The inventory use-cases driven by the HTTP layer.
///
/// Owns its store; share the service (e.g. behind an `Arc`) rather than the
/// collection itself.
#[derive(Debug)]
pub struct InventoryService<S> {
    store: S,
}

impl<S> InventoryService<S>
where
    S: InventoryStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// All items in display order.
    pub fn list(&self) -> DomainResult<Vec<InventoryItem>> {
        self.store.list()
    }

    pub fn get(&self, id: ItemId) -> DomainResult<InventoryItem> {
        self.store.get(id)?.ok_or_else(|| {
            tracing::debug!(item_id = %id, "inventory item not found");
            DomainError::not_found()
        })
    }

    /// Parse the raw form fields and append a new item.
    pub fn add(&self, name: &str, quantity: &str, price: &str) -> DomainResult<InventoryItem> {
        let fields = ItemFields::parse(name, quantity, price).inspect_err(|e| {
            tracing::warn!(error = %e, "rejected new inventory item");
        })?;

        let item = self.store.insert(fields)?;
        tracing::info!(item_id = %item.id, name = %item.name, "inventory item added");
        Ok(item)
    }

    /// Overwrite name/quantity/price of an existing item.
    ///
    /// A missing id wins over malformed fields.
    pub fn edit(
        &self,
        id: ItemId,
        name: &str,
        quantity: &str,
        price: &str,
    ) -> DomainResult<InventoryItem> {
        let fields = match ItemFields::parse(name, quantity, price) {
            Ok(f) => f,
            Err(e) => {
                self.get(id)?;
                tracing::warn!(item_id = %id, error = %e, "rejected inventory item edit");
                return Err(e);
            }
        };

        let item = self
            .store
            .update(id, fields)?
            .ok_or_else(DomainError::not_found)?;
        tracing::info!(item_id = %item.id, "inventory item updated");
        Ok(item)
    }

    /// Remove the item with `id`. Returns whether anything was removed;
    /// a missing id is not an error.
    pub fn delete(&self, id: ItemId) -> DomainResult<bool> {
        let removed = self.store.remove(id)?;
        if removed > 0 {
            tracing::info!(item_id = %id, "inventory item deleted");
        } else {
            tracing::debug!(item_id = %id, "delete of unknown inventory item ignored");
        }
        Ok(removed > 0)
    }
}

impl<S> Default for InventoryService<S>
where
    S: InventoryStore + Default,
{
    fn default() -> Self {
        Self::new(S::default())
    }
}
