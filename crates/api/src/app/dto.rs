use serde::{Deserialize, Serialize};

use invtrack_inventory::InventoryItem;

// -------------------------
// Request DTOs
// -------------------------

/// Add/edit form body. Numbers stay as text; the service parses them.
#[derive(Debug, Deserialize)]
pub struct ItemForm {
    pub name: String,
    pub quantity: String,
    pub price: String,
}

// -------------------------
// View models
// -------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemView {
    pub id: u64,
    pub name: String,
    pub quantity: i64,
    /// Round-trippable form value (pre-fills the edit form).
    pub price: String,
    /// Two-decimal display value for the list view.
    pub price_display: String,
}

impl From<&InventoryItem> for ItemView {
    fn from(item: &InventoryItem) -> Self {
        Self {
            id: item.id.get(),
            name: item.name.clone(),
            quantity: item.quantity,
            price: item.price.to_string(),
            price_display: format!("{:.2}", item.price),
        }
    }
}
