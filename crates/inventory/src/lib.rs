//! Inventory domain module.
//!
//! Item model, form-field parsing, the store seam and the service that the
//! HTTP layer drives. No HTTP or templating concerns live here.

pub mod item;
pub mod service;
pub mod store;

pub use item::{InventoryItem, ItemFields};
pub use service::InventoryService;
pub use store::{InMemoryInventoryStore, InventoryStore};
