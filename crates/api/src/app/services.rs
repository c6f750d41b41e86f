use invtrack_inventory::{InMemoryInventoryStore, InventoryService};

use crate::app::views::Views;

/// Application state shared by all handlers.
///
/// Created once at startup and dropped with the server; handlers reach it via
/// `Extension<Arc<AppServices>>`.
#[derive(Debug)]
pub struct AppServices {
    inventory: InventoryService<InMemoryInventoryStore>,
    views: Views,
}

impl AppServices {
    pub fn new(inventory: InventoryService<InMemoryInventoryStore>, views: Views) -> Self {
        Self { inventory, views }
    }

    pub fn inventory(&self) -> &InventoryService<InMemoryInventoryStore> {
        &self.inventory
    }

    pub fn views(&self) -> &Views {
        &self.views
    }
}

/// In-memory wiring: empty store + compiled templates.
pub fn build_services() -> Result<AppServices, minijinja::Error> {
    let inventory = InventoryService::new(InMemoryInventoryStore::new());
    let views = Views::new()?;
    tracing::debug!("in-memory inventory services built");
    Ok(AppServices::new(inventory, views))
}
