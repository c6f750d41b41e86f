use axum::Router;

pub mod inventory;
pub mod system;

/// Router for the inventory pages.
pub fn router() -> Router {
    inventory::router()
}
