//! HTTP application wiring (Axum router + service wiring).
//!
//! - `services.rs`: owned application state (inventory service, views)
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: form DTOs and view models
//! - `views.rs`: HTML templates
//! - `errors.rs`: error to response mapping

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;
pub mod views;

/// Build the full HTTP router around already-constructed services.
pub fn build_app(services: Arc<services::AppServices>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(Extension(services))
        .layer(ServiceBuilder::new().layer(axum::middleware::from_fn(middleware::log_requests)))
}

/// Build the router with a fresh, empty in-memory inventory.
pub fn build_default_app() -> Result<Router, minijinja::Error> {
    let services = services::build_services()?;
    Ok(build_app(Arc::new(services)))
}
