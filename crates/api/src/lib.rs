//! HTTP API: server, routing, HTML views and error mapping.

pub mod app;
pub mod config;
pub mod middleware;
