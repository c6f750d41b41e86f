//! Startup configuration read from the environment.

use std::net::SocketAddr;

use thiserror::Error;

/// Env var holding the socket address to listen on.
pub const BIND_ADDR_VAR: &str = "INVENTORY_BIND_ADDR";

/// All interfaces, fixed port.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

/// Tracing filter used when `RUST_LOG` is unset (verbose by default).
pub const DEFAULT_LOG_FILTER: &str = "debug";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {var}={value:?}: {source}")]
    InvalidBindAddr {
        var: &'static str,
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable lookup (tests pass a closure).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw
            .trim()
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr {
                var: BIND_ADDR_VAR,
                value: raw.clone(),
                source,
            })?;
        Ok(Self { bind_addr })
    }
}
