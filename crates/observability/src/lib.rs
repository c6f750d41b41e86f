//! Tracing/logging setup shared by binaries and tests.

/// Initialize process-wide tracing with `default_filter` used when
/// `RUST_LOG` is unset or invalid.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init(default_filter: &str) {
    tracing::init(default_filter);
}

/// Tracing configuration (filters, layers).
pub mod tracing;
