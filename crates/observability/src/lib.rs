//! Tracing/logging setup shared by applications embedding offerkit.
//!
//! The library crates only emit `tracing` events; installing a subscriber is
//! the host application's call.

/// Initialize process-wide tracing from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init_with(&TracingConfig::from_env());
}

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use crate::tracing::{LogFormat, TracingConfig, init_with};
