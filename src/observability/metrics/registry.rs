//! # Metrics Registry
//!
//! Prometheus metrics registry setup, registration and text exposition.

use anyhow::{Context, Result};
use prometheus::{Encoder, Registry, TextEncoder};
use std::sync::LazyLock;

/// Global Prometheus metrics registry
pub(crate) static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::new);

/// Register all metrics with the Prometheus registry
///
/// Call this once at startup.
///
/// # Errors
///
/// Returns an error if the metrics are already registered (`AlreadyReg`).
pub fn register_metrics() -> Result<()> {
    super::condition_metrics::register_condition_metrics()
        .context("Failed to register condition metrics")?;
    Ok(())
}

/// Render every registered metric in the Prometheus text format
///
/// # Errors
///
/// Returns an error if encoding fails or the output is not valid UTF-8.
pub fn gather_metrics() -> Result<String> {
    let mut buffer = Vec::new();
    TextEncoder::new()
        .encode(&REGISTRY.gather(), &mut buffer)
        .context("Failed to encode metrics")?;
    String::from_utf8(buffer).context("Metrics output is not valid UTF-8")
}
