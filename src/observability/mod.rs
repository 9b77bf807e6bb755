//! # Observability
//!
//! Logging and Prometheus metrics.

pub mod logging;
pub mod metrics;

use crate::config::ControllerConfig;
use anyhow::Result;

/// Set up logging and metrics from the controller configuration
///
/// # Errors
///
/// Returns an error if a tracing subscriber is already installed or the metrics
/// are already registered.
pub fn init(config: &ControllerConfig) -> Result<()> {
    logging::init_tracing(config)?;
    metrics::set_metrics_enabled(config.metrics_enabled);
    if config.metrics_enabled {
        metrics::register_metrics()?;
    }
    Ok(())
}
