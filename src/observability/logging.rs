//! # Logging
//!
//! Tracing subscriber setup.

use crate::config::ControllerConfig;
use anyhow::{anyhow, Result};

/// Install the global `tracing` subscriber
///
/// `RUST_LOG` wins when set; otherwise the configured default filter is used.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing(config: &ControllerConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("Failed to install tracing subscriber: {e}"))
}
