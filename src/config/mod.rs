//! # Controller Configuration
//!
//! Controller-level configuration loaded from environment variables.
//!
//! All configuration has sensible defaults and can be overridden via environment variables.

use crate::constants::{DEFAULT_FIELD_MANAGER, DEFAULT_LOG_FILTER, DEFAULT_METRICS_ENABLED};

/// Controller configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerConfig {
    /// Field manager name sent with status patches
    pub field_manager: String,
    /// Default tracing filter, used when `RUST_LOG` is not set
    pub log_filter: String,
    /// Collect Prometheus metrics for condition marks and transitions
    pub metrics_enabled: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            field_manager: DEFAULT_FIELD_MANAGER.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            metrics_enabled: DEFAULT_METRICS_ENABLED,
        }
    }
}

impl ControllerConfig {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            field_manager: var_or_default(
                &lookup,
                "FIELD_MANAGER",
                DEFAULT_FIELD_MANAGER.to_string(),
            ),
            log_filter: var_or_default(&lookup, "LOG_FILTER", DEFAULT_LOG_FILTER.to_string()),
            metrics_enabled: var_or_default(&lookup, "METRICS_ENABLED", DEFAULT_METRICS_ENABLED),
        }
    }
}

/// Read a variable or return the default value when unset or unparseable
fn var_or_default<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    lookup(key)
        .filter(|v| !v.is_empty())
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
