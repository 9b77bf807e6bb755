//! # Constants
//!
//! Well-known condition types and configuration defaults.

/// Terminal condition type for long-running resources
pub const CONDITION_READY: &str = "Ready";

/// Terminal condition type for run-to-completion resources
pub const CONDITION_SUCCEEDED: &str = "Succeeded";

/// Default field manager used when patching status
pub const DEFAULT_FIELD_MANAGER: &str = "reconciler-conditions";

/// Default tracing filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "reconciler_conditions=info";

/// Metrics are collected unless disabled
pub const DEFAULT_METRICS_ENABLED: bool = true;
