//! # Metrics Module
//!
//! Prometheus metrics for condition tracking.
//!
//! ## Sub-modules
//!
//! - `registry` - Metrics registry setup, registration and exposition
//! - `condition_metrics` - Condition marks and terminal transitions

pub mod condition_metrics;
pub mod registry;

pub use condition_metrics::*;
pub use registry::*;
