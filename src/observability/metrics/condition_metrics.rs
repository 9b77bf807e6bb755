//! # Condition Metrics
//!
//! Counters for condition marks and terminal condition transitions.

use crate::conditions::ConditionStatus;
use crate::observability::metrics::registry::REGISTRY;
use anyhow::Result;
use prometheus::{IntCounterVec, Opts};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::LazyLock;

static METRICS_ENABLED: AtomicBool = AtomicBool::new(true);

static TRANSITIONS_TOTAL: LazyLock<IntCounterVec> = LazyLock::new(|| {
    IntCounterVec::new(
        Opts::new(
            "reconciler_conditions_transitions_total",
            "Total number of terminal condition status transitions",
        ),
        &["type", "status"],
    )
    .expect("Failed to create TRANSITIONS_TOTAL metric - this should never happen")
});

static MARKS_TOTAL: LazyLock<IntCounterVec> = LazyLock::new(|| {
    IntCounterVec::new(
        Opts::new(
            "reconciler_conditions_marks_total",
            "Total number of condition marks by kind (dependent, independent, terminal)",
        ),
        &["kind"],
    )
    .expect("Failed to create MARKS_TOTAL metric - this should never happen")
});

/// Register condition metrics with the registry
pub(crate) fn register_condition_metrics() -> Result<()> {
    REGISTRY.register(Box::new(TRANSITIONS_TOTAL.clone()))?;
    REGISTRY.register(Box::new(MARKS_TOTAL.clone()))?;
    Ok(())
}

/// Turn metric collection on or off (from `ControllerConfig::metrics_enabled`)
pub fn set_metrics_enabled(enabled: bool) {
    METRICS_ENABLED.store(enabled, Ordering::Relaxed);
}

pub fn increment_transitions_total(condition_type: &str, status: ConditionStatus) {
    if METRICS_ENABLED.load(Ordering::Relaxed) {
        TRANSITIONS_TOTAL
            .with_label_values(&[condition_type, status.as_str()])
            .inc();
    }
}

pub fn increment_marks_total(kind: &str) {
    if METRICS_ENABLED.load(Ordering::Relaxed) {
        MARKS_TOTAL.with_label_values(&[kind]).inc();
    }
}
