//! # Reconciler Conditions
//!
//! Condition-set state model for Kubernetes reconcilers.
//!
//! ## Overview
//!
//! A resource reports its health through a small set of named conditions. One of
//! them, the terminal condition (usually `Ready`), is derived from the others:
//!
//! 1. **Condition store** - per-resource, sorted by type, one record per type, and
//!    `lastTransitionTime` only moves when a status actually changes
//! 2. **Condition set** - per resource kind, declares the dependent types and
//!    recomputes the terminal condition after every dependent mark
//!
//! Failures are not returned as errors; they are reported as False/Unknown
//! conditions with a reason and message.
//!
//! ## Features
//!
//! - **Deterministic diagnostics**: the first blocking dependent in declaration order
//!   supplies the terminal reason, so repeated passes produce identical status
//! - **Stable timestamps**: repeated marks with the same status never touch
//!   `lastTransitionTime`
//! - **CRD ready**: every type is `serde` + `schemars`, and the `TestResource`
//!   fixture shows a status embedding the store
//! - **Prometheus metrics**: terminal transitions and marks are counted

pub mod conditions;
pub mod config;
pub mod constants;
pub mod controller;
pub mod crd;
pub mod observability;

pub use conditions::{
    Condition, ConditionManager, ConditionSet, ConditionStatus, Conditions, ConditionsAccessor,
    Severity,
};
pub use crd::{TestResource, TestResourceSpec, TestResourceStatus};
