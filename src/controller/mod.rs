//! # Controller
//!
//! Reconciler context and status writer for condition-tracked resources.

pub mod reconciler;
