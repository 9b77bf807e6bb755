//! # Reconciler
//!
//! Per-controller context and status persistence.
//!
//! ## Sub-modules
//!
//! - `types` - Reconciler context and error types
//! - `status` - Patching a mutated status back to the API server

pub mod status;
pub mod types;

pub use status::{status_patch, status_unchanged, update_status};
pub use types::{Reconciler, StatusError};
