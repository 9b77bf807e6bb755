//! # Conditions
//!
//! Condition-set state model for reconciled resources.
//!
//! ## Sub-modules
//!
//! - `condition` - A single condition record, its status and severity
//! - `store` - Ordered per-resource condition store and the accessor trait
//! - `set` - Dependent/terminal declaration and the aggregation algorithm
//! - `error` - Parse errors for status and severity strings
//!
//! ## Usage
//!
//! ```
//! use reconciler_conditions::conditions::{ConditionSet, Conditions};
//!
//! let set = ConditionSet::living(["DependencyResolved", "DeploymentReady"]);
//! let mut conditions = Conditions::new();
//!
//! let mut manager = set.manage(&mut conditions);
//! manager.initialize_conditions();
//! manager.mark_false("DependencyResolved", "NotFound", "secret db-creds not found");
//! assert!(!manager.is_happy());
//!
//! manager.mark_true("DependencyResolved");
//! manager.mark_true("DeploymentReady");
//! assert!(manager.is_happy());
//! ```

pub mod condition;
pub mod error;
pub mod set;
pub mod store;

pub use condition::{Condition, ConditionStatus, Severity};
pub use error::{ParseConditionStatusError, ParseSeverityError};
pub use set::{ConditionManager, ConditionSet};
pub use store::{Conditions, ConditionsAccessor};
