//! # TestResource Status
//!
//! Status type for the `TestResource` fixture.

use crate::conditions::{ConditionSet, Conditions, ConditionsAccessor};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Status of the TestResource resource
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TestResourceStatus {
    /// Generation most recently observed by the reconciler
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed_generation: Option<i64>,
    /// Conditions represent the latest available observations, sorted by type
    #[serde(default)]
    pub conditions: Conditions,
    /// Arbitrary key/value data reported back by the reconciler
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, String>,
}

impl ConditionsAccessor for TestResourceStatus {
    fn conditions(&self) -> &Conditions {
        &self.conditions
    }

    fn conditions_mut(&mut self) -> &mut Conditions {
        &mut self.conditions
    }
}

impl TestResourceStatus {
    /// Condition set for this kind: `Ready` with no dependents
    pub fn condition_set() -> ConditionSet {
        ConditionSet::living(Vec::<String>::new())
    }

    pub fn initialize_conditions(&mut self, set: &ConditionSet) {
        set.manage(self).initialize_conditions();
    }

    pub fn mark_ready(&mut self, set: &ConditionSet) {
        set.manage(self).mark_ready();
    }

    /// Override the terminal condition to False
    ///
    /// This only writes the terminal condition; it does not run aggregation.
    pub fn mark_not_ready(&mut self, set: &ConditionSet, reason: &str, message: &str) {
        set.manage(self).mark_not_ready(reason, message);
    }

    /// Whether the terminal condition of `set` is True
    pub fn is_ready(&self, set: &ConditionSet) -> bool {
        self.conditions
            .get(set.terminal_type())
            .is_some_and(|c| c.is_true())
    }
}
