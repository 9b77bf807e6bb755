//! # Condition Store
//!
//! Ordered collection of conditions belonging to one resource's status.
//!
//! The store keeps at most one record per condition type, sorted by type so that
//! serialized output is deterministic. It has no aggregation logic: `set` is the
//! single mutation primitive and it alone decides when `lastTransitionTime` moves.

use super::condition::Condition;
use chrono::{DateTime, Utc};
use schemars::{JsonSchema, Schema, SchemaGenerator};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Condition store
///
/// Serializes as a plain list of conditions sorted by `type`. A `null` list
/// deserializes as an empty store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "Option<Vec<Condition>>", into = "Vec<Condition>")]
pub struct Conditions {
    items: Vec<Condition>,
}

impl Conditions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the record for `condition_type`
    pub fn get(&self, condition_type: &str) -> Option<&Condition> {
        self.position(condition_type)
            .ok()
            .map(|index| &self.items[index])
    }

    /// Insert or replace the record for `condition.type` using the current time
    ///
    /// Returns `true` when the status transitioned (new record or changed status).
    pub fn set(&mut self, condition: Condition) -> bool {
        self.set_at(condition, Utc::now())
    }

    /// Insert or replace the record for `condition.type` at `now`
    ///
    /// Same status as the existing record: the existing `lastTransitionTime` is kept
    /// and only reason, message and severity are overwritten.
    /// Changed status or no prior record: `lastTransitionTime` becomes `now`, clamped
    /// so it never goes below the previous transition time for this type.
    /// Any `last_transition_time` carried by `condition` is ignored.
    ///
    /// Returns `true` when the status transitioned.
    pub fn set_at(&mut self, mut condition: Condition, now: DateTime<Utc>) -> bool {
        match self.position(&condition.r#type) {
            Ok(index) => {
                let existing = &mut self.items[index];
                if existing.status == condition.status {
                    condition.last_transition_time = existing.last_transition_time;
                    *existing = condition;
                    false
                } else {
                    condition.last_transition_time = Some(match existing.last_transition_time {
                        Some(previous) if previous > now => previous,
                        _ => now,
                    });
                    *existing = condition;
                    true
                }
            }
            Err(index) => {
                condition.last_transition_time = Some(now);
                self.items.insert(index, condition);
                true
            }
        }
    }

    /// Remove the record for `condition_type`, returning it if present
    pub fn remove(&mut self, condition_type: &str) -> Option<Condition> {
        self.position(condition_type)
            .ok()
            .map(|index| self.items.remove(index))
    }

    /// All records, sorted by type
    pub fn all(&self) -> &[Condition] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Condition> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, condition_type: &str) -> Result<usize, usize> {
        self.items
            .binary_search_by(|c| c.r#type.as_str().cmp(condition_type))
    }
}

impl From<Vec<Condition>> for Conditions {
    /// Normalize an arbitrary list: sorted by type, last record wins on duplicates.
    fn from(items: Vec<Condition>) -> Self {
        let mut conditions = Self::new();
        for condition in items {
            match conditions.position(&condition.r#type) {
                Ok(index) => conditions.items[index] = condition,
                Err(index) => conditions.items.insert(index, condition),
            }
        }
        conditions
    }
}

impl From<Option<Vec<Condition>>> for Conditions {
    fn from(items: Option<Vec<Condition>>) -> Self {
        items.map(Self::from).unwrap_or_default()
    }
}

impl From<Conditions> for Vec<Condition> {
    fn from(conditions: Conditions) -> Self {
        conditions.items
    }
}

impl<'a> IntoIterator for &'a Conditions {
    type Item = &'a Condition;
    type IntoIter = std::slice::Iter<'a, Condition>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl JsonSchema for Conditions {
    fn inline_schema() -> bool {
        true
    }

    fn schema_name() -> Cow<'static, str> {
        Cow::Borrowed("Conditions")
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        // Same wire shape as a list of conditions
        <Vec<Condition>>::json_schema(generator)
    }
}

/// Access to the condition store embedded in a status struct
///
/// Status types hold a named `Conditions` field and implement this trait so a
/// `ConditionSet` can be bound to them.
pub trait ConditionsAccessor {
    fn conditions(&self) -> &Conditions;
    fn conditions_mut(&mut self) -> &mut Conditions;
}

impl ConditionsAccessor for Conditions {
    fn conditions(&self) -> &Conditions {
        self
    }

    fn conditions_mut(&mut self) -> &mut Conditions {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conditions::{ConditionStatus, Severity};
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn test_get_missing_returns_none() {
        let store = Conditions::new();
        assert!(store.get("Ready").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_new_record_stamps_time() {
        let mut store = Conditions::new();
        let transitioned = store.set_at(Condition::new("Ready", ConditionStatus::Unknown), at(10));
        assert!(transitioned);
        assert_eq!(store.get("Ready").unwrap().last_transition_time, Some(at(10)));
    }

    #[test]
    fn test_set_same_status_keeps_time_and_overwrites_diagnostics() {
        let mut store = Conditions::new();
        store.set_at(
            Condition::new("A", ConditionStatus::False).with_reason("first", "one"),
            at(10),
        );
        let transitioned = store.set_at(
            Condition::new("A", ConditionStatus::False)
                .with_reason("second", "two")
                .with_severity(Severity::Warning),
            at(20),
        );

        assert!(!transitioned);
        let record = store.get("A").unwrap();
        assert_eq!(record.last_transition_time, Some(at(10)));
        assert_eq!(record.reason(), "second");
        assert_eq!(record.message(), "two");
        assert_eq!(record.severity, Severity::Warning);
    }

    #[test]
    fn test_set_changed_status_advances_time() {
        let mut store = Conditions::new();
        store.set_at(Condition::new("A", ConditionStatus::Unknown), at(10));
        assert!(store.set_at(Condition::new("A", ConditionStatus::True), at(20)));
        assert_eq!(store.get("A").unwrap().last_transition_time, Some(at(20)));
    }

    #[test]
    fn test_set_clamps_backwards_clock() {
        let mut store = Conditions::new();
        store.set_at(Condition::new("A", ConditionStatus::Unknown), at(50));
        store.set_at(Condition::new("A", ConditionStatus::True), at(40));
        assert_eq!(store.get("A").unwrap().last_transition_time, Some(at(50)));
    }

    #[test]
    fn test_set_ignores_caller_supplied_time() {
        let mut store = Conditions::new();
        let mut condition = Condition::new("A", ConditionStatus::True);
        condition.last_transition_time = Some(at(999));
        store.set_at(condition, at(5));
        assert_eq!(store.get("A").unwrap().last_transition_time, Some(at(5)));
    }

    #[test]
    fn test_all_is_sorted_by_type() {
        let mut store = Conditions::new();
        for name in ["Ready", "B", "A", "Z"] {
            store.set_at(Condition::new(name, ConditionStatus::Unknown), at(1));
        }
        let types: Vec<&str> = store.all().iter().map(|c| c.r#type.as_str()).collect();
        assert_eq!(types, vec!["A", "B", "Ready", "Z"]);
    }

    #[test]
    fn test_remove() {
        let mut store = Conditions::new();
        store.set_at(Condition::new("A", ConditionStatus::True), at(1));
        assert_eq!(store.remove("A").map(|c| c.status), Some(ConditionStatus::True));
        assert!(store.remove("A").is_none());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_deserialize_normalizes_order_and_duplicates() {
        let store: Conditions = serde_json::from_value(serde_json::json!([
            {"type": "B", "status": "True"},
            {"type": "A", "status": "Unknown"},
            {"type": "B", "status": "False", "reason": "Later"}
        ]))
        .unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.all()[0].r#type, "A");
        let b = store.get("B").unwrap();
        assert!(b.is_false());
        assert_eq!(b.reason(), "Later");
    }

    #[test]
    fn test_deserialize_null_as_empty() {
        let store: Conditions = serde_json::from_value(serde_json::Value::Null).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_serializes_as_list() {
        let mut store = Conditions::new();
        store.set_at(Condition::new("B", ConditionStatus::True), at(0));
        store.set_at(Condition::new("A", ConditionStatus::False), at(0));
        let value = serde_json::to_value(&store).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                {"type": "A", "status": "False", "lastTransitionTime": "1970-01-01T00:00:00Z"},
                {"type": "B", "status": "True", "lastTransitionTime": "1970-01-01T00:00:00Z"}
            ])
        );
    }
}
