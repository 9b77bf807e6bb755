//! # Condition Set
//!
//! Declares which condition types feed the terminal condition of a resource kind
//! and computes that terminal condition from them.
//!
//! A `ConditionSet` is built once per resource kind and is immutable afterwards, so
//! it can be shared between concurrent reconciliations. Each reconciliation pass
//! binds it to one status with [`ConditionSet::manage`] and calls the `mark_*`
//! operations on the returned [`ConditionManager`].
//!
//! ## Aggregation
//!
//! After every mark on a dependent type the terminal condition is recomputed:
//!
//! 1. Any dependent False: terminal False, diagnostics from the first False dependent
//! 2. Else any dependent Unknown: terminal Unknown, diagnostics from the first Unknown dependent
//! 3. Else: terminal True with no diagnostics
//!
//! "First" follows declaration order, so repeated passes over the same failures
//! produce the same status.

use super::condition::{Condition, ConditionStatus, Severity};
use super::store::{Conditions, ConditionsAccessor};
use crate::constants::{CONDITION_READY, CONDITION_SUCCEEDED};
use crate::observability::metrics;
use chrono::{DateTime, Utc};
use tracing::{debug, info};

/// Terminal condition type plus the ordered dependent types that derive it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionSet {
    terminal: String,
    dependents: Vec<String>,
}

impl ConditionSet {
    /// Create a condition set with an explicit terminal type
    ///
    /// Duplicate dependents are dropped (first occurrence wins) and the terminal
    /// type is never treated as its own dependent.
    pub fn new<I, S>(terminal: impl Into<String>, dependents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let terminal = terminal.into();
        let mut unique: Vec<String> = Vec::new();
        for dependent in dependents {
            let dependent = dependent.into();
            if dependent != terminal && !unique.contains(&dependent) {
                unique.push(dependent);
            }
        }
        Self {
            terminal,
            dependents: unique,
        }
    }

    /// Condition set for long-running resources, terminal type "Ready"
    pub fn living<I, S>(dependents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(CONDITION_READY, dependents)
    }

    /// Condition set for run-to-completion resources, terminal type "Succeeded"
    pub fn batch<I, S>(dependents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(CONDITION_SUCCEEDED, dependents)
    }

    pub fn terminal_type(&self) -> &str {
        &self.terminal
    }

    pub fn dependent_types(&self) -> &[String] {
        &self.dependents
    }

    pub fn is_dependent(&self, condition_type: &str) -> bool {
        self.dependents.iter().any(|d| d == condition_type)
    }

    pub fn is_terminal(&self, condition_type: &str) -> bool {
        self.terminal == condition_type
    }

    /// Bind this set to `status` for one reconciliation pass, stamping transitions
    /// with the current time
    pub fn manage<'a, S>(&'a self, status: &'a mut S) -> ConditionManager<'a, S>
    where
        S: ConditionsAccessor + ?Sized,
    {
        self.manage_at(status, Utc::now())
    }

    /// Bind this set to `status`, stamping transitions with `now`
    pub fn manage_at<'a, S>(
        &'a self,
        status: &'a mut S,
        now: DateTime<Utc>,
    ) -> ConditionManager<'a, S>
    where
        S: ConditionsAccessor + ?Sized,
    {
        ConditionManager {
            set: self,
            status,
            now,
        }
    }

    fn severity_for(&self, condition_type: &str) -> Severity {
        if self.is_terminal(condition_type) || self.is_dependent(condition_type) {
            Severity::Error
        } else {
            Severity::Info
        }
    }
}

/// A `ConditionSet` bound to one status for one reconciliation pass
#[derive(Debug)]
pub struct ConditionManager<'a, S: ConditionsAccessor + ?Sized> {
    set: &'a ConditionSet,
    status: &'a mut S,
    now: DateTime<Utc>,
}

impl<S: ConditionsAccessor + ?Sized> ConditionManager<'_, S> {
    /// Seed every dependent type and the terminal type as Unknown if absent
    ///
    /// Existing records are left untouched, so calling this twice is a no-op.
    pub fn initialize_conditions(&mut self) {
        let now = self.now;
        let conditions = self.status.conditions_mut();
        let types = self
            .set
            .dependents
            .iter()
            .chain(std::iter::once(&self.set.terminal));
        for condition_type in types {
            if conditions.get(condition_type).is_none() {
                conditions.set_at(
                    Condition::new(condition_type.clone(), ConditionStatus::Unknown),
                    now,
                );
            }
        }
    }

    pub fn get_condition(&self, condition_type: &str) -> Option<&Condition> {
        self.status.conditions().get(condition_type)
    }

    /// The terminal condition, if it has been set
    pub fn top_level_condition(&self) -> Option<&Condition> {
        self.get_condition(&self.set.terminal)
    }

    /// Whether the terminal condition is True
    pub fn is_happy(&self) -> bool {
        self.top_level_condition().is_some_and(Condition::is_true)
    }

    pub fn mark_true(&mut self, condition_type: &str) {
        self.mark(condition_type, ConditionStatus::True, "", "");
    }

    /// Mark True while keeping a diagnostic reason and message
    pub fn mark_true_with_reason(&mut self, condition_type: &str, reason: &str, message: &str) {
        self.mark(condition_type, ConditionStatus::True, reason, message);
    }

    pub fn mark_false(&mut self, condition_type: &str, reason: &str, message: &str) {
        self.mark(condition_type, ConditionStatus::False, reason, message);
    }

    pub fn mark_unknown(&mut self, condition_type: &str, reason: &str, message: &str) {
        self.mark(condition_type, ConditionStatus::Unknown, reason, message);
    }

    /// Set the terminal condition True directly, bypassing aggregation
    ///
    /// The next mark on a dependent type recomputes and overwrites it.
    pub fn mark_ready(&mut self) {
        self.write_terminal(ConditionStatus::True, "", "");
    }

    /// Set the terminal condition False directly, bypassing aggregation
    ///
    /// The next mark on a dependent type recomputes and overwrites it.
    pub fn mark_not_ready(&mut self, reason: &str, message: &str) {
        self.write_terminal(ConditionStatus::False, reason, message);
    }

    /// Remove a non-terminal condition
    ///
    /// Removing a dependent recomputes the terminal condition; the missing dependent
    /// then counts as Unknown. The terminal condition itself cannot be cleared.
    pub fn clear_condition(&mut self, condition_type: &str) {
        if self.set.is_terminal(condition_type) {
            debug!("Ignoring clear of terminal condition {}", condition_type);
            return;
        }
        if self.status.conditions_mut().remove(condition_type).is_some()
            && self.set.is_dependent(condition_type)
        {
            self.recompute();
        }
    }

    fn mark(&mut self, condition_type: &str, status: ConditionStatus, reason: &str, message: &str) {
        if self.set.is_terminal(condition_type) {
            self.write_terminal(status, reason, message);
            return;
        }

        let condition = Condition::new(condition_type, status)
            .with_severity(self.set.severity_for(condition_type))
            .with_reason(reason, message);
        self.status.conditions_mut().set_at(condition, self.now);

        if self.set.is_dependent(condition_type) {
            metrics::increment_marks_total("dependent");
            self.recompute();
        } else {
            metrics::increment_marks_total("independent");
            debug!(
                "Condition {} is not a dependent of {}, terminal condition unchanged",
                condition_type, self.set.terminal
            );
        }
    }

    /// Derive the terminal condition from the dependents and write it
    fn recompute(&mut self) {
        let (status, reason, message) = {
            let conditions = self.status.conditions();
            if let Some(blocking) = self.first_blocking(conditions, ConditionStatus::False) {
                (ConditionStatus::False, blocking.0, blocking.1)
            } else if let Some(pending) =
                self.first_blocking(conditions, ConditionStatus::Unknown)
            {
                (ConditionStatus::Unknown, pending.0, pending.1)
            } else {
                (ConditionStatus::True, String::new(), String::new())
            }
        };
        self.apply_terminal(status, &reason, &message);
    }

    /// Reason and message of the first dependent, in declaration order, that blocks
    /// with `status`. A missing dependent blocks as Unknown with no diagnostics.
    /// Dependents recorded with a non-Error severity never block.
    fn first_blocking(
        &self,
        conditions: &Conditions,
        status: ConditionStatus,
    ) -> Option<(String, String)> {
        self.set
            .dependents
            .iter()
            .find_map(|dependent| match conditions.get(dependent) {
                Some(condition) if condition.severity.is_error() && condition.status == status => {
                    Some((condition.reason().to_string(), condition.message().to_string()))
                }
                None if status == ConditionStatus::Unknown => Some((String::new(), String::new())),
                _ => None,
            })
    }

    fn write_terminal(&mut self, status: ConditionStatus, reason: &str, message: &str) {
        metrics::increment_marks_total("terminal");
        self.apply_terminal(status, reason, message);
    }

    fn apply_terminal(&mut self, status: ConditionStatus, reason: &str, message: &str) {
        let condition =
            Condition::new(self.set.terminal.clone(), status).with_reason(reason, message);
        if self.status.conditions_mut().set_at(condition, self.now) {
            metrics::increment_transitions_total(&self.set.terminal, status);
            info!(
                condition = %self.set.terminal,
                status = %status,
                reason = reason,
                "Terminal condition transitioned"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn test_new_dedupes_and_drops_terminal() {
        let set = ConditionSet::new("Ready", ["A", "Ready", "B", "A"]);
        assert_eq!(set.terminal_type(), "Ready");
        assert_eq!(set.dependent_types(), ["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn test_living_and_batch_terminal_types() {
        assert_eq!(ConditionSet::living(Vec::<String>::new()).terminal_type(), "Ready");
        assert_eq!(ConditionSet::batch(["Done"]).terminal_type(), "Succeeded");
    }

    #[test]
    fn test_severity_for_undeclared_type_is_info() {
        let set = ConditionSet::living(["A"]);
        assert_eq!(set.severity_for("A"), Severity::Error);
        assert_eq!(set.severity_for("Ready"), Severity::Error);
        assert_eq!(set.severity_for("Other"), Severity::Info);
    }

    #[test]
    fn test_missing_dependent_counts_as_unknown() {
        let set = ConditionSet::living(["A", "B"]);
        let mut conditions = Conditions::new();
        set.manage_at(&mut conditions, at(1)).mark_true("A");

        let ready = conditions.get("Ready").unwrap();
        assert!(ready.is_unknown());
        assert_eq!(ready.reason, None);
    }

    #[test]
    fn test_warning_dependent_does_not_block() {
        let set = ConditionSet::living(["A", "B"]);
        let mut conditions = Conditions::new();
        conditions.set_at(
            Condition::new("B", ConditionStatus::False)
                .with_severity(Severity::Warning)
                .with_reason("Degraded", "slow"),
            at(1),
        );
        set.manage_at(&mut conditions, at(2)).mark_true("A");

        assert!(conditions.get("Ready").unwrap().is_true());
    }

    #[test]
    fn test_one_manager_uses_one_timestamp() {
        let set = ConditionSet::living(["A", "B"]);
        let mut conditions = Conditions::new();
        {
            let mut manager = set.manage_at(&mut conditions, at(7));
            manager.initialize_conditions();
            manager.mark_false("A", "x", "");
        }
        assert!(conditions
            .iter()
            .all(|c| c.last_transition_time == Some(at(7))));
    }
}
