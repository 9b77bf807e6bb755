//! # Condition Parse Errors
//!
//! Mutations on a condition store never fail. The only fallible operations are
//! parsing statuses and severities from their string forms.

use thiserror::Error;

/// A string that is not one of "True", "False", "Unknown"
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid condition status {value:?}: expected True, False or Unknown")]
pub struct ParseConditionStatusError {
    pub value: String,
}

/// A string that is not one of "Error", "Warning", "Info" (or empty)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid condition severity {value:?}: expected Error, Warning or Info")]
pub struct ParseSeverityError {
    pub value: String,
}
