//! # Reconciler Types
//!
//! Reconciler context and error types.

use crate::conditions::ConditionSet;
use crate::config::ControllerConfig;
use kube::Client;
use std::sync::Arc;
use thiserror::Error;

/// Reconciler context shared by every reconciliation of one resource kind
///
/// The condition set is handed in at construction instead of being looked up from
/// a registry, so each controller decides which dependents its kind declares.
/// Clones share the same condition set.
#[derive(Clone)]
pub struct Reconciler {
    pub client: Client,
    pub condition_set: Arc<ConditionSet>,
    pub config: ControllerConfig,
}

impl std::fmt::Debug for Reconciler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reconciler")
            .field("condition_set", &self.condition_set)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Reconciler {
    pub fn new(
        client: Client,
        condition_set: impl Into<Arc<ConditionSet>>,
        config: ControllerConfig,
    ) -> Self {
        Self {
            client,
            condition_set: condition_set.into(),
            config,
        }
    }
}

/// Errors raised while persisting a status
#[derive(Debug, Error)]
pub enum StatusError {
    #[error("resource has no metadata.name")]
    MissingName,
    #[error("failed to serialize status: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to patch status for {namespace}/{name}: {source}")]
    Kube {
        namespace: String,
        name: String,
        #[source]
        source: kube::Error,
    },
}
