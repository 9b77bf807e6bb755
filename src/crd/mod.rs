//! # Custom Resource Definitions
//!
//! The `TestResource` fixture: a minimal custom resource whose status composes a
//! condition store. It is the reference consumer of the condition-set model and
//! what the status writer and `crdgen` operate on.

mod status;

pub use status::TestResourceStatus;

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// TestResource Custom Resource Definition
///
/// # Example
///
/// ```yaml
/// apiVersion: testing.reconciler.runtime/v1
/// kind: TestResource
/// metadata:
///   name: sample
///   namespace: default
/// spec:
///   fields:
///     color: blue
/// ```
#[derive(CustomResource, Debug, Clone, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[kube(
    kind = "TestResource",
    group = "testing.reconciler.runtime",
    version = "v1",
    namespaced,
    status = "TestResourceStatus",
    printcolumn = r#"{"name":"Ready", "type":"string", "jsonPath":".status.conditions[?(@.type==\"Ready\")].status"}, {"name":"Reason", "type":"string", "jsonPath":".status.conditions[?(@.type==\"Ready\")].reason"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct TestResourceSpec {
    /// Arbitrary key/value data carried by the resource
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, String>,
}
