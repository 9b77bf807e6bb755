//! # Status Management
//!
//! Writes a resource's mutated status back to the API server.
//!
//! The condition store keeps timestamps stable across passes that observe the same
//! state, so an unchanged status compares equal and the patch is skipped. That
//! keeps reconcile passes from generating watch events for themselves.

use crate::controller::reconciler::types::{Reconciler, StatusError};
use crate::crd::{TestResource, TestResourceStatus};
use kube::api::{Patch, PatchParams};
use kube::Api;
use tracing::debug;

/// Whether `status` matches what the resource already carries
pub fn status_unchanged(resource: &TestResource, status: &TestResourceStatus) -> bool {
    resource.status.as_ref() == Some(status)
}

/// Merge patch body for the status subresource
///
/// # Errors
///
/// Returns `StatusError::Serialize` if the status cannot be converted to JSON.
pub fn status_patch(status: &TestResourceStatus) -> Result<serde_json::Value, StatusError> {
    Ok(serde_json::json!({ "status": serde_json::to_value(status)? }))
}

/// Patch `status` onto `resource`
///
/// Skips the API call when nothing changed. A resource deleted mid-pass (404) is
/// not an error.
///
/// # Errors
///
/// - `StatusError::MissingName` if the resource has no `metadata.name`
/// - `StatusError::Serialize` if the status cannot be converted to JSON
/// - `StatusError::Kube` if the API server rejects the patch with anything but 404
pub async fn update_status(
    reconciler: &Reconciler,
    resource: &TestResource,
    status: &TestResourceStatus,
) -> Result<(), StatusError> {
    let name = resource
        .metadata
        .name
        .as_deref()
        .ok_or(StatusError::MissingName)?;
    let namespace = resource.metadata.namespace.as_deref().unwrap_or("default");

    if status_unchanged(resource, status) {
        debug!(
            "Skipping status update for TestResource {}/{} - status unchanged",
            namespace, name
        );
        return Ok(());
    }

    let api: Api<TestResource> = Api::namespaced(reconciler.client.clone(), namespace);
    let patch = status_patch(status)?;

    match api
        .patch_status(
            name,
            &PatchParams::apply(&reconciler.config.field_manager),
            &Patch::Merge(patch),
        )
        .await
    {
        Ok(_) => Ok(()),
        Err(kube::Error::Api(api_err)) if api_err.code == 404 => {
            debug!(
                "TestResource {}/{} was deleted during reconciliation, skipping status update",
                namespace, name
            );
            Ok(())
        }
        Err(source) => Err(StatusError::Kube {
            namespace: namespace.to_string(),
            name: name.to_string(),
            source,
        }),
    }
}
