// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Status subresource updates for UsedApiVersions

use crate::constants::OPERATOR_NAME;
use crate::error::Result;
use crate::types::used_api_versions::{UsedApiVersions, UsedApiVersionsStatus};
use kube::{
    api::{Patch, PatchParams},
    Api, Client,
};
use tracing::{info, instrument};

/// Replace the status of a UsedApiVersions resource
#[instrument(skip(client, status))]
pub async fn patch_status(
    client: &Client,
    namespace: &str,
    name: &str,
    status: &UsedApiVersionsStatus,
) -> Result<UsedApiVersions> {
    let api: Api<UsedApiVersions> = Api::namespaced(client.clone(), namespace);
    let params = PatchParams {
        field_manager: Some(OPERATOR_NAME.to_string()),
        ..Default::default()
    };
    let patch = status_patch(status);

    let updated = api.patch_status(name, &params, &Patch::Merge(&patch)).await?;
    info!(
        "Updated status of {}/{}: {} deprecated, {} removed",
        namespace, name, status.final_status.deprecated, status.final_status.removed
    );
    Ok(updated)
}

/// Merge patch body replacing the whole status
fn status_patch(status: &UsedApiVersionsStatus) -> serde_json::Value {
    serde_json::json!({ "status": status })
}
