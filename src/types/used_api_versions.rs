// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::deprecation::{evaluate, DeprecationTable, EvaluationResult};
use kube::CustomResource;
use serde::{Deserialize, Serialize};

#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[kube(group = "api-version.wayfair.com", version = "v1beta1", kind = "UsedApiVersions")]
#[kube(plural = "usedapiversions", shortname = "uav")]
#[kube(namespaced)]
#[kube(status = "UsedApiVersionsStatus")]
#[kube(printcolumn = r#"{"name":"Kind","type":"string","jsonPath":".kind"}"#)]
#[kube(printcolumn = r#"{"name":"Age","type":"date","jsonPath":".metadata.creationTimestamp"}"#)]
#[kube(printcolumn = r#"{"name":"Deprecated","type":"integer","jsonPath":".status.finalStatus.deprecated"}"#)]
#[kube(printcolumn = r#"{"name":"Removed","type":"integer","jsonPath":".status.finalStatus.removed"}"#)]
#[kube(printcolumn = r#"{"name":"Removed-NEXT-Release","type":"integer","jsonPath":".status.finalStatus.removedInNextRelease","priority":10}"#)]
#[kube(printcolumn = r#"{"name":"Removed-NEXT-Two-Releases","type":"integer","jsonPath":".status.finalStatus.removedInNextTwoReleases","priority":10}"#)]
#[serde(rename_all = "camelCase")]
pub struct UsedApiVersionsSpec {
    /// API versions used by workloads, supplied by whoever creates the resource
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub used_api_versions: Vec<ApiVersionMeta>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiVersionMeta {
    #[serde(default)]
    pub api_version: String,
    #[serde(default)]
    pub kind: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UsedApiVersionsStatus {
    /// Serialized even when empty, so a merge patch replaces earlier entries with `[]`
    #[serde(default)]
    pub api_versions_status: Vec<ApiVersionStatus>,
    #[serde(default)]
    pub final_status: FinalStatus,
}

/// Number of used API versions in each state
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FinalStatus {
    pub deprecated: u32,
    pub removed: u32,
    pub removed_in_next_release: u32,
    pub removed_in_next_two_releases: u32,
}

impl FinalStatus {
    pub fn from_entries(entries: &[ApiVersionStatus]) -> Self {
        let mut status = Self::default();
        for entry in entries {
            status.deprecated += u32::from(entry.deprecated);
            status.removed += u32::from(entry.removed);
            status.removed_in_next_release += u32::from(entry.removed_in_next_release);
            status.removed_in_next_two_releases +=
                u32::from(entry.removed_in_next_two_releases);
        }
        status
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiVersionStatus {
    pub api_version: String,
    pub kind: String,
    pub deprecated: bool,
    pub removed: bool,
    pub deprecated_in_version: String,
    pub removed_in_version: String,
    pub replacement_api: String,
    pub removed_in_next_release: bool,
    pub removed_in_next_two_releases: bool,
}

impl From<EvaluationResult> for ApiVersionStatus {
    fn from(result: EvaluationResult) -> Self {
        Self {
            api_version: result.api_version,
            kind: result.kind,
            deprecated: result.deprecated,
            removed: result.removed,
            deprecated_in_version: result.deprecated_in_version,
            removed_in_version: result.removed_in_version,
            replacement_api: result.replacement_api,
            removed_in_next_release: result.removed_in_next_release,
            removed_in_next_two_releases: result.removed_in_next_two_releases,
        }
    }
}

impl UsedApiVersionsSpec {
    /// Evaluate every listed API version, in the order they are listed
    pub fn build_status(
        &self,
        cluster_version: &str,
        table: &DeprecationTable,
    ) -> UsedApiVersionsStatus {
        let api_versions_status: Vec<ApiVersionStatus> = self
            .used_api_versions
            .iter()
            .map(|meta| {
                evaluate(&meta.kind, &meta.api_version, cluster_version, table).into()
            })
            .collect();

        UsedApiVersionsStatus {
            final_status: FinalStatus::from_entries(&api_versions_status),
            api_versions_status,
        }
    }
}
