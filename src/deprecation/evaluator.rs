// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Deprecation status of a Kind/APIVersion pair against a cluster version.
//!
//! Evaluation never fails: a version string that cannot be parsed, whether it
//! comes from the cluster or from the table, leaves the affected flag `false`.

use crate::deprecation::table::DeprecationTable;
use crate::deprecation::version::{increment_minor, is_at_least};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::debug;

/// Rendered in place of a missing table value
pub const NOT_AVAILABLE: &str = "n/a";

/// A single evaluation, including where to read the reference table from
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvaluateRequest {
    pub kind: String,
    pub api_version: String,
    pub cluster_version: String,
    pub table_source: PathBuf,
}

/// Replacement and lifecycle versions for a Kind/APIVersion pair
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeprecationInfo {
    pub replacement_api: String,
    pub removed_in_version: String,
    pub deprecated_in_version: String,
}

impl Default for DeprecationInfo {
    fn default() -> Self {
        Self {
            replacement_api: NOT_AVAILABLE.to_string(),
            removed_in_version: NOT_AVAILABLE.to_string(),
            deprecated_in_version: NOT_AVAILABLE.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    pub kind: String,
    pub api_version: String,
    pub deprecated: bool,
    pub removed: bool,
    pub deprecated_in_version: String,
    pub removed_in_version: String,
    pub replacement_api: String,
    pub removed_in_next_release: bool,
    pub removed_in_next_two_releases: bool,
}

impl EvaluationResult {
    /// The result as named string fields, booleans rendered as `"true"`/`"false"`
    pub fn fields(&self) -> BTreeMap<&'static str, String> {
        BTreeMap::from([
            ("kind", self.kind.clone()),
            ("apiVersion", self.api_version.clone()),
            ("deprecated", self.deprecated.to_string()),
            ("removed", self.removed.to_string()),
            ("deprecatedInVersion", self.deprecated_in_version.clone()),
            ("removedInVersion", self.removed_in_version.clone()),
            ("replacementApi", self.replacement_api.clone()),
            ("removedInNextRelease", self.removed_in_next_release.to_string()),
            (
                "removedInNextTwoReleases",
                self.removed_in_next_two_releases.to_string(),
            ),
        ])
    }
}

/// `version >= threshold`, with unparsable input counted as not reached
fn reached(version: &str, threshold: &str) -> bool {
    match is_at_least(version, threshold) {
        Ok(reached) => reached,
        Err(e) => {
            debug!("Cannot compare {:?} with {:?}: {}", version, threshold, e);
            false
        }
    }
}

/// Returns true if the API version of `kind` is deprecated in `cluster_version`
pub fn is_deprecated(
    kind: &str,
    api_version: &str,
    cluster_version: &str,
    table: &DeprecationTable,
) -> bool {
    table
        .find(kind, api_version)
        .filter(|r| !r.deprecated_in_version.is_empty())
        .is_some_and(|r| reached(cluster_version, &r.deprecated_in_version))
}

/// Returns true if the API version of `kind` is no longer served in `cluster_version`
pub fn is_removed(
    kind: &str,
    api_version: &str,
    cluster_version: &str,
    table: &DeprecationTable,
) -> bool {
    table
        .find(kind, api_version)
        .filter(|r| !r.removed_in_version.is_empty())
        .is_some_and(|r| reached(cluster_version, &r.removed_in_version))
}

pub fn lookup_info(kind: &str, api_version: &str, table: &DeprecationTable) -> DeprecationInfo {
    let Some(record) = table.find(kind, api_version) else {
        return DeprecationInfo::default();
    };

    let or_not_available = |value: &str| {
        if value.is_empty() {
            NOT_AVAILABLE.to_string()
        } else {
            value.to_string()
        }
    };

    DeprecationInfo {
        replacement_api: or_not_available(&record.replacement_api),
        removed_in_version: or_not_available(&record.removed_in_version),
        deprecated_in_version: or_not_available(&record.deprecated_in_version),
    }
}

/// Whether the API version is removed `steps` minor releases after `cluster_version`
fn removed_after(
    kind: &str,
    api_version: &str,
    cluster_version: &str,
    steps: u64,
    table: &DeprecationTable,
) -> bool {
    match increment_minor(cluster_version, steps) {
        Ok(projected) => is_removed(kind, api_version, &projected, table),
        Err(e) => {
            debug!("No projection for {:?} +{}: {}", cluster_version, steps, e);
            false
        }
    }
}

/// Full deprecation status of `kind`/`api_version` now and one and two minor
/// releases ahead.
pub fn evaluate(
    kind: &str,
    api_version: &str,
    cluster_version: &str,
    table: &DeprecationTable,
) -> EvaluationResult {
    let info = lookup_info(kind, api_version, table);

    EvaluationResult {
        kind: kind.to_string(),
        api_version: api_version.to_string(),
        deprecated: is_deprecated(kind, api_version, cluster_version, table),
        removed: is_removed(kind, api_version, cluster_version, table),
        deprecated_in_version: info.deprecated_in_version,
        removed_in_version: info.removed_in_version,
        replacement_api: info.replacement_api,
        removed_in_next_release: removed_after(kind, api_version, cluster_version, 1, table),
        removed_in_next_two_releases: removed_after(kind, api_version, cluster_version, 2, table),
    }
}

/// Load the reference table named by the request and evaluate against it.
///
/// Only table loading can fail.
pub fn check_deprecations(request: &EvaluateRequest) -> Result<EvaluationResult> {
    let table = DeprecationTable::load(&request.table_source)?;
    Ok(evaluate(
        &request.kind,
        &request.api_version,
        &request.cluster_version,
        &table,
    ))
}
