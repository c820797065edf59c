// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Reference table of deprecated and removed API versions.

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;
use tracing::{debug, instrument};

/// One row of the reference table
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeprecationRecord {
    #[serde(default, deserialize_with = "empty_if_null")]
    pub kind: String,
    /// API version as written in manifests, e.g. `extensions/v1beta1`
    #[serde(rename = "version", default, deserialize_with = "empty_if_null")]
    pub api_version: String,
    /// Empty when the API version was never deprecated
    #[serde(default, deserialize_with = "empty_if_null")]
    pub deprecated_in_version: String,
    /// Empty when the API version was never removed
    #[serde(default, deserialize_with = "empty_if_null")]
    pub removed_in_version: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub replacement_api: String,
}

impl DeprecationRecord {
    pub fn matches(&self, kind: &str, api_version: &str) -> bool {
        self.kind == kind && self.api_version == api_version
    }
}

fn empty_if_null<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Both layouts found in deployed tables: a bare list, or a list nested under
/// a `deprecatedVersions` key.
#[derive(Deserialize)]
#[serde(untagged)]
enum TableDocument {
    List(Vec<DeprecationRecord>),
    Nested {
        #[serde(
            rename = "deprecatedVersions",
            alias = "deprecated-versions",
            alias = "deprecated_versions"
        )]
        deprecated_versions: Vec<DeprecationRecord>,
    },
}

/// The deprecation records in file order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeprecationTable {
    records: Vec<DeprecationRecord>,
}

impl DeprecationTable {
    pub fn new(records: Vec<DeprecationRecord>) -> Self {
        Self { records }
    }

    /// Read and parse the table at `path`. Every call reads the file again.
    #[instrument]
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::TableRead {
            path: path.display().to_string(),
            source,
        })?;

        let table = Self::parse(&content, &path.display().to_string())?;
        debug!("Loaded {} deprecation records", table.records.len());
        Ok(table)
    }

    /// Parse a table from in-memory YAML
    pub fn from_yaml(content: &str) -> Result<Self> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, origin: &str) -> Result<Self> {
        let document: TableDocument =
            serde_yaml::from_str(content).map_err(|source| Error::TableParse {
                origin: origin.to_string(),
                source,
            })?;

        let records = match document {
            TableDocument::List(records) => records,
            TableDocument::Nested {
                deprecated_versions,
            } => deprecated_versions,
        };
        Ok(Self { records })
    }

    pub fn records(&self) -> &[DeprecationRecord] {
        &self.records
    }

    /// First record matching `kind` and `api_version`. Later duplicates are
    /// never consulted.
    pub fn find(&self, kind: &str, api_version: &str) -> Option<&DeprecationRecord> {
        self.records.iter().find(|r| r.matches(kind, api_version))
    }
}
