// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read deprecation table {path}: {source}")]
    TableRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse deprecation table {origin}: {source}")]
    TableParse {
        origin: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid version {version:?}: {reason}")]
    InvalidVersion { version: String, reason: String },

    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Resource has no namespace: {0}")]
    MissingNamespace(String),
}

impl Error {
    pub(crate) fn invalid_version(version: &str, reason: impl Into<String>) -> Self {
        Error::InvalidVersion {
            version: version.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
