// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::defaults;
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Operator configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Reference table of deprecated API versions, read on every reconcile
    pub versions_file: PathBuf,
    pub resync_interval: Duration,
    pub error_requeue: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let versions_file = lookup("VERSIONS_FILE")
            .unwrap_or_else(|| defaults::VERSIONS_FILE.to_string())
            .into();
        let resync_interval = seconds(
            &lookup,
            "RESYNC_INTERVAL_SECS",
            defaults::RESYNC_INTERVAL_SECS,
        )?;
        let error_requeue = seconds(&lookup, "ERROR_REQUEUE_SECS", defaults::ERROR_REQUEUE_SECS)?;

        Ok(Config {
            versions_file,
            resync_interval,
            error_requeue,
        })
    }
}

fn seconds(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: u64) -> Result<Duration> {
    let secs = match lookup(key) {
        Some(value) => value.parse().with_context(|| {
            format!("{} must be a number of seconds, got {:?}", key, value)
        })?,
        None => default,
    };
    Ok(Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.versions_file, PathBuf::from("config/versions.yaml"));
        assert_eq!(config.resync_interval, Duration::from_secs(3600));
        assert_eq!(config.error_requeue, Duration::from_secs(60));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("VERSIONS_FILE", "/etc/used-api-versions/versions.yaml"),
            ("RESYNC_INTERVAL_SECS", "600"),
            ("ERROR_REQUEUE_SECS", "5"),
        ]))
        .unwrap();

        assert_eq!(
            config.versions_file,
            PathBuf::from("/etc/used-api-versions/versions.yaml")
        );
        assert_eq!(config.resync_interval, Duration::from_secs(600));
        assert_eq!(config.error_requeue, Duration::from_secs(5));
    }

    #[test]
    fn test_invalid_interval() {
        let result = Config::from_lookup(lookup(&[("RESYNC_INTERVAL_SECS", "hourly")]));
        assert!(result.is_err());
    }
}
