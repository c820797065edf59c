// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// The operator name used as field manager for status patches
pub const OPERATOR_NAME: &str = "used-api-versions";

/// Defaults for values read from the environment
pub mod defaults {
    /// Reference table of deprecated API versions
    pub const VERSIONS_FILE: &str = "config/versions.yaml";
    /// Requeue interval in seconds after a successful reconcile
    pub const RESYNC_INTERVAL_SECS: u64 = 3600;
    /// Requeue interval in seconds after a failed reconcile
    pub const ERROR_REQUEUE_SECS: u64 = 60;
}
