// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes API helpers for server version discovery and status updates.

pub mod status;
pub mod version;

pub use status::patch_status;
pub use version::get_server_version;
