// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! API server version discovery

use crate::error::Result;
use kube::Client;
use tracing::{debug, instrument};

/// Get the `gitVersion` reported by the API server, e.g. `v1.30.2`
#[instrument(skip(client))]
pub async fn get_server_version(client: &Client) -> Result<String> {
    let info = client.apiserver_version().await?;
    debug!("API server reports version {}", info.git_version);
    Ok(info.git_version)
}
