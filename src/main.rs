// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use kube::{Client, CustomResourceExt};
use tracing::{info, warn};

use used_api_versions::config::Config;
use used_api_versions::kubernetes::get_server_version;
use used_api_versions::reconcilers::UsedApiVersionsReconciler;
use used_api_versions::types::used_api_versions::UsedApiVersions;

#[tokio::main]
async fn main() -> Result<()> {
    // `used-api-versions crd` prints the CustomResourceDefinition for installation
    if std::env::args().nth(1).as_deref() == Some("crd") {
        print!("{}", serde_yaml::to_string(&UsedApiVersions::crd())?);
        return Ok(());
    }

    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting used-api-versions operator");

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: versions_file={}, resync_interval={:?}",
        config.versions_file.display(),
        config.resync_interval
    );

    let client = Client::try_default().await?;
    let server_version = get_server_version(&client).await?;
    info!("Connected to Kubernetes cluster running {}", server_version);

    let reconciler = UsedApiVersionsReconciler::new(client, config);
    reconciler.run().await?;

    // This should never be reached as the reconciler runs forever
    warn!("Reconciler stopped unexpectedly");
    Ok(())
}
