// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! UsedApiVersions reconciler - evaluates listed API versions against the
//! running cluster version and writes the result to the status.

use crate::config::Config;
use crate::deprecation::DeprecationTable;
use crate::error::{Error, Result};
use crate::kubernetes::{get_server_version, patch_status};
use crate::types::used_api_versions::UsedApiVersions;
use futures::StreamExt;
use kube::{
    runtime::{controller::Action, Controller},
    Api, Client, ResourceExt,
};
use kube_runtime::watcher::Config as WatcherConfig;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

pub struct UsedApiVersionsReconciler {
    client: Client,
    config: Config,
}

impl UsedApiVersionsReconciler {
    pub fn new(client: Client, config: Config) -> Self {
        Self { client, config }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let resources: Api<UsedApiVersions> = Api::all(self.client.clone());
        let context = Arc::new(self);

        Controller::new(resources, WatcherConfig::default())
            .run(reconcile, error_policy, context)
            .for_each(|res| async move {
                match res {
                    Ok(o) => debug!("Reconciled UsedApiVersions: {:?}", o),
                    Err(e) => warn!("Reconciliation error: {:?}", e),
                }
            })
            .await;

        Ok(())
    }
}

async fn reconcile(
    resource: Arc<UsedApiVersions>,
    ctx: Arc<UsedApiVersionsReconciler>,
) -> Result<Action> {
    let name = resource.name_any();
    let namespace = resource
        .namespace()
        .ok_or_else(|| Error::MissingNamespace(name.clone()))?;

    debug!("Reconciling UsedApiVersions: {}/{}", namespace, name);

    let cluster_version = get_server_version(&ctx.client).await?;
    // Read on every reconcile so edits to the table are picked up without a restart
    let table = DeprecationTable::load(&ctx.config.versions_file)?;
    let status = resource.spec.build_status(&cluster_version, &table);

    if resource.status.as_ref() == Some(&status) {
        debug!("Status of {}/{} is up to date", namespace, name);
    } else {
        info!(
            "Evaluated {} API versions of {}/{} against cluster version {}",
            status.api_versions_status.len(),
            namespace,
            name,
            cluster_version
        );
        patch_status(&ctx.client, &namespace, &name, &status).await?;
    }

    // Recheck periodically, the cluster may have been upgraded
    Ok(Action::requeue(ctx.config.resync_interval))
}

fn error_policy(
    _resource: Arc<UsedApiVersions>,
    error: &Error,
    ctx: Arc<UsedApiVersionsReconciler>,
) -> Action {
    error!("Reconciliation error: {}", error);
    Action::requeue(ctx.config.error_requeue)
}
