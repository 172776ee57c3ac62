//! One reconciliation run: resolve, connect, reconcile, release.

use std::sync::Arc;

use anyhow::{Context, Result};
use janitor_core::GenericResultExt;
use janitor_reconciler::{
    resolve, NamespaceAddress, NamespaceClient, ReconcileReport, ReconcilerBuilder,
};
use tracing::error;

use crate::cli::RunConfig;
use crate::zk::ZkNamespace;

/// Run against the ZooKeeper ensemble named by `config.target`.
///
/// The session is acquired before reconciliation and dropped when this
/// function returns, whether the run succeeded or not.
///
/// # Errors
///
/// Fails on connection, listing or deletion errors.
pub async fn run(config: &RunConfig) -> Result<ReconcileReport> {
    let address = resolve(&config.target);

    let namespace = ZkNamespace::connect(&address, config.connect_timeout)
        .await
        .with_context(|| format!("Failed to connect to ZooKeeper at {}", config.target))?;

    reconcile_with(Arc::new(namespace), &address, config).await
}

/// Reconcile through an already-connected client.
///
/// # Errors
///
/// Fails on listing or deletion errors.
pub async fn reconcile_with(
    client: Arc<dyn NamespaceClient>,
    address: &NamespaceAddress,
    config: &RunConfig,
) -> Result<ReconcileReport> {
    let reconciler = ReconcilerBuilder::new()
        .with_client(client)
        .dry_run(config.dry_run)
        .build()?;

    let report = reconciler
        .reconcile(address.root())
        .await
        .tap_err(|e| error!(error = %e, path = ?e.path(), "Reconciliation aborted"))
        .context("Reconciliation failed")?;

    Ok(report)
}

/// Operator-facing output for a finished run: the one-line summary, or the
/// full report as pretty JSON.
///
/// # Errors
///
/// Fails only if the report cannot be serialized.
pub fn render_report(report: &ReconcileReport, json: bool) -> Result<String> {
    if json {
        serde_json::to_string_pretty(report).context("Failed to serialize report")
    } else {
        Ok(report.summary())
    }
}
