//! Reconciler implementation.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info};

use crate::client::NamespaceClient;
use crate::error::{Error, Result};
use crate::namespace::join;
use crate::types::{ReconcileReport, DATA_NODE, MEMBERSHIP_NODE};

/// Configuration for the reconciler.
#[derive(Debug, Clone, Default)]
pub struct ReconcilerConfig {
    /// Report stale nodes without deleting them.
    pub dry_run: bool,
}

impl ReconcilerConfig {
    /// Configuration for a dry run.
    pub const fn dry_run() -> Self {
        Self { dry_run: true }
    }
}

/// Data node names with no membership counterpart, in data listing order.
pub fn find_stale(members: &[String], data: &[String]) -> Vec<String> {
    let members: HashSet<&str> = members.iter().map(String::as_str).collect();

    data.iter()
        .filter(|name| !members.contains(name.as_str()))
        .cloned()
        .collect()
}

/// Removes `cluster-data` children that have no `cluster-membership` sibling.
///
/// A run is single-pass and sequential over one client: list membership,
/// list data, then delete each orphan in listing order. The first failure
/// ends the run. There is no re-check before a delete, so a participant that
/// re-registers between listing and deletion loses its data node.
pub struct Reconciler {
    client: Arc<dyn NamespaceClient>,
    config: ReconcilerConfig,
}

impl Reconciler {
    /// Create a new reconciler.
    pub fn new(client: Arc<dyn NamespaceClient>, config: ReconcilerConfig) -> Self {
        Self { client, config }
    }

    /// Reconcile the data collection under `root` against membership.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Listing`] when either collection cannot be listed and
    /// [`Error::Deletion`] when a delete fails. Deletions completed before a
    /// failure stay in effect.
    pub async fn reconcile(&self, root: &str) -> Result<ReconcileReport> {
        let membership_path = join(root, MEMBERSHIP_NODE);
        let data_path = join(root, DATA_NODE);

        info!(
            membership = %membership_path,
            data = %data_path,
            dry_run = self.config.dry_run,
            "Starting reconciliation"
        );

        let members = self.client.list_children(&membership_path).await?;
        let data = self.client.list_children(&data_path).await?;

        debug!(members = members.len(), data = data.len(), "Listed namespace");

        let stale = find_stale(&members, &data);
        for node in &stale {
            debug!(node = %node, "Found stale node");
        }

        let removed = if self.config.dry_run {
            for node in &stale {
                info!(path = %join(&data_path, node), "Dry run, not deleting");
            }
            0
        } else {
            self.remove(&data_path, &stale).await?
        };

        let report = ReconcileReport::new(data_path, stale, removed, self.config.dry_run);
        info!(
            stale = report.count(),
            removed = report.removed,
            "Reconciliation complete"
        );

        Ok(report)
    }

    /// Delete each stale node, stopping at the first failure.
    async fn remove(&self, data_path: &str, stale: &[String]) -> Result<usize> {
        let mut removed = 0usize;

        for node in stale {
            let path = join(data_path, node);
            self.client
                .delete(&path)
                .await
                .map_err(|e| e.with_removed_before(removed))?;
            removed = removed.saturating_add(1);
            debug!(path = %path, "Deleted stale node");
        }

        Ok(removed)
    }

    /// Get the configuration.
    pub fn config(&self) -> &ReconcilerConfig {
        &self.config
    }
}

/// Builder for Reconciler.
#[derive(Default)]
pub struct ReconcilerBuilder {
    client: Option<Arc<dyn NamespaceClient>>,
    config: ReconcilerConfig,
}

impl ReconcilerBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the namespace client.
    #[must_use]
    pub fn with_client(mut self, client: Arc<dyn NamespaceClient>) -> Self {
        self.client = Some(client);
        self
    }

    /// Enable/disable dry-run mode.
    #[must_use]
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.config.dry_run = enabled;
        self
    }

    /// Build the reconciler.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] when no client was given.
    pub fn build(self) -> Result<Reconciler> {
        let client = self
            .client
            .ok_or_else(|| Error::invalid_config("namespace client is required"))?;

        Ok(Reconciler::new(client, self.config))
    }
}
