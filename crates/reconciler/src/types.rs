//! Core types for the reconciler.

use std::fmt;

use serde::Serialize;

/// Relative path holding one ephemeral node per live participant.
pub const MEMBERSHIP_NODE: &str = "cluster-membership";

/// Relative path holding one persistent data node per participant.
pub const DATA_NODE: &str = "cluster-data";

/// Outcome of a completed reconciliation run.
///
/// `stale` lists the orphaned data node names in data listing order. The
/// count is the same in dry-run and live mode so the two can be compared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReconcileReport {
    /// Absolute path of the data collection that was reconciled.
    pub data_path: String,
    /// Stale data node names, in listing order.
    pub stale: Vec<String>,
    /// Number of nodes actually deleted (always zero in dry-run mode).
    pub removed: usize,
    /// Whether deletion was withheld.
    pub dry_run: bool,
}

impl ReconcileReport {
    /// Create a report for a run over `data_path`.
    pub fn new(
        data_path: impl Into<String>,
        stale: Vec<String>,
        removed: usize,
        dry_run: bool,
    ) -> Self {
        Self {
            data_path: data_path.into(),
            stale,
            removed,
            dry_run,
        }
    }

    /// Number of stale nodes found.
    pub fn count(&self) -> usize {
        self.stale.len()
    }

    /// True when data and membership already agreed.
    pub fn is_clean(&self) -> bool {
        self.stale.is_empty()
    }

    /// One-line operator summary.
    pub fn summary(&self) -> String {
        match (self.count(), self.dry_run) {
            (0, _) => "no stale nodes found".to_string(),
            (n, false) => format!("removed {n} stale nodes in {DATA_NODE}"),
            (n, true) => {
                format!("found {n} stale nodes in {DATA_NODE} (dry run, nothing removed)")
            }
        }
    }
}

impl fmt::Display for ReconcileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}
