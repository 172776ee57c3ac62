//! Stale node reconciliation for a hierarchical coordination namespace.
//!
//! Clusters register ephemeral membership nodes under
//! `<root>/cluster-membership` and persist per-member data under
//! `<root>/cluster-data`. Members that crash or get evicted leave their data
//! node behind. This crate finds those orphans and removes them:
//!
//! 1. [`resolve`] turns a connection target such as `zk1:2181,zk2/app` into a
//!    [`NamespaceAddress`] (host list plus optional root prefix).
//! 2. [`Reconciler::reconcile`] lists both sibling paths through a
//!    [`NamespaceClient`], computes the data nodes with no membership
//!    counterpart and deletes them, or only reports them in dry-run mode.
//!
//! Membership is the source of truth. A second run with no intervening
//! cluster activity finds nothing to remove.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! use janitor_reconciler::{resolve, InMemoryNamespace, Reconciler, ReconcilerConfig};
//!
//! # async fn run() -> janitor_reconciler::Result<()> {
//! let address = resolve("localhost:2181/app");
//! let namespace = InMemoryNamespace::new()
//!     .with_children("/app/cluster-membership", ["node-a"])
//!     .with_children("/app/cluster-data", ["node-a", "node-b"]);
//!
//! let reconciler = Reconciler::new(Arc::new(namespace), ReconcilerConfig::default());
//! let report = reconciler.reconcile(address.root()).await?;
//! assert_eq!(report.count(), 1);
//! # Ok(())
//! # }
//! ```

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod client;
pub mod error;
pub mod memory;
pub mod namespace;
pub mod reconciler;
pub mod types;

// Re-export main types
pub use client::NamespaceClient;
pub use error::{Error, Result};
pub use memory::InMemoryNamespace;
pub use namespace::{resolve, NamespaceAddress, DEFAULT_PORT};
pub use reconciler::{find_stale, Reconciler, ReconcilerBuilder, ReconcilerConfig};
pub use types::{ReconcileReport, DATA_NODE, MEMBERSHIP_NODE};
