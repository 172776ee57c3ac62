//! Integration tests for stale node reconciliation.
//!
//! These tests verify that:
//! - Orphaned data nodes are found and removed, membership is never written
//! - Dry runs leave the namespace untouched and report the same count
//! - A second run converges to zero removals
//! - Listing and delete failures abort the run

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use janitor_reconciler::{
    resolve, Error, InMemoryNamespace, Reconciler, ReconcilerConfig, DATA_NODE, MEMBERSHIP_NODE,
};

fn namespace(root: &str, members: &[&str], data: &[&str]) -> Arc<InMemoryNamespace> {
    Arc::new(
        InMemoryNamespace::new()
            .with_children(format!("{root}/{MEMBERSHIP_NODE}"), members.iter().copied())
            .with_children(format!("{root}/{DATA_NODE}"), data.iter().copied()),
    )
}

/// # GIVEN
/// Every data node has a live membership node
///
/// # WHEN
/// A live run reconciles the namespace
///
/// # THEN
/// Nothing is deleted and the summary says so
#[tokio::test]
async fn test_no_staleness() {
    let ns = namespace("", &["x", "y"], &["x", "y"]);
    let reconciler = Reconciler::new(ns.clone(), ReconcilerConfig::default());

    let report = reconciler.reconcile("").await.unwrap();

    assert!(report.is_clean());
    assert_eq!(report.summary(), "no stale nodes found");
    assert!(ns.delete_attempts().await.is_empty());
}

/// # GIVEN
/// Membership is empty and two data nodes remain
///
/// # WHEN
/// A live run reconciles the namespace
///
/// # THEN
/// Both data nodes are deleted and the count is 2
#[tokio::test]
async fn test_full_staleness() {
    let ns = namespace("", &[], &["x", "y"]);
    let reconciler = Reconciler::new(ns.clone(), ReconcilerConfig::default());

    let report = reconciler.reconcile("").await.unwrap();

    assert_eq!(report.count(), 2);
    assert_eq!(report.removed, 2);
    assert_eq!(report.summary(), "removed 2 stale nodes in cluster-data");
    assert_eq!(
        ns.delete_attempts().await,
        ["/cluster-data/x", "/cluster-data/y"]
    );
    assert!(ns.children("/cluster-data").await.is_empty());
}

/// # GIVEN
/// M = {x}, D = {x, y, z} and deleting y fails
///
/// # WHEN
/// A live run reconciles the namespace
///
/// # THEN
/// The run aborts at y, z is never attempted, no count is reported
#[tokio::test]
async fn test_partial_staleness_with_fatal_delete() {
    let ns = Arc::new(
        InMemoryNamespace::new()
            .with_children("/cluster-membership", ["x"])
            .with_children("/cluster-data", ["x", "y", "z"])
            .fail_delete("/cluster-data/y"),
    );
    let reconciler = Reconciler::new(ns.clone(), ReconcilerConfig::default());

    let result = reconciler.reconcile("").await;

    match result {
        Err(Error::Deletion {
            path,
            removed_before,
            ..
        }) => {
            assert_eq!(path, "/cluster-data/y");
            assert_eq!(removed_before, 0);
        }
        other => panic!("expected deletion error, got {other:?}"),
    }
    assert_eq!(ns.delete_attempts().await, ["/cluster-data/y"]);
    assert_eq!(ns.children("/cluster-data").await, ["x", "y", "z"]);
}

/// # GIVEN
/// A namespace with orphans
///
/// # WHEN
/// Reconcile runs twice with no activity in between
///
/// # THEN
/// The second run removes nothing
#[tokio::test]
async fn test_second_run_is_idempotent() {
    let ns = namespace("/app", &["a", "c"], &["a", "b", "c", "d"]);
    let reconciler = Reconciler::new(ns.clone(), ReconcilerConfig::default());

    let first = reconciler.reconcile("/app").await.unwrap();
    let second = reconciler.reconcile("/app").await.unwrap();

    assert_eq!(first.stale, ["b", "d"]);
    assert_eq!(second.count(), 0);
    assert_eq!(ns.children("/app/cluster-data").await, ["a", "c"]);
}

/// # GIVEN
/// A converged namespace where a member then crashes and leaves data behind
///
/// # WHEN
/// Reconcile runs again
///
/// # THEN
/// Only the new divergence is removed
#[tokio::test]
async fn test_new_divergence_after_convergence() {
    let ns = namespace("/app", &["a"], &["a"]);
    let reconciler = Reconciler::new(ns.clone(), ReconcilerConfig::default());

    assert!(reconciler.reconcile("/app").await.unwrap().is_clean());

    ns.insert_child("/app/cluster-data", "crashed").await;
    let report = reconciler.reconcile("/app").await.unwrap();

    assert_eq!(report.stale, ["crashed"]);
    assert_eq!(ns.children("/app/cluster-data").await, ["a"]);
}

/// # GIVEN
/// A namespace with orphans
///
/// # WHEN
/// A dry run and then a live run reconcile it
///
/// # THEN
/// The dry run mutates nothing and both runs report the same count
#[tokio::test]
async fn test_dry_run_matches_live_count() {
    let ns = namespace("/app", &["a"], &["a", "b", "c"]);
    let before = ns.children("/app/cluster-data").await;

    let dry = Reconciler::new(ns.clone(), ReconcilerConfig::dry_run())
        .reconcile("/app")
        .await
        .unwrap();
    assert_eq!(ns.children("/app/cluster-data").await, before);
    assert!(ns.delete_attempts().await.is_empty());

    let live = Reconciler::new(ns.clone(), ReconcilerConfig::default())
        .reconcile("/app")
        .await
        .unwrap();

    assert_eq!(dry.count(), live.count());
    assert_eq!(dry.stale, live.stale);
}

/// # GIVEN
/// The data path does not exist
///
/// # WHEN
/// Reconcile runs, in dry-run mode
///
/// # THEN
/// The listing error surfaces with the data path
#[tokio::test]
async fn test_missing_data_path_fails_even_in_dry_run() {
    let ns = Arc::new(InMemoryNamespace::new().with_children("/cluster-membership", ["a"]));
    let reconciler = Reconciler::new(ns, ReconcilerConfig::dry_run());

    let err = reconciler.reconcile("").await.unwrap_err();

    assert!(matches!(err, Error::Listing { .. }));
    assert_eq!(err.path(), Some("/cluster-data"));
}

/// # GIVEN
/// A connection target carrying a root
///
/// # WHEN
/// The resolved root drives reconciliation
///
/// # THEN
/// Only nodes under that root are considered
#[tokio::test]
async fn test_resolved_root_scopes_reconciliation() {
    let address = resolve("zk1,zk2:2182/tenant");
    let ns = Arc::new(
        InMemoryNamespace::new()
            .with_children("/tenant/cluster-membership", ["a"])
            .with_children("/tenant/cluster-data", ["a", "b"])
            .with_children("/cluster-membership", Vec::<String>::new())
            .with_children("/cluster-data", ["untouched"]),
    );
    let reconciler = Reconciler::new(ns.clone(), ReconcilerConfig::default());

    let report = reconciler.reconcile(address.root()).await.unwrap();

    assert_eq!(address.connect_string(), "zk1:2181,zk2:2182");
    assert_eq!(report.data_path, "/tenant/cluster-data");
    assert_eq!(report.stale, ["b"]);
    assert_eq!(ns.children("/cluster-data").await, ["untouched"]);
}
