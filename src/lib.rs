#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! # zk-janitor
//!
//! Removes `cluster-data` nodes from ZooKeeper that no longer have a live
//! `cluster-membership` counterpart.
//!
//! The algorithm lives in `janitor-reconciler`; this crate adds the CLI, the
//! ZooKeeper session and the run wiring.

pub use janitor_core;
pub use janitor_reconciler;

pub mod cli;
pub mod run;
pub mod zk;
