//! CLI definition using clap.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use std::time::Duration;

use clap::Parser;
use janitor_core::{Error, Result};

/// zk-janitor - remove stale cluster data from ZooKeeper
#[derive(Parser, Debug)]
#[command(name = "zk-janitor")]
#[command(version)]
#[command(about = "Removes cluster-data nodes that have no matching cluster-membership node")]
#[command(
    long_about = "zk-janitor lists <root>/cluster-membership and <root>/cluster-data, then deletes every data node whose name has no live membership node. Run it during low-churn windows: a member that re-registers mid-run can lose its data node."
)]
pub struct Cli {
    /// ZooKeeper connection string, e.g. zk1:2181,zk2:2181/myroot
    #[arg(long = "zk", env = "ZK_JANITOR_TARGET", default_value = "localhost")]
    pub zk: String,

    /// Enable debug logs
    #[arg(long, default_value_t = false)]
    pub debug: bool,

    /// Dry run mode, does not actually delete nodes
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Time allowed to establish the ZooKeeper session, in milliseconds
    #[arg(long, value_name = "MS", default_value_t = 5000)]
    pub connect_timeout: u64,

    /// Print the result as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Print full build information and exit
    #[arg(long, default_value_t = false)]
    pub build_info: bool,
}

/// Run-scoped configuration handed to the resolver and reconciler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub target: String,
    pub dry_run: bool,
    pub connect_timeout: Duration,
    pub json: bool,
}

impl Cli {
    /// Validate the flags and turn them into a [`RunConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error for an empty target or a zero connect timeout.
    pub fn into_config(self) -> Result<RunConfig> {
        if self.zk.trim().is_empty() {
            return Err(Error::invalid_target(self.zk, "no hosts given"));
        }
        if self.connect_timeout == 0 {
            return Err(Error::invalid_config("connect timeout must be positive"));
        }

        Ok(RunConfig {
            target: self.zk,
            dry_run: self.dry_run,
            connect_timeout: Duration::from_millis(self.connect_timeout),
            json: self.json,
        })
    }
}
