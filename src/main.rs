//! # zk-janitor
//!
//! Deletes stale `cluster-data` nodes from ZooKeeper.
//!
//! ## Run Sequence
//!
//! 1. **Parse flags** - build an explicit run configuration
//! 2. **Resolve target** - split hosts and optional root
//! 3. **Connect** - one session for the whole run
//! 4. **Reconcile** - list membership and data, delete orphans
//! 5. **Report** - one-line summary on stdout, or JSON with `--json`
//!
//! ## Error Handling
//!
//! Any connection, listing or delete failure ends the run with a non-zero
//! exit code and the full cause chain. Nothing is retried; re-running is
//! always safe.

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]

use anyhow::{Context, Result};
use clap::Parser;
use janitor_core::{BuildInfo, ResultExt};
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use zk_janitor::cli::Cli;
use zk_janitor::run::{render_report, run};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.build_info {
        return print_build_info(cli.json);
    }

    init_tracing(cli.debug);
    if cli.debug {
        debug!("Debug mode enabled");
    }

    let config = cli
        .into_config()
        .inspect_error(|e| error!(error = %e, "Invalid command line"))
        .context("Invalid command line")?;

    let report = run(&config).await?;

    // Printed directly so a quiet RUST_LOG cannot hide the result.
    println!("{}", render_report(&report, config.json)?);

    Ok(())
}

/// Initialize tracing subscriber; `RUST_LOG` overrides the `--debug` level.
fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn print_build_info(json: bool) -> Result<()> {
    let info = BuildInfo::current(env!("CARGO_PKG_VERSION"));

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("{info}");
    }

    Ok(())
}
