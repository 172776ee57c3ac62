//! Core types shared across the zk-janitor workspace.
//!
//! - [`Error`] / [`Result`]: failures that are not tied to the coordination
//!   service itself (run configuration).
//! - [`ResultExt`], [`GenericResultExt`]: combinators that keep error handling
//!   free of `unwrap`/`expect`.
//! - [`BuildInfo`]: version and build metadata reported by the CLI.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod build_info;
pub mod error;
pub mod result;

pub use build_info::BuildInfo;
pub use error::Error;
pub use result::{GenericResultExt, Result, ResultExt};
