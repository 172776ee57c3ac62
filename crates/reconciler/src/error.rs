//! Error types for the reconciler crate.

use thiserror::Error;

/// Result type alias for reconciler operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Reconciler error types.
///
/// Every variant is fatal to a run. Nothing is retried; the tool is re-run
/// once the operator has dealt with the cause.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No session could be established with the namespace service.
    #[error("failed to connect to '{target}': {reason}")]
    Connection { target: String, reason: String },

    /// Children of a membership or data path could not be enumerated.
    #[error("failed to list children of '{path}': {reason}")]
    Listing { path: String, reason: String },

    /// A stale data node could not be deleted. Deletions that already
    /// happened in the same run are not undone.
    #[error("failed to delete '{path}' after removing {removed_before} stale node(s): {reason}")]
    Deletion {
        path: String,
        removed_before: usize,
        reason: String,
    },

    /// Invalid configuration.
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl Error {
    /// Create a connection error.
    pub fn connection(target: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Connection {
            target: target.into(),
            reason: reason.into(),
        }
    }

    /// Create a listing error.
    pub fn listing(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Listing {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a deletion error with no prior removals recorded.
    pub fn deletion(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Deletion {
            path: path.into(),
            removed_before: 0,
            reason: reason.into(),
        }
    }

    /// Create an invalid config error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Record how many stale nodes were removed before a deletion failed.
    #[must_use]
    pub fn with_removed_before(self, count: usize) -> Self {
        match self {
            Self::Deletion { path, reason, .. } => Self::Deletion {
                path,
                removed_before: count,
                reason,
            },
            other => other,
        }
    }

    /// The namespace path the failure refers to, if any.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Listing { path, .. } | Self::Deletion { path, .. } => Some(path),
            Self::Connection { .. } | Self::InvalidConfig { .. } => None,
        }
    }
}
