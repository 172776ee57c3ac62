//! Namespace client abstraction.
//!
//! The reconciler needs exactly two capabilities from the coordination
//! service. Session establishment belongs to the concrete client.

use async_trait::async_trait;

use crate::error::Result;

/// Operations the reconciler issues against the namespace.
#[async_trait]
pub trait NamespaceClient: Send + Sync {
    /// Leaf names of the children of `path`, in the order the service
    /// returns them.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Listing`] when the path cannot be enumerated.
    async fn list_children(&self, path: &str) -> Result<Vec<String>>;

    /// Delete the node at `path` whatever its current version.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Deletion`] when the node cannot be removed,
    /// including when it no longer exists.
    async fn delete(&self, path: &str) -> Result<()>;
}
