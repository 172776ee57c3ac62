//! In-memory namespace for tests and local runs.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::client::NamespaceClient;
use crate::error::{Error, Result};

/// A flat map of parent path to ordered child names.
///
/// Listing and deleting can be made to fail for chosen paths, and every
/// delete call is journaled so tests can check what was attempted.
#[derive(Debug, Default)]
pub struct InMemoryNamespace {
    children: RwLock<BTreeMap<String, Vec<String>>>,
    failing_lists: HashSet<String>,
    failing_deletes: HashSet<String>,
    delete_attempts: RwLock<Vec<String>>,
}

impl InMemoryNamespace {
    /// Create an empty namespace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty namespace wrapped in an Arc.
    pub fn new_arc() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Set the children of `path`, replacing any existing ones.
    #[must_use]
    pub fn with_children<I, S>(mut self, path: impl Into<String>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.children
            .get_mut()
            .insert(path.into(), names.into_iter().map(Into::into).collect());
        self
    }

    /// Make every listing of `path` fail.
    #[must_use]
    pub fn fail_list(mut self, path: impl Into<String>) -> Self {
        self.failing_lists.insert(path.into());
        self
    }

    /// Make every delete of `path` fail.
    #[must_use]
    pub fn fail_delete(mut self, path: impl Into<String>) -> Self {
        self.failing_deletes.insert(path.into());
        self
    }

    /// Add a child under `path`, creating the parent if needed.
    pub async fn insert_child(&self, path: &str, name: impl Into<String>) {
        self.children
            .write()
            .await
            .entry(path.to_string())
            .or_default()
            .push(name.into());
    }

    /// Current children of `path`; empty when the path does not exist.
    pub async fn children(&self, path: &str) -> Vec<String> {
        self.children
            .read()
            .await
            .get(path)
            .cloned()
            .unwrap_or_default()
    }

    /// Every path passed to [`NamespaceClient::delete`], in call order.
    pub async fn delete_attempts(&self) -> Vec<String> {
        self.delete_attempts.read().await.clone()
    }
}

#[async_trait]
impl NamespaceClient for InMemoryNamespace {
    async fn list_children(&self, path: &str) -> Result<Vec<String>> {
        if self.failing_lists.contains(path) {
            return Err(Error::listing(path, "injected listing failure"));
        }

        self.children
            .read()
            .await
            .get(path)
            .cloned()
            .ok_or_else(|| Error::listing(path, "node does not exist"))
    }

    async fn delete(&self, path: &str) -> Result<()> {
        self.delete_attempts.write().await.push(path.to_string());

        if self.failing_deletes.contains(path) {
            return Err(Error::deletion(path, "injected delete failure"));
        }

        let (parent, leaf) = path
            .rsplit_once('/')
            .ok_or_else(|| Error::deletion(path, "path has no parent"))?;

        let mut children = self.children.write().await;
        let siblings = children
            .get_mut(parent)
            .ok_or_else(|| Error::deletion(path, "node does not exist"))?;
        let position = siblings
            .iter()
            .position(|name| name == leaf)
            .ok_or_else(|| Error::deletion(path, "node does not exist"))?;
        siblings.remove(position);
        Ok(())
    }
}
