//! ZooKeeper-backed [`NamespaceClient`].

use std::time::Duration;

use async_trait::async_trait;
use janitor_reconciler::{Error, NamespaceAddress, NamespaceClient, Result};
use tracing::{debug, info};

/// A single ZooKeeper session. The session closes when the value is dropped.
pub struct ZkNamespace {
    client: zookeeper_client::Client,
    cluster: String,
}

impl ZkNamespace {
    /// Establish a session with the hosts of `address`.
    ///
    /// No chroot is applied: the root prefix stays part of every path the
    /// reconciler builds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Connection`] when the session cannot be established
    /// within `timeout`.
    pub async fn connect(address: &NamespaceAddress, timeout: Duration) -> Result<Self> {
        let cluster = address.connect_string();
        info!(%address, "Connecting to ZooKeeper");

        let client = tokio::time::timeout(timeout, zookeeper_client::Client::connect(&cluster))
            .await
            .map_err(|_| Error::connection(&cluster, format!("timed out after {timeout:?}")))?
            .map_err(|e| Error::connection(&cluster, e.to_string()))?;

        debug!(cluster = %cluster, "Session established");
        Ok(Self { client, cluster })
    }
}

impl Drop for ZkNamespace {
    fn drop(&mut self) {
        debug!(cluster = %self.cluster, "Closing ZooKeeper session");
    }
}

#[async_trait]
impl NamespaceClient for ZkNamespace {
    async fn list_children(&self, path: &str) -> Result<Vec<String>> {
        self.client
            .list_children(path)
            .await
            .map_err(|e| Error::listing(path, e.to_string()))
    }

    async fn delete(&self, path: &str) -> Result<()> {
        self.client
            .delete(path, None)
            .await
            .map_err(|e| Error::deletion(path, e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::panic)]

    use super::*;
    use janitor_reconciler::resolve;

    #[tokio::test]
    async fn test_unreachable_cluster_is_a_connection_error() {
        let address = resolve("127.0.0.1:1");
        let result = ZkNamespace::connect(&address, Duration::from_millis(200)).await;

        match result {
            Err(Error::Connection { target, .. }) => assert_eq!(target, "127.0.0.1:1"),
            Err(other) => panic!("expected connection error, got {other}"),
            Ok(_) => panic!("connected to a closed port"),
        }
    }
}
