//! Connection target resolution.
//!
//! A target has the shape `host1:port1,host2:port2,.../optionalRoot`. The
//! host list is normalized the way ZooKeeper clients format server lists and
//! the optional single trailing segment becomes the namespace root.

use std::fmt;

use itertools::Itertools;
use tracing::debug;

/// Port appended to endpoints that do not name one.
pub const DEFAULT_PORT: u16 = 2181;

const PATH_SEPARATOR: char = '/';

/// Hosts plus root prefix that every namespace path is resolved against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceAddress {
    hosts: Vec<String>,
    root: String,
}

impl NamespaceAddress {
    /// Create an address from already-normalized parts.
    pub fn new(hosts: Vec<String>, root: impl Into<String>) -> Self {
        Self {
            hosts,
            root: root.into(),
        }
    }

    /// Host endpoints in target order.
    pub fn hosts(&self) -> &[String] {
        &self.hosts
    }

    /// Root prefix; empty means the namespace root.
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Absolute path of `relative` under the root.
    pub fn path(&self, relative: &str) -> String {
        join(&self.root, relative)
    }

    /// Comma-separated host list as handed to the client library.
    pub fn connect_string(&self) -> String {
        self.hosts.join(",")
    }
}

impl fmt::Display for NamespaceAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hosts=[{}] root={}", self.hosts.join(", "), self.root)
    }
}

/// Split a connection target into hosts and root.
///
/// Only a target with exactly one `/`-delimited suffix yields a root. Any
/// other shape, including `hosts/a/b`, silently resolves to the namespace
/// root (empty string).
pub fn resolve(target: &str) -> NamespaceAddress {
    let segments = target.split(PATH_SEPARATOR).collect_vec();

    let root = match segments.as_slice() {
        [_, suffix] => format!("{PATH_SEPARATOR}{suffix}"),
        [_] => String::new(),
        _ => {
            debug!(
                connection_target = target,
                segments = segments.len(),
                "Target has more than one path segment, using namespace root"
            );
            String::new()
        }
    };

    let hosts = segments
        .first()
        .map(|hosts| format_servers(hosts.split(',')))
        .unwrap_or_default();

    NamespaceAddress { hosts, root }
}

/// Append the default port to every endpoint that lacks one.
pub fn format_servers<'a>(servers: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    servers
        .into_iter()
        .map(|server| {
            if server.contains(':') {
                server.to_string()
            } else {
                format!("{server}:{DEFAULT_PORT}")
            }
        })
        .collect()
}

/// Join a namespace prefix and a relative child name.
pub(crate) fn join(prefix: &str, relative: &str) -> String {
    format!("{prefix}{PATH_SEPARATOR}{relative}")
}
