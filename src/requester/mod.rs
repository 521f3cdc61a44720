//! Requester Module
//!
//! The only way any component touches a node's adjacency set. A `Requester` performs
//! remote reads and writes and hides how the wire exchange happens.
//!
//! ## Variants
//! - **`NetworkRequester`**: talks HTTP to real nodes. Owns its connection pool; the pool
//!   lives and dies with the requester instance.
//! - **`InMemoryRequester`**: keeps the whole graph in a local map. Used to test
//!   algorithms without sockets, optionally with injected latency and failures.
//!
//! Every call is a suspension point. Nothing is retried internally.

pub mod memory;
pub mod network;

pub use memory::InMemoryRequester;
pub use network::{NetworkRequester, RequesterConfig};

use crate::error::Result;
use crate::graph::{AdjacencySet, NodeId};
use async_trait::async_trait;

#[async_trait]
pub trait Requester: Send + Sync {
    /// Reads the adjacency set of `node`.
    async fn get_connections_from(&self, node: NodeId) -> Result<AdjacencySet>;

    /// Inserts `to` into the adjacency set of `from`.
    async fn add_connection(&self, from: NodeId, to: NodeId) -> Result<()>;

    /// Inserts both `a -> b` and `b -> a`, in that order.
    ///
    /// Not atomic: if the second insert fails the edge stays one-directional.
    async fn add_connection_bidi(&self, a: NodeId, b: NodeId) -> Result<()> {
        self.add_connection(a, b).await?;
        self.add_connection(b, a).await
    }
}

#[cfg(test)]
mod tests;
