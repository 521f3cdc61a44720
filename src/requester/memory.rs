use async_trait::async_trait;
use dashmap::{DashMap, DashSet};
use std::collections::HashMap;
use std::time::Duration;

use super::Requester;
use crate::error::{GraphError, Result};
use crate::graph::{AdjacencySet, NodeId};

/// A graph kept as a concurrent map of adjacency sets, without any networking.
///
/// Nodes that were never mentioned read as having no neighbors, like a vertex
/// whose node exists but has never been told about an edge.
#[derive(Default)]
pub struct InMemoryRequester {
    graph: DashMap<NodeId, AdjacencySet>,
    add_delay: Option<Duration>,
    unreachable: DashSet<NodeId>,
}

impl InMemoryRequester {
    pub fn new<I, N>(initial_graph: I) -> Self
    where
        I: IntoIterator<Item = (NodeId, N)>,
        N: IntoIterator<Item = NodeId>,
    {
        let graph = DashMap::new();
        for (node, neighbors) in initial_graph {
            graph
                .entry(node)
                .or_insert_with(AdjacencySet::new)
                .extend(neighbors);
        }

        Self {
            graph,
            ..Self::default()
        }
    }

    /// Convenience constructor for small numeric test graphs.
    pub fn from_adjacency(adjacency: &[(u16, &[u16])]) -> Self {
        Self::new(adjacency.iter().map(|(node, neighbors)| {
            (NodeId(*node), neighbors.iter().copied().map(NodeId).collect::<Vec<_>>())
        }))
    }

    /// Sleeps this long before every insert, to simulate network latency.
    pub fn with_add_delay(mut self, delay: Duration) -> Self {
        self.add_delay = Some(delay);
        self
    }

    /// Every call addressed to one of `nodes` fails with a transport error.
    pub fn with_unreachable(self, nodes: impl IntoIterator<Item = NodeId>) -> Self {
        for node in nodes {
            self.unreachable.insert(node);
        }
        self
    }

    pub fn is_connected(&self, from: NodeId, to: NodeId) -> bool {
        self.graph
            .get(&from)
            .map(|neighbors| neighbors.contains(&to))
            .unwrap_or(false)
    }

    pub fn snapshot(&self) -> HashMap<NodeId, AdjacencySet> {
        self.graph
            .iter()
            .map(|entry| (*entry.key(), entry.value().clone()))
            .collect()
    }

    fn check_reachable(&self, node: NodeId) -> Result<()> {
        if self.unreachable.contains(&node) {
            return Err(GraphError::transport(node, "connection refused"));
        }
        Ok(())
    }
}

#[async_trait]
impl Requester for InMemoryRequester {
    async fn get_connections_from(&self, node: NodeId) -> Result<AdjacencySet> {
        self.check_reachable(node)?;

        Ok(self
            .graph
            .get(&node)
            .map(|neighbors| neighbors.value().clone())
            .unwrap_or_default())
    }

    async fn add_connection(&self, from: NodeId, to: NodeId) -> Result<()> {
        if let Some(delay) = self.add_delay {
            tokio::time::sleep(delay).await;
        }
        self.check_reachable(from)?;

        self.graph.entry(from).or_default().insert(to);
        Ok(())
    }
}
