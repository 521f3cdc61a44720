use crate::graph::{AdjacencySet, NodeId};
use tokio::sync::RwLock;

/// The state owned by a single node: its identity and its adjacency set.
///
/// The set only grows. Self-loops are stored like any other neighbor; suppressing
/// them is up to the algorithms that issue inserts.
pub struct AdjacencyStore {
    id: NodeId,
    neighbors: RwLock<AdjacencySet>,
}

impl AdjacencyStore {
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            neighbors: RwLock::new(AdjacencySet::new()),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Snapshot of the current neighbors.
    pub async fn list(&self) -> AdjacencySet {
        self.neighbors.read().await.clone()
    }

    /// Inserts `target`. Returns `true` if it was not present before.
    pub async fn insert(&self, target: NodeId) -> bool {
        let added = self.neighbors.write().await.insert(target);
        if added {
            tracing::debug!("Node {} added neighbor {}", self.id, target);
        } else {
            tracing::trace!("Node {} already had neighbor {}", self.id, target);
        }
        added
    }

    pub async fn contains(&self, target: NodeId) -> bool {
        self.neighbors.read().await.contains(&target)
    }

    pub async fn degree(&self) -> usize {
        self.neighbors.read().await.len()
    }
}
