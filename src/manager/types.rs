use crate::graph::{AdjacencySet, NodeId};
use std::fmt;

/// Identifies one algorithm invocation in the logs.
///
/// Concurrent runs interleave their remote calls, so every log line of a run
/// carries this id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RunId(String);

impl RunId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Short prefix is enough to tell runs apart in a log.
        let short: String = self.0.chars().take(8).collect();
        write!(f, "{}", short)
    }
}

/// Every unordered pair of distinct members of `nodes`, each listed once with the
/// smaller id first.
pub fn distinct_pairs(nodes: &AdjacencySet) -> Vec<(NodeId, NodeId)> {
    let nodes: Vec<NodeId> = nodes.iter().copied().collect();
    let mut pairs = Vec::with_capacity(nodes.len() * nodes.len().saturating_sub(1) / 2);

    for (i, &x) in nodes.iter().enumerate() {
        for &y in &nodes[i + 1..] {
            pairs.push((x, y));
        }
    }

    pairs
}
