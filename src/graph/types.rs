use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of a single vertex.
///
/// The value is also the TCP port the vertex's node listens on, so a `NodeId`
/// together with the cluster host is enough to address the node.
/// The total order is used for deterministic tie-breaking.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(transparent)]
pub struct NodeId(pub u16);

impl NodeId {
    pub fn port(self) -> u16 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NodeId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(NodeId)
    }
}

impl From<u16> for NodeId {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

/// The neighbors a node currently knows about.
///
/// Ordered so that listings are deterministic.
pub type AdjacencySet = BTreeSet<NodeId>;

/// A directed edge: `from`'s adjacency set contains `to`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
}

impl Edge {
    pub fn new(from: u16, to: u16) -> Self {
        Self {
            from: NodeId(from),
            to: NodeId(to),
        }
    }

    pub fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}
