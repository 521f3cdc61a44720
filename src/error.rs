//! Error types for remote graph operations.

use crate::graph::NodeId;
use std::time::Duration;
use thiserror::Error;

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors surfaced by a `Requester` and, unchanged, by `GraphManager`.
#[derive(Debug, Error)]
pub enum GraphError {
    /// Node unreachable, connection refused, or a non-success status.
    #[error("Transport error (node {node}): {reason}")]
    Transport { node: NodeId, reason: String },

    /// The node answered but the body is not what the protocol promises.
    #[error("Protocol error (node {node}): {reason}")]
    Protocol { node: NodeId, reason: String },

    /// A caller-imposed deadline elapsed. In-flight calls were abandoned.
    #[error("Operation timed out after {0:?}")]
    Timeout(Duration),
}

impl GraphError {
    pub fn transport(node: NodeId, reason: impl ToString) -> Self {
        Self::Transport {
            node,
            reason: reason.to_string(),
        }
    }

    pub fn protocol(node: NodeId, reason: impl ToString) -> Self {
        Self::Protocol {
            node,
            reason: reason.to_string(),
        }
    }

    /// The node the failing call was addressed to, if any.
    pub fn node(&self) -> Option<NodeId> {
        match self {
            Self::Transport { node, .. } | Self::Protocol { node, .. } => Some(*node),
            Self::Timeout(_) => None,
        }
    }
}
