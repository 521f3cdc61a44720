//! Wire format of a neighbor listing.
//!
//! A node answers `GET /` with its neighbors joined by commas (`"8001,8004,8007"`).
//! An empty adjacency set is an empty body.

use super::types::{AdjacencySet, NodeId};

const SEPARATOR: char = ',';

pub fn encode_neighbors(neighbors: &AdjacencySet) -> String {
    neighbors
        .iter()
        .map(NodeId::to_string)
        .collect::<Vec<_>>()
        .join(&SEPARATOR.to_string())
}

/// Parses a neighbor listing. Returns the offending entry on failure.
pub fn decode_neighbors(body: &str) -> Result<AdjacencySet, String> {
    let body = body.trim();
    if body.is_empty() {
        return Ok(AdjacencySet::new());
    }

    body.split(SEPARATOR)
        .map(|entry| {
            entry
                .parse::<NodeId>()
                .map_err(|e| format!("invalid node id {:?}: {}", entry, e))
        })
        .collect()
}
