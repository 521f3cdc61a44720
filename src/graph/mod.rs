//! Graph Data Model
//!
//! The vocabulary shared by every other module: vertex identifiers, adjacency sets,
//! directed edges, and the textual codec nodes use to publish their neighbors.
//!
//! The graph itself is never materialized. Each node owns exactly one `AdjacencySet`
//! and the logical graph is the union of all of them.

pub mod codec;
pub mod types;

pub use codec::{decode_neighbors, encode_neighbors};
pub use types::{AdjacencySet, Edge, NodeId};

#[cfg(test)]
mod tests;
