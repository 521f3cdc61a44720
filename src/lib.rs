//! Distributed Graph Cluster Library
//!
//! Every vertex of the graph is an independent HTTP node that knows only its own
//! adjacency set. The graph is the union of those local views; nothing stores it whole.
//!
//! ## Architecture Modules
//!
//! - **`graph`**: Identifiers, adjacency sets, edges and the neighbor listing codec.
//! - **`node`**: The per-vertex service: owned adjacency state behind a lock and the
//!   two-endpoint HTTP protocol that reads and grows it.
//! - **`requester`**: The client side of that protocol behind the `Requester` trait,
//!   with a networked and an in-memory implementation.
//! - **`manager`**: `GraphManager`, running distributed algorithms (neighbourhood
//!   completion, degree climbing, bounded frontier expansion) as concurrent remote calls.
//! - **`bootstrap`**: Starts a cluster of nodes from a static edge list.
//! - **`config`** / **`error`**: Cluster configuration and the error taxonomy.

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod graph;
pub mod manager;
pub mod node;
pub mod requester;

pub use error::{GraphError, Result};
