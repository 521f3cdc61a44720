//! Graph Node Module
//!
//! A node is one vertex of the distributed graph, reachable over HTTP on the port
//! equal to its `NodeId`. It owns its adjacency set and nothing else.
//!
//! ## Protocol
//! - `GET /` lists the current neighbors, comma separated.
//! - `GET /new?port=<id>` inserts a neighbor. Insertion is idempotent, and a missing or
//!   unparseable `port` yields a "nothing to add" acknowledgment rather than an error status.
//! - Any other path answers with a short usage string.
//!
//! ## Concurrency
//! Handlers run concurrently. Writes to the adjacency set are serialized by the store's
//! lock; reads may run in parallel and may observe either side of a racing insert.

pub mod handlers;
pub mod protocol;
pub mod server;
pub mod store;
