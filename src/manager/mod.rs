//! Graph Manager Module
//!
//! Runs graph algorithms against a cluster it can only see through a `Requester`.
//! There is no central copy of the graph: every algorithm discovers what it needs with
//! remote reads, fans out concurrent calls, and joins on them before using the results.
//!
//! ## Algorithms
//! - **`complete_neighbourhood`**: turns a node's neighborhood into a clique.
//! - **`climb_degree`**: hill-climbs towards a node of locally maximal degree.
//! - **`distance4`** / **`distance`**: nodes at exactly a given hop distance.
//!
//! ## Concurrency
//! Fan-outs are multiplexed on the calling task (`join_all` / `try_join_all`), not spawned
//! onto other threads. Calls within one batch complete in no particular order. State built
//! during a run (degree memo, visited set, frontier) is local to that run.
//!
//! A caller may bound any run with `with_timeout`. On expiry the in-flight calls are
//! abandoned and mutations already applied on remote nodes stay in place.

pub mod service;
pub mod types;

pub use service::{GraphManager, with_timeout};
pub use types::RunId;
