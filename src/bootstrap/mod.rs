//! Cluster Bootstrap
//!
//! Glue that starts one node per configured id on a shared host, wires the configured
//! undirected edges through the same primitive the manager uses, and only then reports
//! the cluster as ready. After that it either runs until told to stop or until Ctrl-C.

pub mod service;

pub use service::{Cluster, run_cluster};
