use axum::{
    Extension,
    extract::Query,
    http::StatusCode,
};
use std::net::SocketAddr;
use std::sync::Arc;

use super::protocol::{ACK_ADDED, ACK_NOTHING_TO_ADD, first_port, usage};
use super::store::AdjacencyStore;
use crate::graph::{NodeId, encode_neighbors};

pub async fn handle_list(
    Extension(store): Extension<Arc<AdjacencyStore>>,
) -> (StatusCode, String) {
    let neighbors = store.list().await;
    tracing::debug!("Node {} listing {} neighbors", store.id(), neighbors.len());
    (StatusCode::OK, encode_neighbors(&neighbors))
}

pub async fn handle_new(
    Extension(store): Extension<Arc<AdjacencyStore>>,
    Query(query): Query<Vec<(String, String)>>,
) -> (StatusCode, &'static str) {
    let target = match first_port(&query).map(str::parse::<NodeId>) {
        Some(Ok(target)) => target,
        Some(Err(e)) => {
            tracing::warn!("Node {} got unparseable neighbor: {}", store.id(), e);
            return (StatusCode::OK, ACK_NOTHING_TO_ADD);
        }
        None => {
            tracing::warn!("Node {} got insert without a port", store.id());
            return (StatusCode::OK, ACK_NOTHING_TO_ADD);
        }
    };

    store.insert(target).await;
    (StatusCode::OK, ACK_ADDED)
}

pub async fn handle_default(Extension(addr): Extension<SocketAddr>) -> (StatusCode, String) {
    (StatusCode::OK, usage(&addr))
}

/// HEAD on any path: headers only, no side effects.
pub async fn handle_head() -> StatusCode {
    StatusCode::OK
}
