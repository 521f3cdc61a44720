//! Node Server Lifecycle
//!
//! Binds a node on `(host, id)`, serves the protocol on a background task and hands
//! back a `NodeHandle` that owns the graceful-shutdown trigger.

use anyhow::{Context, Result};
use axum::{Extension, Router, routing::get};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use super::handlers::{handle_default, handle_head, handle_list, handle_new};
use super::protocol::{ENDPOINT_LIST, ENDPOINT_NEW};
use super::store::AdjacencyStore;
use crate::graph::NodeId;

/// Builds the node's HTTP router around an existing store.
pub fn router(store: Arc<AdjacencyStore>, addr: SocketAddr) -> Router {
    Router::new()
        .route(ENDPOINT_LIST, get(handle_list).head(handle_head))
        .route(ENDPOINT_NEW, get(handle_new).head(handle_head))
        .fallback_service(get(handle_default).head(handle_head))
        .layer(Extension(store))
        .layer(Extension(addr))
}

pub struct NodeServer;

impl NodeServer {
    /// Starts a node with an empty adjacency set.
    pub async fn spawn(host: &str, id: NodeId) -> Result<NodeHandle> {
        let listener = TcpListener::bind((host, id.port()))
            .await
            .with_context(|| format!("failed to bind node {} on {}", id, host))?;
        let addr = listener.local_addr()?;

        let store = Arc::new(AdjacencyStore::new(id));
        let app = router(store.clone(), addr);
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let task = tokio::spawn(async move {
            let shutdown = async {
                let _ = shutdown_rx.await;
            };
            if let Err(e) = axum::serve(listener, app)
                .with_graceful_shutdown(shutdown)
                .await
            {
                tracing::error!("Node {} stopped with error: {}", id, e);
            }
        });

        tracing::info!("Node {} listening on {}", id, addr);

        Ok(NodeHandle {
            id,
            addr,
            store,
            shutdown: Some(shutdown_tx),
            task,
        })
    }
}

/// A running node. Dropping the handle without `shutdown` leaves the node serving
/// until the runtime exits.
pub struct NodeHandle {
    id: NodeId,
    addr: SocketAddr,
    store: Arc<AdjacencyStore>,
    shutdown: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl NodeHandle {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn store(&self) -> Arc<AdjacencyStore> {
        self.store.clone()
    }

    /// Stops accepting connections and waits for the server task to finish.
    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Err(e) = (&mut self.task).await {
            tracing::warn!("Node {} server task failed: {}", self.id, e);
        }
        tracing::info!("Node {} stopped", self.id);
    }
}
