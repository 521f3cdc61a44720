use anyhow::Result;
use tokio::sync::oneshot;

use crate::config::ClusterConfig;
use crate::graph::NodeId;
use crate::node::server::{NodeHandle, NodeServer};
use crate::requester::{NetworkRequester, Requester, RequesterConfig};

/// A set of running nodes sharing one host.
pub struct Cluster {
    host: String,
    nodes: Vec<NodeHandle>,
}

impl Cluster {
    /// Starts every node, then inserts each configured edge in both directions.
    ///
    /// Returning `Ok` means the cluster is ready. If anything fails, nodes started so
    /// far are shut down before the error is returned.
    pub async fn start(config: &ClusterConfig) -> Result<Self> {
        tracing::info!(
            "Starting cluster of {} nodes on {}",
            config.nodes.len(),
            config.host
        );

        let mut cluster = Self {
            host: config.host.clone(),
            nodes: Vec::with_capacity(config.nodes.len()),
        };

        for &id in &config.nodes {
            match NodeServer::spawn(&config.host, id).await {
                Ok(handle) => cluster.nodes.push(handle),
                Err(e) => {
                    cluster.shutdown().await;
                    return Err(e);
                }
            }
        }

        if let Err(e) = cluster.wire_edges(config).await {
            cluster.shutdown().await;
            return Err(e);
        }

        tracing::info!(
            "Cluster ready: {} nodes, {} edges",
            cluster.nodes.len(),
            config.edges.len()
        );
        Ok(cluster)
    }

    async fn wire_edges(&self, config: &ClusterConfig) -> Result<()> {
        let requester = NetworkRequester::new(RequesterConfig::for_host(self.host.clone()));

        for edge in &config.edges {
            requester.add_connection_bidi(edge.from, edge.to).await?;
            tracing::debug!("Wired edge {} <-> {}", edge.from, edge.to);
        }

        Ok(())
    }

    pub fn node_ids(&self) -> Vec<NodeId> {
        self.nodes.iter().map(NodeHandle::id).collect()
    }

    pub fn node(&self, id: NodeId) -> Option<&NodeHandle> {
        self.nodes.iter().find(|node| node.id() == id)
    }

    /// Logs every node's current degree.
    pub async fn report(&self) {
        for node in &self.nodes {
            tracing::info!(
                "  - node {} at {} degree={}",
                node.id(),
                node.addr(),
                node.store().degree().await
            );
        }
    }

    pub async fn shutdown(self) {
        tracing::info!("Shutting down {} nodes", self.nodes.len());
        for node in self.nodes {
            node.shutdown().await;
        }
    }
}

/// Runs a cluster for its whole lifetime.
///
/// `ready` receives the node ids once every edge is wired. With a `stop` receiver the
/// cluster runs until it fires (or its sender is dropped); without one it runs until
/// Ctrl-C. All nodes are shut down before returning.
pub async fn run_cluster(
    config: ClusterConfig,
    ready: Option<oneshot::Sender<Vec<NodeId>>>,
    stop: Option<oneshot::Receiver<()>>,
) -> Result<()> {
    let cluster = Cluster::start(&config).await?;
    cluster.report().await;

    if let Some(ready) = ready
        && ready.send(cluster.node_ids()).is_err()
    {
        tracing::warn!("Readiness receiver dropped before the cluster came up");
    }

    match stop {
        Some(stop) => {
            let _ = stop.await;
            tracing::info!("Stop requested");
        }
        None => {
            tracing::info!("Press Ctrl+C to shutdown");
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for Ctrl+C: {}", e);
            }
        }
    }

    cluster.shutdown().await;
    Ok(())
}
