use async_trait::async_trait;
use std::time::Duration;

use super::Requester;
use crate::error::{GraphError, Result};
use crate::graph::{AdjacencySet, NodeId, decode_neighbors};
use crate::node::protocol::{ACK_NOTHING_TO_ADD, ENDPOINT_LIST, ENDPOINT_NEW};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct RequesterConfig {
    /// Host every node is reachable on. The port is the node id.
    pub host: String,
    /// Per-request limit covering connect, send and body read.
    pub request_timeout: Duration,
}

impl Default for RequesterConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl RequesterConfig {
    pub fn for_host(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Self::default()
        }
    }
}

/// HTTP client for the node protocol.
///
/// The `reqwest::Client` keeps connections to nodes warm between calls. It belongs to
/// this instance alone and is released when the requester is dropped.
pub struct NetworkRequester {
    config: RequesterConfig,
    http_client: reqwest::Client,
}

impl NetworkRequester {
    pub fn new(config: RequesterConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    fn url(&self, node: NodeId, path: &str) -> String {
        format!("http://{}:{}{}", self.config.host, node.port(), path)
    }

    /// Performs one GET and returns the body of a successful response.
    async fn fetch_text(&self, node: NodeId, request: reqwest::RequestBuilder) -> Result<String> {
        let response = request
            .timeout(self.config.request_timeout)
            .send()
            .await
            .map_err(|e| GraphError::transport(node, e))?;

        if !response.status().is_success() {
            return Err(GraphError::transport(
                node,
                format!("unexpected status {}", response.status()),
            ));
        }

        response
            .text()
            .await
            .map_err(|e| GraphError::protocol(node, format!("unreadable body: {}", e)))
    }
}

#[async_trait]
impl Requester for NetworkRequester {
    async fn get_connections_from(&self, node: NodeId) -> Result<AdjacencySet> {
        tracing::debug!("GET neighbors of {}", node);

        let request = self.http_client.get(self.url(node, ENDPOINT_LIST));
        let body = self.fetch_text(node, request).await?;

        decode_neighbors(&body).map_err(|reason| GraphError::protocol(node, reason))
    }

    async fn add_connection(&self, from: NodeId, to: NodeId) -> Result<()> {
        tracing::debug!("Adding edge {} -> {}", from, to);

        let request = self
            .http_client
            .get(self.url(from, ENDPOINT_NEW))
            .query(&[("port", to.to_string())]);
        let body = self.fetch_text(from, request).await?;

        if body.trim() == ACK_NOTHING_TO_ADD {
            return Err(GraphError::protocol(
                from,
                format!("insert of {} was rejected", to),
            ));
        }

        Ok(())
    }
}
