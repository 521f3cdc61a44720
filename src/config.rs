//! Cluster Configuration
//!
//! A cluster is described by a host, the node ids to start on it, and the undirected
//! edges to wire between them. The description comes from a JSON file (`--config`),
//! from repeated `--node` / `--edge` flags, or falls back to a small demo graph.

use anyhow::{Context, Result, anyhow, bail};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

use crate::graph::{Edge, NodeId};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const HOST_ENV_VAR: &str = "GRAPH_HOST";

const DEMO_BASE: u16 = 8030;
const DEMO_EDGES: [(u16, u16); 6] = [(0, 1), (1, 2), (1, 3), (1, 4), (3, 4), (4, 5)];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default)]
    pub nodes: BTreeSet<NodeId>,
    /// Undirected; each one is wired in both directions.
    #[serde(default)]
    pub edges: Vec<Edge>,
}

fn default_host() -> String {
    std::env::var(HOST_ENV_VAR).unwrap_or_else(|_| DEFAULT_HOST.to_string())
}

impl ClusterConfig {
    pub fn new(
        host: impl Into<String>,
        nodes: impl IntoIterator<Item = NodeId>,
        edges: Vec<Edge>,
    ) -> Self {
        let mut config = Self {
            host: host.into(),
            nodes: nodes.into_iter().collect(),
            edges,
        };
        config.include_edge_endpoints();
        config
    }

    /// The graph the original bootstrap script started when run on its own.
    pub fn demo() -> Self {
        Self::new(
            default_host(),
            Vec::new(),
            DEMO_EDGES
                .iter()
                .map(|&(a, b)| Edge::new(DEMO_BASE + a, DEMO_BASE + b))
                .collect(),
        )
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read cluster config {}", path.display()))?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let mut config: Self = serde_json::from_str(raw)?;
        config.include_edge_endpoints();
        Ok(config)
    }

    /// Parses `--config <path>`, `--host <host>`, `--node <id>` and `--edge <a>-<b>`.
    /// Unknown arguments are ignored.
    pub fn from_args(args: &[String]) -> Result<Self> {
        let mut config_path: Option<String> = None;
        let mut host: Option<String> = None;
        let mut nodes: Vec<NodeId> = vec![];
        let mut edges: Vec<Edge> = vec![];

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                flag @ ("--config" | "--host" | "--node" | "--edge") => {
                    let value = args
                        .get(i + 1)
                        .ok_or_else(|| anyhow!("{} expects a value", flag))?;
                    match flag {
                        "--config" => config_path = Some(value.clone()),
                        "--host" => host = Some(value.clone()),
                        "--node" => nodes.push(parse_node(value)?),
                        _ => edges.push(parse_edge(value)?),
                    }
                    i += 2;
                }
                _ => {
                    i += 1;
                }
            }
        }

        let mut config = match config_path {
            Some(path) => Self::from_json_file(path)?,
            None if nodes.is_empty() && edges.is_empty() => Self::demo(),
            None => Self::new(default_host(), Vec::new(), Vec::new()),
        };

        config.nodes.extend(nodes);
        config.edges.extend(edges);
        if let Some(host) = host {
            config.host = host;
        }
        config.include_edge_endpoints();

        Ok(config)
    }

    fn include_edge_endpoints(&mut self) {
        for edge in &self.edges {
            self.nodes.insert(edge.from);
            self.nodes.insert(edge.to);
        }
    }
}

fn parse_node(value: &str) -> Result<NodeId> {
    value
        .parse()
        .with_context(|| format!("invalid node id {:?}", value))
}

fn parse_edge(value: &str) -> Result<Edge> {
    let Some((from, to)) = value.split_once('-') else {
        bail!("invalid edge {:?}, expected <a>-<b>", value);
    };
    Ok(Edge {
        from: parse_node(from)?,
        to: parse_node(to)?,
    })
}
