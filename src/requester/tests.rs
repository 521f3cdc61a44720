//! Requester Module Tests
//!
//! ## Test Scopes
//! - **InMemoryRequester**: the test double the manager tests rely on, including
//!   injected failures and the non-atomic bidirectional insert.
//! - **NetworkRequester**: reads and writes against real nodes, and the mapping of
//!   failures onto transport and protocol errors.

#[cfg(test)]
mod tests {
    use crate::bootstrap::Cluster;
    use crate::config::ClusterConfig;
    use crate::error::GraphError;
    use crate::graph::{AdjacencySet, Edge, NodeId};
    use crate::requester::{InMemoryRequester, NetworkRequester, Requester, RequesterConfig};
    use axum::{Router, routing::get};
    use std::collections::HashMap;
    use std::time::Duration;

    fn ids(values: &[u16]) -> AdjacencySet {
        values.iter().copied().map(NodeId).collect()
    }

    fn local_requester() -> NetworkRequester {
        NetworkRequester::new(RequesterConfig {
            host: "127.0.0.1".to_string(),
            request_timeout: Duration::from_secs(2),
        })
    }

    // ============================================================
    // IN-MEMORY REQUESTER
    // ============================================================

    #[tokio::test]
    async fn test_memory_reads_initial_graph() {
        let req = InMemoryRequester::from_adjacency(&[(0, &[1, 2]), (1, &[])]);

        assert_eq!(req.get_connections_from(NodeId(0)).await.unwrap(), ids(&[1, 2]));
        assert!(req.get_connections_from(NodeId(1)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_memory_unknown_node_is_empty() {
        let req = InMemoryRequester::default();
        assert!(req.get_connections_from(NodeId(42)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_memory_add_connection_is_directed() {
        let req = InMemoryRequester::default();

        req.add_connection(NodeId(1), NodeId(2)).await.unwrap();

        assert!(req.is_connected(NodeId(1), NodeId(2)));
        assert!(!req.is_connected(NodeId(2), NodeId(1)));
    }

    #[tokio::test]
    async fn test_memory_bidi_adds_both_directions() {
        let req = InMemoryRequester::default();

        req.add_connection_bidi(NodeId(1), NodeId(2)).await.unwrap();

        assert!(req.is_connected(NodeId(1), NodeId(2)));
        assert!(req.is_connected(NodeId(2), NodeId(1)));
    }

    #[tokio::test]
    async fn test_memory_bidi_is_not_atomic() {
        // ARRANGE: the second leg of the bidirectional insert will fail
        let req = InMemoryRequester::default().with_unreachable([NodeId(2)]);

        // ACT
        let result = req.add_connection_bidi(NodeId(1), NodeId(2)).await;

        // ASSERT: first leg stays applied
        assert!(matches!(result, Err(GraphError::Transport { node, .. }) if node == NodeId(2)));
        assert!(req.is_connected(NodeId(1), NodeId(2)));
        assert!(!req.is_connected(NodeId(2), NodeId(1)));
    }

    #[tokio::test]
    async fn test_memory_unreachable_read_fails() {
        let req = InMemoryRequester::from_adjacency(&[(3, &[4])]).with_unreachable([NodeId(3)]);

        let err = req.get_connections_from(NodeId(3)).await.unwrap_err();
        assert_eq!(err.node(), Some(NodeId(3)));
    }

    #[tokio::test]
    async fn test_memory_round_trip_is_duplicate_insensitive() {
        let req = InMemoryRequester::default();

        for to in [5, 3, 5, 9, 3] {
            req.add_connection(NodeId(1), NodeId(to)).await.unwrap();
        }

        assert_eq!(req.get_connections_from(NodeId(1)).await.unwrap(), ids(&[3, 5, 9]));
    }

    // ============================================================
    // NETWORK REQUESTER
    // ============================================================

    #[tokio::test]
    async fn test_network_requester_against_cluster() {
        // ARRANGE: the bootstrap wires both directions of every edge
        let base = 18200u16;
        let logical: HashMap<u16, Vec<u16>> = HashMap::from([
            (0, vec![1, 4, 7]),
            (1, vec![0, 4, 5, 6]),
            (2, vec![3, 5]),
            (3, vec![2, 4]),
            (4, vec![0, 1, 3]),
            (5, vec![1, 2, 7]),
            (6, vec![1, 7]),
            (7, vec![0, 5, 6]),
        ]);
        let mut expected: HashMap<NodeId, AdjacencySet> = logical
            .iter()
            .map(|(k, vs)| {
                (
                    NodeId(base + k),
                    vs.iter().map(|v| NodeId(base + v)).collect(),
                )
            })
            .collect();
        let edges = logical
            .iter()
            .flat_map(|(k, vs)| vs.iter().map(move |v| Edge::new(base + k, base + v)))
            .collect();
        let config = ClusterConfig::new("127.0.0.1", (0..8).map(|i| NodeId(base + i)), edges);

        let cluster = Cluster::start(&config).await.unwrap();
        let req = local_requester();

        // ACT + ASSERT: reads
        for (node, neighbors) in &expected {
            assert_eq!(&req.get_connections_from(*node).await.unwrap(), neighbors);
        }

        // ACT + ASSERT: single directed insert
        req.add_connection(NodeId(base), NodeId(base + 5)).await.unwrap();
        expected.get_mut(&NodeId(base)).unwrap().insert(NodeId(base + 5));
        for (node, neighbors) in &expected {
            assert_eq!(&req.get_connections_from(*node).await.unwrap(), neighbors);
        }

        // ACT + ASSERT: bidirectional insert
        req.add_connection_bidi(NodeId(base + 1), NodeId(base + 2)).await.unwrap();
        expected.get_mut(&NodeId(base + 1)).unwrap().insert(NodeId(base + 2));
        expected.get_mut(&NodeId(base + 2)).unwrap().insert(NodeId(base + 1));
        for (node, neighbors) in &expected {
            assert_eq!(&req.get_connections_from(*node).await.unwrap(), neighbors);
        }

        cluster.shutdown().await;
    }

    #[tokio::test]
    async fn test_network_unreachable_node_is_transport_error() {
        let req = local_requester();

        let err = req.get_connections_from(NodeId(18299)).await.unwrap_err();
        assert!(matches!(err, GraphError::Transport { node, .. } if node == NodeId(18299)));

        let err = req.add_connection(NodeId(18299), NodeId(1)).await.unwrap_err();
        assert!(matches!(err, GraphError::Transport { .. }));
    }

    #[tokio::test]
    async fn test_network_malformed_listing_is_protocol_error() {
        // ARRANGE: something that is not a node answers on the port
        let listener = tokio::net::TcpListener::bind(("127.0.0.1", 18298)).await.unwrap();
        let app = Router::new().route("/", get(|| async { "8001,not-a-port" }));
        let server = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        // ACT
        let err = local_requester()
            .get_connections_from(NodeId(18298))
            .await
            .unwrap_err();

        // ASSERT
        assert!(matches!(err, GraphError::Protocol { node, .. } if node == NodeId(18298)));
        server.abort();
    }

    #[tokio::test]
    async fn test_network_round_trip_of_inserts() {
        let node = crate::node::server::NodeServer::spawn("127.0.0.1", NodeId(18297))
            .await
            .unwrap();
        let req = local_requester();

        for to in [3, 1, 3, 2, 1] {
            req.add_connection(NodeId(18297), NodeId(to)).await.unwrap();
        }

        assert_eq!(
            req.get_connections_from(NodeId(18297)).await.unwrap(),
            ids(&[1, 2, 3])
        );
        node.shutdown().await;
    }
}
