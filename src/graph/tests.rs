//! Graph Model Tests
//!
//! Covers identifier parsing and the neighbor listing codec used on the wire.

#[cfg(test)]
mod tests {
    use crate::graph::{AdjacencySet, Edge, NodeId, decode_neighbors, encode_neighbors};

    fn set(ids: &[u16]) -> AdjacencySet {
        ids.iter().copied().map(NodeId).collect()
    }

    // ============================================================
    // NODE ID
    // ============================================================

    #[test]
    fn test_node_id_parses_with_whitespace() {
        let id: NodeId = " 8030 ".parse().unwrap();
        assert_eq!(id, NodeId(8030));
        assert_eq!(id.to_string(), "8030");
    }

    #[test]
    fn test_node_id_rejects_garbage() {
        assert!("abc".parse::<NodeId>().is_err());
        assert!("-1".parse::<NodeId>().is_err());
        assert!("70000".parse::<NodeId>().is_err());
    }

    #[test]
    fn test_node_id_order_is_numeric() {
        let mut ids = vec![NodeId(9), NodeId(10), NodeId(1)];
        ids.sort();
        assert_eq!(ids, vec![NodeId(1), NodeId(9), NodeId(10)]);
    }

    #[test]
    fn test_edge_reversed() {
        let edge = Edge::new(1, 2);
        assert_eq!(edge.reversed(), Edge::new(2, 1));
        assert_eq!(edge.to_string(), "1->2");
    }

    // ============================================================
    // NEIGHBOR LISTING CODEC
    // ============================================================

    #[test]
    fn test_encode_is_sorted_and_comma_separated() {
        assert_eq!(encode_neighbors(&set(&[8007, 8001, 8004])), "8001,8004,8007");
    }

    #[test]
    fn test_encode_empty_set_is_empty_body() {
        assert_eq!(encode_neighbors(&AdjacencySet::new()), "");
    }

    #[test]
    fn test_decode_empty_and_blank_bodies() {
        assert!(decode_neighbors("").unwrap().is_empty());
        assert!(decode_neighbors("  \n").unwrap().is_empty());
    }

    #[test]
    fn test_decode_collapses_duplicates() {
        assert_eq!(decode_neighbors("3,1,3,2\n").unwrap(), set(&[1, 2, 3]));
    }

    #[test]
    fn test_decode_reports_bad_entry() {
        let err = decode_neighbors("1,two,3").unwrap_err();
        assert!(err.contains("two"), "unexpected error: {}", err);
    }

    #[test]
    fn test_decode_reads_what_encode_writes() {
        let neighbors = set(&[0, 5, 65535]);
        assert_eq!(decode_neighbors(&encode_neighbors(&neighbors)).unwrap(), neighbors);
    }
}
