//! Node Network Protocol
//!
//! Endpoints, query parameters and acknowledgment texts shared by the node's
//! handlers and the `NetworkRequester` that talks to them.

// --- API Endpoints ---

/// Lists the node's neighbors.
pub const ENDPOINT_LIST: &str = "/";
/// Inserts a neighbor given as the `port` query parameter.
pub const ENDPOINT_NEW: &str = "/new";

// --- Acknowledgments ---

/// Body returned when the neighbor was inserted or already present.
pub const ACK_ADDED: &str = "Added or exists.";
/// Body returned when the request did not name a usable neighbor.
pub const ACK_NOTHING_TO_ADD: &str = "Nothing to add.";

/// Query parameter of `GET /new` naming the neighbor to insert.
pub const PARAM_PORT: &str = "port";

/// The first `port` value of a decoded `GET /new` query string.
///
/// The query is taken as raw pairs so that repeated keys or odd values never turn
/// into an extractor rejection; later `port` values are ignored.
pub fn first_port(query: &[(String, String)]) -> Option<&str> {
    query
        .iter()
        .find(|(key, _)| key == PARAM_PORT)
        .map(|(_, value)| value.as_str())
}

/// The informational text served on unknown paths.
pub fn usage(addr: &std::net::SocketAddr) -> String {
    format!(
        "http://{addr}{ENDPOINT_LIST} or http://{addr}{ENDPOINT_NEW}?port={}",
        addr.port()
    )
}
