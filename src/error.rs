use thiserror::Error;

use crate::{Node, NumNodes};

/// Errors raised by graph mutations and queries.
///
/// These are contract violations detected eagerly at the offending call;
/// no partial mutation is committed before one is returned. A negative
/// node count is unrepresentable ([`NumNodes`] is unsigned), so there is
/// no corresponding variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A node id outside `[0, number_of_nodes)` was passed to an operation
    #[error("node {node} is out of range for a graph on {num_nodes} nodes")]
    NodeOutOfRange { node: Node, num_nodes: NumNodes },
}

/// Result alias for fallible graph operations
pub type Result<T> = std::result::Result<T, GraphError>;
