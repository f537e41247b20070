//! Unified error type for graph construction, analysis and IO.

use thiserror::Error;

use crate::{Node, NumNodes};

/// Every fallible operation of this crate reports one of these conditions.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A vertex index outside of `0..n`.
    #[error("vertex {vertex} is out of range for a graph with {number_of_nodes} nodes")]
    VertexOutOfRange {
        vertex: Node,
        number_of_nodes: NumNodes,
    },

    /// The edge/arc `(u, v)` is already part of the graph.
    #[error("edge ({u}, {v}) is already present")]
    DuplicateEdge { u: Node, v: Node },

    /// Undirected graphs do not allow self-loops.
    #[error("self-loop at vertex {0} is not allowed in an undirected graph")]
    SelfLoop(Node),

    /// Vertices are numbered from `0` onwards.
    #[error("negative vertex index {value} in line {line}")]
    NegativeVertex { value: i64, line: usize },

    /// An acyclic graph was required.
    #[error("graph contains a cycle")]
    NotAcyclic,

    /// A cycle was requested from an acyclic graph.
    #[error("graph does not contain a cycle")]
    Acyclic,

    #[error("graph is not strongly connected")]
    NotStronglyConnected,

    #[error("graph is not connected")]
    NotConnected,

    #[error("graph has no vertices")]
    EmptyGraph,

    #[error("graph has no eulerian circuit")]
    NotEulerian,

    #[error("formula is unsatisfiable")]
    Unsatisfiable,

    /// Malformed textual input. `line` is 1-based.
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, GraphError>;
