use std::path::PathBuf;

use thiserror::Error;

use crate::graph::{connection::ConnectionId, node::NodeId};

/// Which of the two graph tables a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphSource {
    Nodes,
    Connections,
}

impl std::fmt::Display for GraphSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphSource::Nodes => write!(f, "nodes"),
            GraphSource::Connections => write!(f, "connections"),
        }
    }
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read {source_kind} file {path:?}")]
    Read {
        source_kind: GraphSource,
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },

    #[error("{source_kind} line {line}: expected kind tag {expected:?}, found {found:?}")]
    KindTag {
        source_kind: GraphSource,
        line: usize,
        expected: &'static str,
        found: String,
    },

    #[error("{source_kind} line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        source_kind: GraphSource,
        line: usize,
        expected: String,
        found: usize,
    },

    #[error("{source_kind} line {line}: field {field} is not a valid number: {value:?}")]
    InvalidNumber {
        source_kind: GraphSource,
        line: usize,
        field: usize,
        value: String,
    },

    #[error("Node record {position} has id {id}, ids must be sequential from 1")]
    NonSequentialNode { position: usize, id: NodeId },

    #[error("Connection record {position} has id {id}, ids must be sequential from 1")]
    NonSequentialConnection { position: usize, id: ConnectionId },

    #[error("Node {id} has a non-finite coordinate")]
    InvalidCoordinate { id: NodeId },

    #[error("Connection {id} references unknown node {node}")]
    DanglingConnection { id: ConnectionId, node: NodeId },

    #[error("Connection {id} has an invalid cost {cost}, costs must be finite and non-negative")]
    InvalidCost { id: ConnectionId, cost: f64 },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Node {id} is out of range, valid ids are 1..={count}")]
    NodeOutOfRange { id: NodeId, count: usize },

    #[error("Connection {id} is out of range, valid ids are 1..={count}")]
    ConnectionOutOfRange { id: ConnectionId, count: usize },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RoutingError {
    #[error("Invalid index: {0}")]
    InvalidIndex(#[from] GraphError),

    /// The predecessor chain from `goal` does not lead back to `start`.
    /// `partial` holds the chain that was walked, in forward order.
    #[error("No path found from {start} to {goal}")]
    NoPathFound {
        start: NodeId,
        goal: NodeId,
        partial: Vec<NodeId>,
    },
}
