pub mod connection;
pub mod node;

use tracing::debug;

use crate::error::{GraphError, LoadError};

use self::{
    connection::{Connection, ConnectionId},
    node::{Node, NodeId},
};

/// Nodes and directed connections, immutable once built.
///
/// Ids are 1-based as in the source tables while storage is zero-based, so
/// every lookup goes through an explicit range check.
#[derive(Debug, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    connections: Vec<Connection>,
    // Outgoing connection offsets per node offset, in source order
    adjacency_list: Vec<Vec<usize>>,
}

impl Graph {
    /// Builds a graph from fully parsed records. Either every record is valid
    /// and the whole graph is returned, or the first violation is reported.
    pub fn new(nodes: Vec<Node>, connections: Vec<Connection>) -> Result<Graph, LoadError> {
        for (offset, node) in nodes.iter().enumerate() {
            if node.id() != NodeId::from_offset(offset) {
                return Err(LoadError::NonSequentialNode {
                    position: offset + 1,
                    id: node.id(),
                });
            }

            if !node.location().is_finite() {
                return Err(LoadError::InvalidCoordinate { id: node.id() });
            }
        }

        let mut graph = Graph {
            adjacency_list: vec![vec![]; nodes.len()],
            nodes,
            connections: Vec::with_capacity(connections.len()),
        };

        for (offset, connection) in connections.into_iter().enumerate() {
            if connection.id() != ConnectionId::from_offset(offset) {
                return Err(LoadError::NonSequentialConnection {
                    position: offset + 1,
                    id: connection.id(),
                });
            }

            graph.add_connection(connection)?;
        }

        debug!(
            "Built graph with {} nodes and {} connections",
            graph.node_count(),
            graph.connection_count()
        );

        Ok(graph)
    }

    fn add_connection(&mut self, connection: Connection) -> Result<(), LoadError> {
        let cost = connection.cost();
        if !cost.is_finite() || cost < 0.0 {
            return Err(LoadError::InvalidCost {
                id: connection.id(),
                cost,
            });
        }

        let from = self.dangling_check(&connection, connection.from_node())?;
        self.dangling_check(&connection, connection.to_node())?;

        let connection_offset = self.connections.len();
        self.connections.push(connection);
        self.adjacency_list[from].push(connection_offset);

        Ok(())
    }

    fn dangling_check(&self, connection: &Connection, node: NodeId) -> Result<usize, LoadError> {
        self.node_offset(node)
            .map_err(|_| LoadError::DanglingConnection {
                id: connection.id(),
                node,
            })
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Zero-based storage slot of `id`, or `NodeOutOfRange` for 0 and ids
    /// past the end.
    pub fn node_offset(&self, id: NodeId) -> Result<usize, GraphError> {
        match id.offset() {
            Some(offset) if offset < self.nodes.len() => Ok(offset),
            _ => Err(GraphError::NodeOutOfRange {
                id,
                count: self.nodes.len(),
            }),
        }
    }

    pub fn node(&self, id: NodeId) -> Result<&Node, GraphError> {
        let offset = self.node_offset(id)?;
        Ok(&self.nodes[offset])
    }

    pub fn connection(&self, id: ConnectionId) -> Result<&Connection, GraphError> {
        match id.offset() {
            Some(offset) if offset < self.connections.len() => Ok(&self.connections[offset]),
            _ => Err(GraphError::ConnectionOutOfRange {
                id,
                count: self.connections.len(),
            }),
        }
    }

    /// Connections leaving the node stored at `offset`, in source order.
    pub(crate) fn outgoing_at(&self, offset: usize) -> impl Iterator<Item = &Connection> {
        self.adjacency_list[offset]
            .iter()
            .map(|&connection| &self.connections[connection])
    }

    pub(crate) fn node_at(&self, offset: usize) -> &Node {
        &self.nodes[offset]
    }

    pub fn outgoing(&self, id: NodeId) -> Result<impl Iterator<Item = &Connection>, GraphError> {
        let offset = self.node_offset(id)?;
        Ok(self.outgoing_at(offset))
    }

    /// First connection from `from` to `to`, in source order.
    pub fn find_connection(&self, from: NodeId, to: NodeId) -> Option<&Connection> {
        self.outgoing(from)
            .ok()?
            .find(|connection| connection.to_node() == to)
    }
}
