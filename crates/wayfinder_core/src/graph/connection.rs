use serde::Serialize;

use crate::{constants::CONNECTION_KIND, define_id_newtype, weight::Weight};

use super::node::NodeId;

define_id_newtype!(ConnectionId);

/// A directed, weighted edge. Travel in the opposite direction needs a second
/// connection.
#[derive(Debug, Clone, Serialize)]
pub struct Connection {
    id: ConnectionId,
    from: NodeId,
    to: NodeId,
    cost: Weight,
    /// Edge classification from the source data, ignored by the search.
    connection_type: u32,
}

impl Connection {
    pub fn new(
        id: ConnectionId,
        from: NodeId,
        to: NodeId,
        cost: Weight,
        connection_type: u32,
    ) -> Self {
        Connection {
            id,
            from,
            to,
            cost,
            connection_type,
        }
    }

    pub fn kind(&self) -> &'static str {
        CONNECTION_KIND
    }

    pub fn id(&self) -> ConnectionId {
        self.id
    }

    pub fn from_node(&self) -> NodeId {
        self.from
    }

    pub fn to_node(&self) -> NodeId {
        self.to
    }

    pub fn cost(&self) -> Weight {
        self.cost
    }

    pub fn connection_type(&self) -> u32 {
        self.connection_type
    }
}
