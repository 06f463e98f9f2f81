use serde::Serialize;

use crate::{
    graph::node::NodeId,
    weight::{Weight, is_reachable},
};

/// Outcome of one start/goal query.
///
/// For an unreachable goal `cost` is infinite and `nodes` holds whatever part
/// of the predecessor chain could be walked back from the goal, which does not
/// begin with `start`. Infinite costs serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutingPath {
    start: NodeId,
    goal: NodeId,
    nodes: Vec<NodeId>,
    cost: Weight,
}

impl RoutingPath {
    pub fn new(start: NodeId, goal: NodeId, nodes: Vec<NodeId>, cost: Weight) -> RoutingPath {
        RoutingPath {
            start,
            goal,
            nodes,
            cost,
        }
    }

    pub fn start(&self) -> NodeId {
        self.start
    }

    pub fn goal(&self) -> NodeId {
        self.goal
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn cost(&self) -> Weight {
        self.cost
    }

    pub fn is_reachable(&self) -> bool {
        is_reachable(self.cost)
    }

    /// True when the node chain runs from `start` to `goal`.
    pub fn is_complete(&self) -> bool {
        self.nodes.first() == Some(&self.start) && self.nodes.last() == Some(&self.goal)
    }
}
