use tracing::debug;

use crate::constants::INFINITE_WEIGHT;
use crate::error::RoutingError;
use crate::graph::{
    Graph,
    node::{Node, NodeId},
};
use crate::stopwatch::Stopwatch;
use crate::weight::Weight;

use super::open_set::{HeapItem, OpenSet, Sequence};
use super::routing_path::RoutingPath;

// https://en.wikipedia.org/wiki/A*_search_algorithm

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeStatus {
    Unvisited,
    Open,
    Visited,
}

/// Per-search state of one node. Lives in the `PathFinder`, never in the graph.
#[derive(Debug, Clone, Copy)]
struct NodeData {
    status: NodeStatus,

    /// Cheapest known cost from the start
    cost: Weight,

    /// Straight-line estimate to the goal, set on every relaxation
    heuristic: Weight,

    /// cost + heuristic
    total: Weight,

    predecessor: Option<usize>,

    /// Position in the open set, valid while `status == Open`
    sequence: Sequence,
}

impl NodeData {
    fn new() -> Self {
        NodeData {
            status: NodeStatus::Unvisited,
            cost: INFINITE_WEIGHT,
            heuristic: 0.0,
            total: INFINITE_WEIGHT,
            predecessor: None,
            sequence: 0,
        }
    }
}

/// Snapshot of a node's search state after the last search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeState {
    pub status: NodeStatus,
    pub cost: Weight,
    pub heuristic: Weight,
    pub total: Weight,
    pub predecessor: Option<NodeId>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchOptions {
    /// Record the order in which nodes are settled
    pub include_debug_info: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes taken out of the open set, the goal included
    pub iterations: usize,
    /// Successful cost improvements
    pub relaxations: usize,
}

#[derive(Debug, Clone, Default)]
pub struct SearchDebugInfo {
    pub settled_nodes: Vec<NodeId>,
}

/// A* over a borrowed, immutable [`Graph`].
///
/// All transient search state is owned here and reset at the start of every
/// [`PathFinder::find_path`] call, so one finder answers any number of queries
/// and several finders may share the same graph.
///
/// The Euclidean estimate is only admissible when every connection cost is at
/// least the straight-line distance between its endpoints. That is a property
/// of the input data and is not checked.
pub struct PathFinder<'a> {
    graph: &'a Graph,
    options: SearchOptions,
    data: Vec<NodeData>,
    open: OpenSet,
    final_cost: Option<Weight>,
    stats: SearchStats,
    debug_info: Option<SearchDebugInfo>,
}

impl<'a> PathFinder<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Self::with_options(graph, SearchOptions::default())
    }

    pub fn with_options(graph: &'a Graph, options: SearchOptions) -> Self {
        PathFinder {
            graph,
            options,
            data: vec![NodeData::new(); graph.node_count()],
            open: OpenSet::with_capacity(graph.node_count().min(1024)),
            final_cost: None,
            stats: SearchStats::default(),
            debug_info: None,
        }
    }

    pub fn graph(&self) -> &'a Graph {
        self.graph
    }

    /// Settled cost of the goal of the last search, infinite when the goal was
    /// never reached. `None` before the first search.
    pub fn final_cost(&self) -> Option<Weight> {
        self.final_cost
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn debug_info(&self) -> Option<&SearchDebugInfo> {
        self.debug_info.as_ref()
    }

    pub fn node_state(&self, node: NodeId) -> Result<NodeState, RoutingError> {
        let offset = self.graph.node_offset(node)?;
        let data = &self.data[offset];
        Ok(NodeState {
            status: data.status,
            cost: data.cost,
            heuristic: data.heuristic,
            total: data.total,
            predecessor: data.predecessor.map(NodeId::from_offset),
        })
    }

    fn reset(&mut self) {
        self.data.fill(NodeData::new());
        self.open.clear();
        self.final_cost = None;
        self.stats = SearchStats::default();
        self.debug_info = self
            .options
            .include_debug_info
            .then(SearchDebugInfo::default);
    }

    /// A popped heap entry is stale when its node has since been settled,
    /// re-opened under a new sequence, or relaxed to a lower total.
    fn is_current(&self, item: &HeapItem) -> bool {
        let data = &self.data[item.node];
        data.status == NodeStatus::Open
            && data.sequence == item.sequence
            && data.total.total_cmp(&item.total).is_eq()
    }

    fn open_node(&mut self, node: usize, cost: Weight, predecessor: Option<usize>, goal: &Node) {
        let heuristic = self.graph.node_at(node).heuristic_distance(goal);
        let data = &mut self.data[node];

        // A node already in the open set keeps its place
        if data.status != NodeStatus::Open {
            data.sequence = self.open.next_sequence();
        }

        data.status = NodeStatus::Open;
        data.predecessor = predecessor;
        data.cost = cost;
        data.heuristic = heuristic;
        data.total = cost + heuristic;

        let (total, sequence) = (data.total, data.sequence);
        self.open.push(node, total, sequence);
    }

    /// Runs A* from `start` to `goal`.
    ///
    /// Fails only when either id is out of range. An unreachable goal is not an
    /// error: [`PathFinder::final_cost`] is then infinite.
    pub fn find_path(&mut self, start: NodeId, goal: NodeId) -> Result<(), RoutingError> {
        let stopwatch = Stopwatch::start("astar/find_path");
        let start = self.graph.node_offset(start)?;
        let goal = self.graph.node_offset(goal)?;

        self.reset();

        let graph = self.graph;
        let goal_node = graph.node_at(goal);
        self.open_node(start, 0.0, None, goal_node);

        while let Some(item) = self.open.pop() {
            if !self.is_current(&item) {
                continue;
            }

            let node = item.node;
            self.stats.iterations += 1;

            if let Some(debug_info) = self.debug_info.as_mut() {
                debug_info.settled_nodes.push(NodeId::from_offset(node));
            }

            if node == goal {
                break;
            }

            let cost = self.data[node].cost;

            for connection in graph.outgoing_at(node) {
                // Endpoints were validated when the graph was built
                let Some(next) = connection.to_node().offset() else {
                    continue;
                };

                let next_cost = cost + connection.cost();

                if next_cost < self.data[next].cost {
                    self.open_node(next, next_cost, Some(node), goal_node);
                    self.stats.relaxations += 1;
                }
            }

            self.data[node].status = NodeStatus::Visited;
        }

        let final_cost = self.data[goal].cost;
        self.final_cost = Some(final_cost);

        debug!(
            start = start + 1,
            goal = goal + 1,
            cost = final_cost,
            iterations = self.stats.iterations,
            relaxations = self.stats.relaxations,
            "AStar search finished"
        );
        stopwatch.finish();

        Ok(())
    }

    /// Walks predecessors from `goal` back to `start` using the state left by
    /// the last [`PathFinder::find_path`] call and returns the nodes in
    /// start-to-goal order.
    ///
    /// When the chain stops before reaching `start`, the walked part is
    /// returned inside [`RoutingError::NoPathFound`]. For a goal that was never
    /// reached this is just `[goal]`.
    pub fn retrieve_path(&self, start: NodeId, goal: NodeId) -> Result<Vec<NodeId>, RoutingError> {
        let start_offset = self.graph.node_offset(start)?;
        let goal_offset = self.graph.node_offset(goal)?;

        let mut path: Vec<NodeId> = Vec::with_capacity(32);
        let mut current = Some(goal_offset);

        while let Some(node) = current {
            path.push(NodeId::from_offset(node));

            // The predecessor relation is acyclic with non-negative costs, the
            // bound only protects against state left by a different query
            if node == start_offset || path.len() > self.data.len() {
                break;
            }

            current = self.data[node].predecessor;
        }

        path.reverse();

        if path.first() == Some(&start) {
            Ok(path)
        } else {
            Err(RoutingError::NoPathFound {
                start,
                goal,
                partial: path,
            })
        }
    }

    /// Convenience wrapper: search, then reconstruct. An unreachable goal is
    /// returned as `Ok` with an infinite cost and the partial chain.
    pub fn calc_path(&mut self, start: NodeId, goal: NodeId) -> Result<RoutingPath, RoutingError> {
        self.find_path(start, goal)?;

        let nodes = match self.retrieve_path(start, goal) {
            Ok(nodes) => nodes,
            Err(RoutingError::NoPathFound { partial, .. }) => partial,
            Err(error) => return Err(error),
        };

        Ok(RoutingPath::new(
            start,
            goal,
            nodes,
            self.final_cost.unwrap_or(INFINITE_WEIGHT),
        ))
    }
}
