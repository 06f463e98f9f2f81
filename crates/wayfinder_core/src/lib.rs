pub mod constants;
pub mod error;
pub mod graph;
pub mod location;
pub mod parsers;
pub mod routing;
mod stopwatch;
mod utils;
pub mod weight;

pub use error::{GraphError, LoadError, RoutingError};
pub use graph::{
    Graph,
    connection::{Connection, ConnectionId},
    node::{Node, NodeId},
};
pub use routing::{
    astar::{NodeState, NodeStatus, PathFinder, SearchDebugInfo, SearchOptions, SearchStats},
    routing_path::RoutingPath,
};
pub use weight::Weight;

#[cfg(test)]
pub(crate) mod test_graph_utils;
