#[cfg(test)]
pub mod test_graph {
    use crate::{
        graph::{
            Graph,
            connection::{Connection, ConnectionId},
            node::{Node, NodeId},
        },
        location::Location,
    };

    pub fn node(id: usize, x: f64, y: f64) -> Node {
        Node::new(NodeId::new(id), Location::from_cartesian(x, y))
    }

    /// Builds a graph from `(x, y)` node positions and `(from, to, cost)`
    /// connections, numbering both from 1 in the order given.
    pub fn build_graph(nodes: &[(f64, f64)], connections: &[(usize, usize, f64)]) -> Graph {
        let nodes = nodes
            .iter()
            .enumerate()
            .map(|(index, &(x, y))| node(index + 1, x, y))
            .collect();

        let connections = connections
            .iter()
            .enumerate()
            .map(|(index, &(from, to, cost))| {
                Connection::new(
                    ConnectionId::new(index + 1),
                    NodeId::new(from),
                    NodeId::new(to),
                    cost,
                    1,
                )
            })
            .collect();

        Graph::new(nodes, connections).unwrap()
    }

    /// Five nodes on a 3-4-5 grid plus an isolated node 6.
    ///
    /// ```text
    ///   3 ---3--- 4 ---3--- 5
    ///   |         |       /
    ///   4         4     6
    ///   |         |   /
    ///   1 ---3--- 2
    /// ```
    ///
    /// Every edge except 2 -> 5 runs both ways. 3 -> 2 has two paths of
    /// cost 7 whose totals tie during the search.
    pub fn create_diamond_graph() -> Graph {
        build_graph(
            &[
                (0.0, 0.0),
                (3.0, 0.0),
                (0.0, 4.0),
                (3.0, 4.0),
                (6.0, 4.0),
                (10.0, 10.0),
            ],
            &[
                (1, 2, 3.0),
                (2, 1, 3.0),
                (1, 3, 4.0),
                (3, 1, 4.0),
                (2, 4, 4.0),
                (4, 2, 4.0),
                (3, 4, 3.0),
                (4, 3, 3.0),
                (4, 5, 3.0),
                (5, 4, 3.0),
                (2, 5, 6.0),
            ],
        )
    }

    /// `len` nodes on the x axis one unit apart, chained 1 -> 2 -> ... -> len
    /// with cost 1.5 per hop, and a long shortcut 1 -> len that is never
    /// cheaper.
    pub fn create_line_graph(len: usize) -> Graph {
        let nodes: Vec<(f64, f64)> = (0..len).map(|i| (i as f64, 0.0)).collect();
        let mut connections: Vec<(usize, usize, f64)> =
            (1..len).map(|id| (id, id + 1, 1.5)).collect();
        connections.push((1, len, 1.5 * len as f64));

        build_graph(&nodes, &connections)
    }
}
