//! Reader for the comma-separated node and connection tables.
//!
//! Node record:
//! `N, id, status, cost so far, heuristic, total, previous, x, y[, plot position, plot label, name]`
//!
//! Connection record:
//! `C, id, from, to, cost, cost plus, type`
//!
//! The status, cost so far, heuristic, total and previous columns of the node
//! table and the cost plus column of the connection table hold values from the
//! tool that produced the data. They must be numeric but are otherwise ignored.

use std::{path::Path, str::FromStr};

use tracing::debug;

use crate::{
    constants::{
        COMMENT_MARKER, CONNECTION_FIELDS, CONNECTION_KIND, FIELD_DELIMITER, NODE_KIND,
        NODE_MAX_FIELDS, NODE_MIN_FIELDS, NODE_NAME_FIELD,
    },
    error::{GraphSource, LoadError},
    graph::{
        Graph,
        connection::{Connection, ConnectionId},
        node::{Node, NodeId},
    },
    location::Location,
    stopwatch::Stopwatch,
};

/// Lines starting with `#` are comments.
pub fn is_comment(line: &str) -> bool {
    line.starts_with(COMMENT_MARKER)
}

pub struct GraphParser;

impl GraphParser {
    pub fn from_files<N, C>(nodes_file: N, connections_file: C) -> Result<Graph, LoadError>
    where
        N: AsRef<Path>,
        C: AsRef<Path>,
    {
        let stopwatch = Stopwatch::start("graph/load");

        let nodes_text = read_source(nodes_file.as_ref(), GraphSource::Nodes)?;
        let connections_text = read_source(connections_file.as_ref(), GraphSource::Connections)?;
        let graph = Self::from_strs(&nodes_text, &connections_text)?;

        stopwatch.finish();
        Ok(graph)
    }

    /// Parses both tables and builds the graph. Nothing is returned unless
    /// every record is valid.
    pub fn from_strs(nodes_text: &str, connections_text: &str) -> Result<Graph, LoadError> {
        let nodes = parse_nodes(nodes_text)?;
        let connections = parse_connections(connections_text)?;

        debug!(
            "Parsed {} node records and {} connection records",
            nodes.len(),
            connections.len()
        );

        Graph::new(nodes, connections)
    }
}

fn read_source(path: &Path, source_kind: GraphSource) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|error| LoadError::Read {
        source_kind,
        path: path.to_path_buf(),
        error,
    })
}

struct Record<'a> {
    source_kind: GraphSource,
    line: usize,
    fields: Vec<&'a str>,
}

impl<'a> Record<'a> {
    fn check_kind(&self, expected: &'static str) -> Result<(), LoadError> {
        if self.fields[0] == expected {
            Ok(())
        } else {
            Err(LoadError::KindTag {
                source_kind: self.source_kind,
                line: self.line,
                expected,
                found: self.fields[0].to_string(),
            })
        }
    }

    fn check_field_count(&self, min: usize, max: usize) -> Result<(), LoadError> {
        let found = self.fields.len();
        if (min..=max).contains(&found) {
            return Ok(());
        }

        let expected = if min == max {
            format!("{min}")
        } else {
            format!("{min} to {max}")
        };

        Err(LoadError::FieldCount {
            source_kind: self.source_kind,
            line: self.line,
            expected,
            found,
        })
    }

    fn parse<T: FromStr>(&self, field: usize) -> Result<T, LoadError> {
        let value = self.fields[field];
        value.parse::<T>().map_err(|_| LoadError::InvalidNumber {
            source_kind: self.source_kind,
            line: self.line,
            field,
            value: value.to_string(),
        })
    }

    fn text(&self, field: usize) -> Option<&'a str> {
        self.fields
            .get(field)
            .copied()
            .filter(|value| !value.is_empty())
    }
}

/// Non-comment, non-blank lines split into trimmed fields, with 1-based line
/// numbers.
fn records(text: &str, source_kind: GraphSource) -> impl Iterator<Item = Record<'_>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !is_comment(line) && !line.trim().is_empty())
        .map(move |(index, line)| Record {
            source_kind,
            line: index + 1,
            fields: line.split(FIELD_DELIMITER).map(str::trim).collect(),
        })
}

pub fn parse_nodes(text: &str) -> Result<Vec<Node>, LoadError> {
    records(text, GraphSource::Nodes)
        .map(|record| {
            record.check_field_count(NODE_MIN_FIELDS, NODE_MAX_FIELDS)?;
            record.check_kind(NODE_KIND)?;

            let id: usize = record.parse(1)?;
            for field in 2..=6 {
                record.parse::<f64>(field)?;
            }
            let x: f64 = record.parse(7)?;
            let y: f64 = record.parse(8)?;

            let node = Node::new(NodeId::new(id), Location::from_cartesian(x, y));

            Ok(match record.text(NODE_NAME_FIELD) {
                Some(name) => node.with_name(name),
                None => node,
            })
        })
        .collect()
}

pub fn parse_connections(text: &str) -> Result<Vec<Connection>, LoadError> {
    records(text, GraphSource::Connections)
        .map(|record| {
            record.check_field_count(CONNECTION_FIELDS, CONNECTION_FIELDS)?;
            record.check_kind(CONNECTION_KIND)?;

            let id: usize = record.parse(1)?;
            let from: usize = record.parse(2)?;
            let to: usize = record.parse(3)?;
            let cost: f64 = record.parse(4)?;
            record.parse::<f64>(5)?;
            let connection_type: u32 = record.parse(6)?;

            Ok(Connection::new(
                ConnectionId::new(id),
                NodeId::new(from),
                NodeId::new(to),
                cost,
                connection_type,
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const NODES: &str = "\
# Node table
# id,node,status,cost,heuristic,total,previous,x,z,plot,label,name
N,1,1,0,0,0,0,0.0,0.0,1,A,Alpha
N,2,1,0,0,0,0,3.0,0.0,1,B,Bravo

N,3,1,0,0,0,0,0.0,4.0
";

    const CONNECTIONS: &str = "\
# Connection table
C,1,1,2,3.0,0,1
C,2,2,3,5.5,0,2
C, 3, 3, 1, 4, 0, 1
";

    #[test]
    fn test_parse_graph() {
        let graph = GraphParser::from_strs(NODES, CONNECTIONS).unwrap();

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.connection_count(), 3);

        let bravo = graph.node(NodeId::new(2)).unwrap();
        assert_eq!(bravo.name(), Some("Bravo"));
        assert_eq!(bravo.location().x(), 3.0);
        assert_eq!(graph.node(NodeId::new(3)).unwrap().name(), None);

        let connection = graph.connection(ConnectionId::new(2)).unwrap();
        assert_eq!(connection.from_node(), NodeId::new(2));
        assert_eq!(connection.to_node(), NodeId::new(3));
        assert_eq!(connection.cost(), 5.5);
        assert_eq!(connection.connection_type(), 2);

        assert_eq!(graph.connection(ConnectionId::new(3)).unwrap().cost(), 4.0);
    }

    #[test]
    fn test_comment_lines() {
        assert!(is_comment("# header"));
        assert!(!is_comment(" # indented"));
        assert!(!is_comment("N,1,1,0,0,0,0,0,0"));
    }

    #[test]
    fn test_invalid_number() {
        let nodes = "N,1,1,0,0,0,0,zero,0.0\n";
        let error = parse_nodes(nodes).unwrap_err();

        assert!(matches!(
            error,
            LoadError::InvalidNumber {
                source_kind: GraphSource::Nodes,
                line: 1,
                field: 7,
                ..
            }
        ));
        assert_eq!(
            error.to_string(),
            "nodes line 1: field 7 is not a valid number: \"zero\""
        );
    }

    #[test]
    fn test_wrong_field_count() {
        let error = parse_connections("# comment\nC,1,1,2,3.0,0\n").unwrap_err();

        assert!(matches!(
            error,
            LoadError::FieldCount {
                source_kind: GraphSource::Connections,
                line: 2,
                found: 6,
                ..
            }
        ));

        let error = parse_nodes("N,1,1,0,0,0,0,0.0\n").unwrap_err();
        assert_eq!(
            error.to_string(),
            "nodes line 1: expected 9 to 12 fields, found 8"
        );
    }

    #[test]
    fn test_wrong_kind_tag() {
        let error = parse_connections("N,1,1,2,3.0,0,1\n").unwrap_err();

        assert!(matches!(
            error,
            LoadError::KindTag { expected: "C", ref found, .. } if found == "N"
        ));
    }

    #[test]
    fn test_load_is_all_or_nothing() {
        // The last connection points at a node that does not exist
        let connections = "C,1,1,2,3.0,0,1\nC,2,2,9,1.0,0,1\n";
        let result = GraphParser::from_strs(NODES, connections);

        assert!(matches!(
            result,
            Err(LoadError::DanglingConnection { node, .. }) if node == NodeId::new(9)
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = GraphParser::from_files("does/not/exist.txt", "does/not/exist.txt");

        assert!(matches!(
            result,
            Err(LoadError::Read {
                source_kind: GraphSource::Nodes,
                ..
            })
        ));
    }
}
