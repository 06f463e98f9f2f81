use wayfinder_core::NodeId;

/// Batch run when no `--query` is given.
pub const DEFAULT_QUERIES: [(usize, usize); 5] = [(1, 29), (1, 38), (11, 1), (33, 66), (58, 43)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Query {
    pub start: NodeId,
    pub goal: NodeId,
}

impl Query {
    pub fn new(start: usize, goal: usize) -> Self {
        Query {
            start: NodeId::new(start),
            goal: NodeId::new(goal),
        }
    }
}

pub fn default_queries() -> Vec<Query> {
    DEFAULT_QUERIES
        .iter()
        .map(|&(start, goal)| Query::new(start, goal))
        .collect()
}

/// Parses `START,GOAL`. Ids are only checked against the graph when the query
/// runs.
pub fn parse_query(input: &str) -> Result<Query, String> {
    let (start, goal) = input
        .split_once(',')
        .ok_or_else(|| format!("Expected START,GOAL, got {input:?}"))?;

    let parse_id = |value: &str| {
        value
            .trim()
            .parse::<usize>()
            .map_err(|_| format!("Invalid node id {:?}", value.trim()))
    };

    Ok(Query::new(parse_id(start)?, parse_id(goal)?))
}
