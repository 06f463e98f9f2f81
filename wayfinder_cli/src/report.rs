use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::{Args, ValueEnum};
use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};
use serde::Serialize;
use tracing::{info, warn};
use wayfinder_core::{NodeId, PathFinder, RoutingPath, parsers::GraphParser};

use crate::{
    file_utils::{non_comment_lines, read_source},
    queries::{Query, default_queries, parse_query},
};

pub const DEFAULT_TITLE: &str = "Pathfinding Output";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args)]
pub struct ReportArgs {
    /// Node table
    #[arg(short, long, env = "WAYFINDER_NODES")]
    nodes: PathBuf,

    /// Connection table
    #[arg(short, long, env = "WAYFINDER_CONNECTIONS")]
    connections: PathBuf,

    #[arg(short, long, env = "WAYFINDER_OUTPUT", default_value = "Pathfinding_Output.txt")]
    output: PathBuf,

    /// Query as START,GOAL, repeatable. Runs the default batch when omitted
    #[arg(short, long = "query", value_parser = parse_query)]
    queries: Vec<Query>,

    #[arg(long, default_value = DEFAULT_TITLE)]
    title: String,

    #[arg(long)]
    subtitle: Option<String>,

    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Print a table of the results
    #[arg(long)]
    summary: bool,
}

#[derive(Debug, Serialize)]
pub struct Report {
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    subtitle: Option<String>,
    results: Vec<RoutingPath>,
}

impl Report {
    pub fn new(title: String, subtitle: Option<String>, results: Vec<RoutingPath>) -> Self {
        Report {
            title,
            subtitle,
            results,
        }
    }

    pub fn results(&self) -> &[RoutingPath] {
        &self.results
    }

    /// Writes the plain text report: header, the echoed source tables, then
    /// one block per query.
    pub fn write_text<W: Write>(
        &self,
        writer: &mut W,
        nodes_text: &str,
        connections_text: &str,
    ) -> std::io::Result<()> {
        writeln!(writer, "{}", self.title)?;
        if let Some(subtitle) = &self.subtitle {
            writeln!(writer, "{subtitle}")?;
        }
        writeln!(writer)?;

        for line in non_comment_lines(nodes_text).chain(non_comment_lines(connections_text)) {
            writeln!(writer, "{line}")?;
        }
        write!(writer, "\n\n")?;

        for path in &self.results {
            writeln!(
                writer,
                "Path from {} to {}: {}",
                path.start(),
                path.goal(),
                format_path(path.nodes())
            )?;
            writeln!(writer, "Total Cost: {}", format_cost(path))?;
            writeln!(writer)?;
        }

        Ok(())
    }

    pub fn write_json<W: Write>(&self, writer: &mut W) -> Result<(), serde_json::Error> {
        serde_json::to_writer_pretty(writer, self)
    }

    pub fn summary_table(&self) -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["Start", "Goal", "Cost", "Hops", "Path"]);

        for path in &self.results {
            let hops = if path.is_reachable() {
                path.nodes().len().saturating_sub(1).to_string()
            } else {
                String::from("-")
            };

            table.add_row(vec![
                path.start().to_string(),
                path.goal().to_string(),
                format_cost(path),
                hops,
                format_path(path.nodes()),
            ]);
        }

        table
    }
}

/// `[1, 2, 5]`
pub fn format_path(nodes: &[NodeId]) -> String {
    let ids: Vec<String> = nodes.iter().map(ToString::to_string).collect();
    format!("[{}]", ids.join(", "))
}

/// Costs keep a decimal point (`9.0`, `inf`), except the untraveled cost of a
/// query whose start is its goal, which prints as `0`.
pub fn format_cost(path: &RoutingPath) -> String {
    if path.start() == path.goal() && path.cost() == 0.0 {
        String::from("0")
    } else {
        format!("{:?}", path.cost())
    }
}

/// Runs every query in order. Queries naming a node outside the graph are
/// logged and left out of the results.
pub fn run_queries(finder: &mut PathFinder, queries: &[Query]) -> Vec<RoutingPath> {
    queries
        .iter()
        .filter_map(|query| match finder.calc_path(query.start, query.goal) {
            Ok(path) => Some(path),
            Err(error) => {
                warn!(
                    "Skipping query {} -> {}: {}",
                    query.start, query.goal, error
                );
                None
            }
        })
        .collect()
}

pub fn run(args: ReportArgs) -> Result<(), anyhow::Error> {
    info!(
        "Loading graph from {:?} and {:?}",
        args.nodes, args.connections
    );

    let nodes_text = read_source(&args.nodes)?;
    let connections_text = read_source(&args.connections)?;
    let graph = GraphParser::from_strs(&nodes_text, &connections_text)?;

    info!(
        "Loaded {} nodes and {} connections",
        graph.node_count(),
        graph.connection_count()
    );

    let queries = if args.queries.is_empty() {
        default_queries()
    } else {
        args.queries
    };

    let mut finder = PathFinder::new(&graph);
    let results = run_queries(&mut finder, &queries);
    let report = Report::new(args.title, args.subtitle, results);
    info!(
        "Answered {} of {} queries",
        report.results().len(),
        queries.len()
    );

    let file = File::create(&args.output)
        .with_context(|| format!("Failed to create {:?}", args.output))?;
    let mut writer = BufWriter::new(file);
    match args.format {
        ReportFormat::Text => report.write_text(&mut writer, &nodes_text, &connections_text)?,
        ReportFormat::Json => report.write_json(&mut writer)?,
    }
    writer.flush()?;

    info!("Report written to {:?}", args.output);

    if args.summary {
        println!("{}", report.summary_table());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::env;

    use super::*;

    fn fixture_texts() -> (String, String) {
        let fixtures = env::current_dir().unwrap().join("tests/fixtures");
        (
            read_source(&fixtures.join("nodes.txt")).unwrap(),
            read_source(&fixtures.join("connections.txt")).unwrap(),
        )
    }

    fn fixture_report(queries: &[Query]) -> Report {
        let (nodes_text, connections_text) = fixture_texts();
        let graph = GraphParser::from_strs(&nodes_text, &connections_text).unwrap();
        let mut finder = PathFinder::new(&graph);

        Report::new(
            String::from(DEFAULT_TITLE),
            None,
            run_queries(&mut finder, queries),
        )
    }

    #[test]
    fn test_format_path() {
        let nodes: Vec<NodeId> = [1, 2, 5].into_iter().map(NodeId::new).collect();

        assert_eq!(format_path(&nodes), "[1, 2, 5]");
        assert_eq!(format_path(&[NodeId::new(6)]), "[6]");
        assert_eq!(format_path(&[]), "[]");
    }

    #[test]
    fn test_format_cost() {
        let report = fixture_report(&[Query::new(1, 5), Query::new(1, 6), Query::new(4, 4)]);
        let costs: Vec<String> = report.results().iter().map(format_cost).collect();

        assert_eq!(costs, vec!["9.0", "inf", "0"]);
    }

    #[test]
    fn test_invalid_queries_are_skipped() {
        let report = fixture_report(&[Query::new(1, 5), Query::new(1, 99), Query::new(0, 2)]);

        assert_eq!(report.results().len(), 1);
        assert_eq!(report.results()[0].cost(), 9.0);
    }

    #[test]
    fn test_text_report() {
        let (nodes_text, connections_text) = fixture_texts();
        let report = fixture_report(&[Query::new(1, 5), Query::new(3, 2), Query::new(1, 6)]);

        let mut output = Vec::new();
        report
            .write_text(&mut output, &nodes_text, &connections_text)
            .unwrap();
        let output = String::from_utf8(output).unwrap();

        assert!(output.starts_with("Pathfinding Output\n\nN,1,1,0,0,0,0,0,0,1,A,Southwest\n"));
        assert!(!output.contains('#'));
        assert!(output.contains("N,6,1,0,0,0,0,10,10,1,F,Island\nC,1,1,2,3,0,1\n"));
        assert!(output.ends_with(
            "C,11,2,5,6,0,2\n\n\n\
             Path from 1 to 5: [1, 2, 5]\n\
             Total Cost: 9.0\n\n\
             Path from 3 to 2: [3, 1, 2]\n\
             Total Cost: 7.0\n\n\
             Path from 1 to 6: [6]\n\
             Total Cost: inf\n\n"
        ));
    }

    #[test]
    fn test_subtitle_line() {
        let report = Report::new(
            String::from("Pathfinding Output"),
            Some(String::from("Diamond graph")),
            vec![],
        );

        let mut output = Vec::new();
        report.write_text(&mut output, "", "").unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Pathfinding Output\nDiamond graph\n\n\n\n"
        );
    }

    #[test]
    fn test_json_report() {
        let report = fixture_report(&[Query::new(5, 2), Query::new(1, 6)]);

        let mut output = Vec::new();
        report.write_json(&mut output).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();

        assert_eq!(value["title"], "Pathfinding Output");
        assert!(value.get("subtitle").is_none());
        assert_eq!(value["results"][0]["nodes"], serde_json::json!([5, 4, 2]));
        assert_eq!(value["results"][0]["cost"], 7.0);
        assert!(value["results"][1]["cost"].is_null());
    }

    #[test]
    fn test_summary_table() {
        let report = fixture_report(&[Query::new(1, 5), Query::new(1, 6)]);
        let table = report.summary_table().to_string();

        assert!(table.contains("Start"));
        assert!(table.contains("[1, 2, 5]"));
        assert!(table.contains("inf"));
    }
}
