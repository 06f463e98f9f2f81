use std::path::PathBuf;

use clap::Args;
use tracing::info;
use wayfinder_core::{NodeId, PathFinder, SearchOptions, parsers::GraphParser};

use crate::report::format_path;

#[derive(Args)]
pub struct RouteArgs {
    #[arg(short, long, env = "WAYFINDER_NODES")]
    nodes: PathBuf,

    #[arg(short, long, env = "WAYFINDER_CONNECTIONS")]
    connections: PathBuf,

    start: usize,

    goal: usize,

    /// Also log the order in which nodes were settled
    #[arg(long)]
    settled: bool,
}

pub fn run(args: RouteArgs) -> Result<(), anyhow::Error> {
    let graph = GraphParser::from_files(&args.nodes, &args.connections)?;

    let mut finder = PathFinder::with_options(
        &graph,
        SearchOptions {
            include_debug_info: args.settled,
        },
    );

    let path = finder.calc_path(NodeId::new(args.start), NodeId::new(args.goal))?;

    info!(
        "Path from {} to {}: {}",
        path.start(),
        path.goal(),
        format_path(path.nodes())
    );
    info!("Total Cost: {:?}", path.cost());

    let stats = finder.stats();
    info!(
        "{} iterations, {} relaxations",
        stats.iterations, stats.relaxations
    );

    if let Some(debug_info) = finder.debug_info() {
        info!("Settled: {}", format_path(&debug_info.settled_nodes));
    }

    Ok(())
}
