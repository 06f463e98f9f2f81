use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;

use crate::{report::ReportArgs, route::RouteArgs};

mod file_utils;
mod queries;
mod report;
mod route;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a batch of queries and write the report file
    Report {
        #[command(flatten)]
        args: ReportArgs,
    },
    /// Run a single query and log the path
    #[command(visible_alias = "r")]
    Route {
        #[command(flatten)]
        args: RouteArgs,
    },
}

fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Commands::Report { args } => report::run(args)?,
        Commands::Route { args } => route::run(args)?,
    }

    Ok(())
}
