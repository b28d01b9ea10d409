//! Command dispatch logic for graphwalk
use std::env;
use std::path::Path;
use std::time::Instant;

use graphwalk_core::config::Config;
use graphwalk_core::error::Result;
use graphwalk_core::format::Algorithm;
use graphwalk_core::graph::{Graph, Vertex};
use graphwalk_core::{bail_usage, trace_time};

use crate::cli::{Cli, Commands, GraphArgs};
use crate::commands::{info, run};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let mut config = load_config(cli)?;
    if let Some(labels) = cli.labels {
        config.report.labels = labels;
    }
    trace_time!(start, "load_config");

    match &cli.command {
        Commands::Dfs(args) => handle_run(cli, &config, args, &[Algorithm::Dfs], start),
        Commands::Bfs(args) => handle_run(cli, &config, args, &[Algorithm::Bfs], start),
        Commands::Mst(args) => handle_run(cli, &config, args, &[Algorithm::Mst], start),
        Commands::Spt(args) => handle_run(cli, &config, args, &[Algorithm::Spt], start),
        Commands::All(args) => handle_run(cli, &config, args, &config.run.algorithms, start),
        Commands::Info { path } => {
            let graph = load_graph(path, start)?;
            info::execute(cli, &config, &graph)
        }
    }
}

/// Explicit `--config` must exist; otherwise discover from the working directory
fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => {
            if !path.is_file() {
                bail_usage!(format!("config file not found: {}", path.display()));
            }
            Config::load(path)
        }
        None => Config::discover(&env::current_dir()?),
    }
}

fn load_graph(path: &Path, start: Instant) -> Result<Graph> {
    let graph = Graph::from_file(path)?;
    trace_time!(start, "load_graph", vertices = graph.vertex_count(), edges = graph.edge_count());
    Ok(graph)
}

fn handle_run(
    cli: &Cli,
    config: &Config,
    args: &GraphArgs,
    algorithms: &[Algorithm],
    start: Instant,
) -> Result<()> {
    let graph = load_graph(&args.path, start)?;
    let source: Vertex = args.source.unwrap_or(config.run.source);
    let combined = matches!(cli.command, Commands::All(_));

    run::execute(cli, config, &graph, source, algorithms, combined)?;
    trace_time!(start, "run_complete", source = source);
    Ok(())
}
