//! `graphwalk dfs|bfs|mst|spt|all` - run algorithms from one source

use std::io::{self, Write};

use serde::Serialize;

use graphwalk_core::config::Config;
use graphwalk_core::error::Result;
use graphwalk_core::format::{Algorithm, OutputFormat};
use graphwalk_core::graph::{Graph, TraversalResult, TreeResult, Vertex};

use crate::cli::Cli;
use crate::commands::report::Report;

/// Result of one algorithm run
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Traversal(TraversalResult),
    Tree(TreeResult),
}

fn run_algorithm(graph: &Graph, algorithm: Algorithm, source: Vertex) -> Result<Outcome> {
    Ok(match algorithm {
        Algorithm::Dfs => Outcome::Traversal(graph.depth_first(source)?),
        Algorithm::Bfs => Outcome::Traversal(graph.breadth_first(source)?),
        Algorithm::Mst => Outcome::Tree(graph.minimum_spanning_tree(source)?),
        Algorithm::Spt => Outcome::Tree(graph.shortest_path_tree(source)?),
    })
}

/// Execute `algorithms` in order and print the results.
///
/// JSON output is the bare result for a single algorithm, or an object keyed
/// by algorithm name when `combined` is set.
pub fn execute(
    cli: &Cli,
    config: &Config,
    graph: &Graph,
    source: Vertex,
    algorithms: &[Algorithm],
    combined: bool,
) -> Result<()> {
    let outcomes = algorithms
        .iter()
        .map(|&algorithm| Ok((algorithm, run_algorithm(graph, algorithm, source)?)))
        .collect::<Result<Vec<_>>>()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.format {
        OutputFormat::Json => {
            let value = to_json(source, &outcomes, combined)?;
            writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
        }
        OutputFormat::Human => {
            let report = Report::new(&config.report, cli.quiet);
            for (i, (algorithm, outcome)) in outcomes.iter().enumerate() {
                if i > 0 {
                    writeln!(out)?;
                }
                match outcome {
                    Outcome::Traversal(result) => report.traversal(&mut out, *algorithm, result)?,
                    Outcome::Tree(result) => report.tree(&mut out, *algorithm, result)?,
                }
            }
        }
    }

    Ok(())
}

fn to_json(
    source: Vertex,
    outcomes: &[(Algorithm, Outcome)],
    combined: bool,
) -> Result<serde_json::Value> {
    if !combined {
        if let [(_, outcome)] = outcomes {
            return Ok(serde_json::to_value(outcome)?);
        }
    }

    let mut results = serde_json::Map::new();
    for (algorithm, outcome) in outcomes {
        results.insert(algorithm.to_string(), serde_json::to_value(outcome)?);
    }
    Ok(serde_json::json!({
        "source": source,
        "results": results,
    }))
}
