//! `graphwalk info` - graph size and adjacency lists

use std::io::{self, Write};

use serde::Serialize;

use graphwalk_core::config::Config;
use graphwalk_core::error::Result;
use graphwalk_core::format::{LabelStyle, OutputFormat};
use graphwalk_core::graph::{Edge, Graph, Neighbor, Vertex};

use crate::cli::Cli;

#[derive(Debug, Serialize)]
struct GraphInfo<'a> {
    vertex_count: usize,
    edge_count: usize,
    edges: Vec<&'a Edge>,
    adjacency: Vec<AdjacencyEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct AdjacencyEntry<'a> {
    vertex: Vertex,
    neighbors: &'a [Neighbor],
}

impl<'a> GraphInfo<'a> {
    fn new(graph: &'a Graph) -> Self {
        GraphInfo {
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            edges: graph.edges().collect(),
            adjacency: graph
                .vertices()
                .map(|vertex| AdjacencyEntry {
                    vertex,
                    neighbors: graph.neighbors(vertex),
                })
                .collect(),
        }
    }
}

/// Execute the info command
pub fn execute(cli: &Cli, config: &Config, graph: &Graph) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.format {
        OutputFormat::Json => {
            let info = GraphInfo::new(graph);
            writeln!(out, "{}", serde_json::to_string_pretty(&info)?)?;
        }
        OutputFormat::Human => write_human(&mut out, graph, config.report.labels, cli.quiet)?,
    }
    Ok(())
}

fn write_human<W: Write>(out: &mut W, graph: &Graph, labels: LabelStyle, quiet: bool) -> Result<()> {
    if !quiet {
        writeln!(out, "vertices: {}", graph.vertex_count())?;
        writeln!(out, "edges: {}", graph.edge_count())?;
    }
    for vertex in graph.vertices() {
        let mut line = format!("{}:", labels.label(vertex));
        for neighbor in graph.neighbors(vertex) {
            line.push_str(&format!(" {}({})", labels.label(neighbor.vertex), neighbor.weight));
        }
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
