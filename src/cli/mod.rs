//! CLI argument parsing for graphwalk
//!
//! Global flags: --format, --labels, --config, --quiet, --verbose,
//! --log-level, --log-json

pub mod parse;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use graphwalk_core::format::{LabelStyle, OutputFormat};
use graphwalk_core::graph::Vertex;
use parse::{parse_label_style, parse_output_format};

/// Graphwalk - traversals, spanning trees and shortest paths on weighted graphs
#[derive(Parser, Debug)]
#[command(name = "graphwalk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json)
    #[arg(long, global = true, value_parser = parse_output_format, default_value = "human")]
    pub format: OutputFormat,

    /// Vertex labels in human output: letters or numbers (defaults to the config value)
    #[arg(long, global = true, value_parser = parse_label_style)]
    pub labels: Option<LabelStyle>,

    /// Config file to use instead of the discovered one
    #[arg(long, global = true, env = "GRAPHWALK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress headings and error messages in human output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Depth-first traversal with discovery and finish times
    Dfs(GraphArgs),

    /// Breadth-first traversal of the source's component
    Bfs(GraphArgs),

    /// Minimum spanning tree (Prim)
    #[command(alias = "prim")]
    Mst(GraphArgs),

    /// Shortest path tree (Dijkstra)
    #[command(alias = "dijkstra")]
    Spt(GraphArgs),

    /// Run every algorithm listed in the config
    All(GraphArgs),

    /// Show vertex and edge counts and the adjacency lists
    Info {
        /// Graph file
        path: PathBuf,
    },
}

/// Arguments shared by the algorithm commands
#[derive(Args, Debug)]
pub struct GraphArgs {
    /// Graph file: `V E` on the first line, then E lines of `u v w`
    pub path: PathBuf,

    /// Source vertex, numbered from 1 (defaults to the config value)
    #[arg(long, short)]
    pub source: Option<Vertex>,
}
