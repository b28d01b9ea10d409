//! Output format and vertex labelling for graphwalk
//!
//! Supports two output formats:
//! - human: Readable, concise output for terminal use
//! - json: Stable, machine-readable JSON of the result structs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GraphError;
use crate::graph::Vertex;

/// Output format for graphwalk commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
}

impl FromStr for OutputFormat {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(GraphError::invalid_value("format", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// How vertices are named in human output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelStyle {
    /// 1 → A, 2 → B, ..., 26 → Z, 27 → AA
    #[default]
    Letters,
    /// Plain vertex ids
    Numbers,
}

impl LabelStyle {
    pub fn label(self, vertex: Vertex) -> String {
        match self {
            LabelStyle::Numbers => vertex.to_string(),
            LabelStyle::Letters => letter_label(vertex),
        }
    }
}

/// Bijective base-26 name of a vertex id; 0 has no letter name and prints as `-`
fn letter_label(vertex: Vertex) -> String {
    if vertex == 0 {
        return "-".to_string();
    }
    let mut n = vertex;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    letters.reverse();
    String::from_utf8_lossy(&letters).into_owned()
}

impl FromStr for LabelStyle {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "letters" => Ok(LabelStyle::Letters),
            "numbers" => Ok(LabelStyle::Numbers),
            other => Err(GraphError::invalid_value("label style", other)),
        }
    }
}

impl fmt::Display for LabelStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelStyle::Letters => write!(f, "letters"),
            LabelStyle::Numbers => write!(f, "numbers"),
        }
    }
}

/// The four algorithms a run can include
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Dfs,
    Bfs,
    #[serde(alias = "prim")]
    Mst,
    #[serde(alias = "dijkstra")]
    Spt,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Dfs,
        Algorithm::Bfs,
        Algorithm::Mst,
        Algorithm::Spt,
    ];

    /// Heading used in human output
    pub fn title(self) -> &'static str {
        match self {
            Algorithm::Dfs => "Depth-first traversal",
            Algorithm::Bfs => "Breadth-first traversal",
            Algorithm::Mst => "Minimum spanning tree (Prim)",
            Algorithm::Spt => "Shortest path tree (Dijkstra)",
        }
    }
}

impl FromStr for Algorithm {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dfs" => Ok(Algorithm::Dfs),
            "bfs" => Ok(Algorithm::Bfs),
            "mst" | "prim" => Ok(Algorithm::Mst),
            "spt" | "dijkstra" => Ok(Algorithm::Spt),
            other => Err(GraphError::invalid_value("algorithm", other)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Dfs => write!(f, "dfs"),
            Algorithm::Bfs => write!(f, "bfs"),
            Algorithm::Mst => write!(f, "mst"),
            Algorithm::Spt => write!(f, "spt"),
        }
    }
}
