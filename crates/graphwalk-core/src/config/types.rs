//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::format::{Algorithm, LabelStyle};
use crate::graph::Vertex;

/// Top-level graphwalk configuration (`graphwalk.toml`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Human output settings
    #[serde(default)]
    pub report: ReportConfig,

    /// Defaults for algorithm runs
    #[serde(default)]
    pub run: RunConfig,
}

/// Settings for human-readable reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Vertex naming: letters (A, B, ...) or numbers
    #[serde(default)]
    pub labels: LabelStyle,

    /// Print the full source-to-vertex path for each shortest path tree entry
    #[serde(default = "default_show_paths")]
    pub show_paths: bool,
}

/// Defaults applied when the command line leaves them open
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Algorithms executed by `graphwalk all`, in order
    #[serde(default = "default_algorithms")]
    pub algorithms: Vec<Algorithm>,

    /// Source vertex used when `--source` is not given
    #[serde(default = "default_source")]
    pub source: Vertex,
}

fn default_show_paths() -> bool {
    true
}

fn default_algorithms() -> Vec<Algorithm> {
    Algorithm::ALL.to_vec()
}

fn default_source() -> Vertex {
    1
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            labels: LabelStyle::default(),
            show_paths: default_show_paths(),
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            algorithms: default_algorithms(),
            source: default_source(),
        }
    }
}
