//! Reader for the plain-text graph description
//!
//! ```text
//! V E
//! u1 v1 w1
//! ...
//! uE vE wE
//! ```
//!
//! Fields are separated by runs of whitespace. Blank lines are skipped but
//! still counted, so error line numbers always refer to physical lines.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;
use std::time::Instant;

use crate::bail_format;
use crate::error::{GraphError, Result};
use crate::graph::{Graph, Vertex, MAX_VERTICES};

/// Line-numbered iterator over the non-blank lines of a reader
struct Lines<R> {
    inner: std::io::Lines<R>,
    line_no: usize,
}

impl<R: BufRead> Lines<R> {
    fn new(reader: R) -> Self {
        Self {
            inner: reader.lines(),
            line_no: 0,
        }
    }

    /// Next non-blank line with its 1-based number, `None` at end of input
    fn next_content(&mut self) -> Result<Option<(usize, String)>> {
        for line in self.inner.by_ref() {
            let line = line?;
            self.line_no += 1;
            if !line.trim().is_empty() {
                return Ok(Some((self.line_no, line)));
            }
        }
        Ok(None)
    }
}

impl Graph {
    /// Parse a graph description from any buffered reader
    pub fn load<R: BufRead>(reader: R) -> Result<Self> {
        let start = Instant::now();
        let mut lines = Lines::new(reader);

        let Some((header_line, header)) = lines.next_content()? else {
            bail_format!(1, "missing header line with vertex and edge counts");
        };
        let fields: Vec<&str> = header.split_whitespace().collect();
        if fields.len() != 2 {
            bail_format!(
                header_line,
                "header must contain vertex and edge counts, found {} fields",
                fields.len()
            );
        }
        let vertex_count = parse_count(fields[0], header_line, "vertex count")?;
        let edge_count = parse_count(fields[1], header_line, "edge count")?;
        if vertex_count == 0 {
            bail_format!(header_line, "vertex count must be at least 1");
        }
        if vertex_count > MAX_VERTICES {
            bail_format!(
                header_line,
                "vertex count {} exceeds the limit of {}",
                vertex_count,
                MAX_VERTICES
            );
        }

        let mut graph = Graph::with_vertices(vertex_count);
        for read in 0..edge_count {
            let Some((line_no, line)) = lines.next_content()? else {
                bail_format!(
                    lines.line_no + 1,
                    "expected {} edge lines, found {}",
                    edge_count,
                    read
                );
            };

            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() != 3 {
                bail_format!(
                    line_no,
                    "edge line must contain `u v weight`, found {} fields",
                    fields.len()
                );
            }
            let u = parse_vertex(fields[0], line_no, vertex_count)?;
            let v = parse_vertex(fields[1], line_no, vertex_count)?;
            let weight = parse_weight(fields[2], line_no)?;
            graph.push_edge(u, v, weight);
        }

        if let Some((line_no, _)) = lines.next_content()? {
            bail_format!(
                line_no,
                "unexpected content after {} edge lines",
                edge_count
            );
        }

        tracing::debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            elapsed = ?start.elapsed(),
            "graph_loaded"
        );
        Ok(graph)
    }

    /// Read and parse a graph description file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            GraphError::Other(format!("failed to open {}: {}", path.display(), e))
        })?;
        tracing::debug!(path = %path.display(), "load_graph_file");
        Self::load(BufReader::new(file))
    }
}

impl FromStr for Graph {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        Self::load(s.as_bytes())
    }
}

fn parse_count(field: &str, line: usize, what: &str) -> Result<usize> {
    if field.starts_with('-') {
        bail_format!(line, "{} must not be negative: {}", what, field);
    }
    field
        .parse()
        .map_err(|_| GraphError::format(line, format!("invalid {}: {}", what, field)))
}

fn parse_vertex(field: &str, line: usize, vertex_count: usize) -> Result<Vertex> {
    let out_of_range =
        || GraphError::format(line, format!("vertex {} out of range 1..={}", field, vertex_count));

    if field.starts_with('-') {
        return Err(out_of_range());
    }
    let vertex: Vertex = field
        .parse()
        .map_err(|_| GraphError::format(line, format!("invalid vertex id: {}", field)))?;
    if vertex == 0 || vertex > vertex_count {
        return Err(out_of_range());
    }
    Ok(vertex)
}

fn parse_weight(field: &str, line: usize) -> Result<u32> {
    if field.starts_with('-') {
        bail_format!(line, "negative weight {}", field);
    }
    field
        .parse()
        .map_err(|_| GraphError::format(line, format!("invalid weight: {}", field)))
}
