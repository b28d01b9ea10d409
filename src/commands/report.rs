//! Human-readable rendering of traversal and tree results

use std::io::Write;

use graphwalk_core::config::ReportConfig;
use graphwalk_core::error::Result;
use graphwalk_core::format::{Algorithm, LabelStyle};
use graphwalk_core::graph::{TraversalKind, TraversalResult, TreeKind, TreeResult, Vertex};

const NONE: &str = "-";

/// Renders results as aligned text tables
pub struct Report {
    labels: LabelStyle,
    show_paths: bool,
    quiet: bool,
}

impl Report {
    pub fn new(config: &ReportConfig, quiet: bool) -> Self {
        Report {
            labels: config.labels,
            show_paths: config.show_paths,
            quiet,
        }
    }

    fn name(&self, vertex: Vertex) -> String {
        self.labels.label(vertex)
    }

    fn parent_name(&self, parent: Option<Vertex>) -> String {
        parent.map_or_else(|| NONE.to_string(), |p| self.name(p))
    }

    fn heading<W: Write>(&self, out: &mut W, algorithm: Algorithm, source: Vertex) -> Result<()> {
        if !self.quiet {
            writeln!(out, "{} from {}", algorithm.title(), self.name(source))?;
        }
        Ok(())
    }

    pub fn traversal<W: Write>(
        &self,
        out: &mut W,
        algorithm: Algorithm,
        result: &TraversalResult,
    ) -> Result<()> {
        self.heading(out, algorithm, result.source)?;

        let order: Vec<String> = result.visit_order.iter().map(|&v| self.name(v)).collect();
        writeln!(out, "order: {}", order.join(" "))?;

        match result.kind {
            TraversalKind::DepthFirst => {
                writeln!(out, "{:<8}{:<8}{:<12}finished", "vertex", "parent", "discovered")?;
                for v in 1..=result.vertex_count() {
                    writeln!(
                        out,
                        "{:<8}{:<8}{:<12}{}",
                        self.name(v),
                        self.parent_name(result.parent[v]),
                        stamp(result.discovery[v]),
                        stamp(result.finish[v])
                    )?;
                }
            }
            TraversalKind::BreadthFirst => {
                writeln!(out, "{:<8}{:<8}distance", "vertex", "parent")?;
                for v in 1..=result.vertex_count() {
                    let distance = result
                        .distance(v)
                        .map_or_else(|| "unreached".to_string(), |d| d.to_string());
                    writeln!(
                        out,
                        "{:<8}{:<8}{}",
                        self.name(v),
                        self.parent_name(result.parent[v]),
                        distance
                    )?;
                }
            }
        }
        Ok(())
    }

    pub fn tree<W: Write>(&self, out: &mut W, algorithm: Algorithm, result: &TreeResult) -> Result<()> {
        self.heading(out, algorithm, result.source)?;
        match result.kind {
            TreeKind::MinimumSpanning => self.spanning_tree(out, result),
            TreeKind::ShortestPath => self.path_tree(out, result),
        }
    }

    fn spanning_tree<W: Write>(&self, out: &mut W, result: &TreeResult) -> Result<()> {
        writeln!(out, "{:<12}weight", "edge")?;
        for edge in result.edges() {
            let pair = format!("{}-{}", self.name(edge.parent), self.name(edge.child));
            writeln!(out, "{:<12}{}", pair, edge.weight)?;
        }
        writeln!(out, "total weight: {}", result.total_weight())?;

        let unreached: Vec<String> = (1..=result.vertex_count())
            .filter(|&v| !result.is_reached(v))
            .map(|v| self.name(v))
            .collect();
        if !unreached.is_empty() {
            writeln!(out, "unreached: {}", unreached.join(" "))?;
        }
        Ok(())
    }

    fn path_tree<W: Write>(&self, out: &mut W, result: &TreeResult) -> Result<()> {
        if self.show_paths {
            writeln!(out, "{:<8}{:<8}{:<10}path", "vertex", "parent", "distance")?;
        } else {
            writeln!(out, "{:<8}{:<8}distance", "vertex", "parent")?;
        }

        for v in 1..=result.vertex_count() {
            let name = self.name(v);
            let parent = self.parent_name(result.parent[v]);
            let distance = result
                .distance(v)
                .map_or_else(|| "unreached".to_string(), |d| d.to_string());

            if self.show_paths {
                let path = result.path_to(v).map_or_else(
                    || NONE.to_string(),
                    |path| {
                        path.iter()
                            .map(|&p| self.name(p))
                            .collect::<Vec<_>>()
                            .join(" -> ")
                    },
                );
                writeln!(out, "{:<8}{:<8}{:<10}{}", name, parent, distance, path)?;
            } else {
                writeln!(out, "{:<8}{:<8}{}", name, parent, distance)?;
            }
        }
        Ok(())
    }
}

fn stamp(value: Option<usize>) -> String {
    value.map_or_else(|| NONE.to_string(), |t| t.to_string())
}
