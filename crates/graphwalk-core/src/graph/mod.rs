//! Weighted undirected graph and the algorithms that run over it
//!
//! Provides:
//! - `Graph`: adjacency-list model, immutable once built
//! - `load`: reader for the `V E` / `u v w` text description
//! - `algos`: depth-first and breadth-first walks, Prim MST, Dijkstra SPT

pub mod algos;
pub mod load;
pub mod types;

use std::ops::RangeInclusive;

use crate::error::{GraphError, Result};

pub use algos::{bfs_traverse, dfs_traverse, dijkstra_spt, prim_mst};
pub use types::{
    Colour, Edge, Neighbor, TraversalKind, TraversalResult, TreeEdge, TreeKind, TreeResult,
    Vertex, INFINITY,
};

/// Largest vertex count a graph may declare
pub const MAX_VERTICES: usize = 1 << 22;

/// Weighted undirected graph over vertices `1..=V`.
///
/// Every edge `(u, v, w)` is stored twice, once in each endpoint's list, in
/// input order. There is no public way to mutate a graph after construction,
/// so a `&Graph` can be shared freely between independent algorithm runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    edges: Vec<Edge>,
    adjacency: Vec<Vec<Neighbor>>,
}

impl Graph {
    /// Build a graph from a vertex count and `(u, v, weight)` triples.
    ///
    /// Errors name the position the offending triple would occupy in the
    /// text format (the header is line 1, the first edge line 2).
    pub fn new<I>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Vertex, Vertex, u32)>,
    {
        if vertex_count == 0 {
            return Err(GraphError::format(1, "vertex count must be at least 1"));
        }
        if vertex_count > MAX_VERTICES {
            return Err(GraphError::format(
                1,
                format!("vertex count {} exceeds the limit of {}", vertex_count, MAX_VERTICES),
            ));
        }

        let mut graph = Self::with_vertices(vertex_count);
        for (index, (u, v, weight)) in edges.into_iter().enumerate() {
            let line = index + 2;
            graph.check_endpoint(u, line)?;
            graph.check_endpoint(v, line)?;
            graph.push_edge(u, v, weight);
        }
        Ok(graph)
    }

    /// Empty graph over `1..=vertex_count`; callers keep `vertex_count <= MAX_VERTICES`
    pub(crate) fn with_vertices(vertex_count: usize) -> Self {
        Self {
            edges: Vec::new(),
            adjacency: vec![Vec::new(); vertex_count + 1],
        }
    }

    pub(crate) fn check_endpoint(&self, vertex: Vertex, line: usize) -> Result<()> {
        if vertex == 0 || vertex > self.vertex_count() {
            return Err(GraphError::format(
                line,
                format!(
                    "vertex {} out of range 1..={}",
                    vertex,
                    self.vertex_count()
                ),
            ));
        }
        Ok(())
    }

    pub(crate) fn push_edge(&mut self, u: Vertex, v: Vertex, weight: u32) {
        self.adjacency[u].push(Neighbor { vertex: v, weight });
        self.adjacency[v].push(Neighbor { vertex: u, weight });
        self.edges.push(Edge { u, v, weight });
    }

    /// Number of vertices `V`
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len() - 1
    }

    /// Number of undirected edges `E`
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All vertex ids, `1..=V`
    pub fn vertices(&self) -> RangeInclusive<Vertex> {
        1..=self.vertex_count()
    }

    /// Adjacency list of `vertex` in insertion order; empty for unknown ids
    pub fn neighbors(&self, vertex: Vertex) -> &[Neighbor] {
        match self.adjacency.get(vertex) {
            Some(list) if vertex != 0 => list.as_slice(),
            _ => &[],
        }
    }

    pub fn degree(&self, vertex: Vertex) -> usize {
        self.neighbors(vertex).len()
    }

    /// Each undirected edge once, in input order
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter()
    }

    /// Reject a caller-supplied vertex outside `1..=V`
    pub fn check_vertex(&self, vertex: Vertex) -> Result<()> {
        if vertex == 0 || vertex > self.vertex_count() {
            return Err(GraphError::invalid_vertex(vertex, self.vertex_count()));
        }
        Ok(())
    }

    /// Depth-first forest starting at `source`, then every still-unvisited vertex
    pub fn depth_first(&self, source: Vertex) -> Result<TraversalResult> {
        dfs_traverse(self, source)
    }

    /// Breadth-first tree of the component containing `source`
    pub fn breadth_first(&self, source: Vertex) -> Result<TraversalResult> {
        bfs_traverse(self, source)
    }

    /// Prim minimum spanning tree grown from `source`
    pub fn minimum_spanning_tree(&self, source: Vertex) -> Result<TreeResult> {
        prim_mst(self, source)
    }

    /// Dijkstra shortest path tree rooted at `source`
    pub fn shortest_path_tree(&self, source: Vertex) -> Result<TreeResult> {
        dijkstra_spt(self, source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Graph {
        Graph::new(5, [(1, 2, 2), (1, 3, 4), (2, 3, 1), (2, 4, 7), (3, 5, 3)]).unwrap()
    }

    #[test]
    fn test_counts() {
        let graph = sample();
        assert_eq!(graph.vertex_count(), 5);
        assert_eq!(graph.edge_count(), 5);
        assert_eq!(graph.vertices().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_adjacency_in_insertion_order() {
        let graph = sample();
        let neighbors: Vec<_> = graph.neighbors(2).iter().map(|n| n.vertex).collect();
        assert_eq!(neighbors, vec![1, 3, 4]);
        assert_eq!(graph.degree(2), 3);
        assert!(graph.neighbors(0).is_empty());
        assert!(graph.neighbors(9).is_empty());
    }

    #[test]
    fn test_every_entry_is_mirrored() {
        let graph = sample();
        for u in graph.vertices() {
            for n in graph.neighbors(u) {
                assert!(graph
                    .neighbors(n.vertex)
                    .iter()
                    .any(|back| back.vertex == u && back.weight == n.weight));
            }
        }
        let total: usize = graph.vertices().map(|v| graph.degree(v)).sum();
        assert_eq!(total, 2 * graph.edge_count());
    }

    #[test]
    fn test_edges_in_input_order() {
        let graph = sample();
        let first = graph.edges().next().unwrap();
        assert_eq!(*first, Edge { u: 1, v: 2, weight: 2 });
        assert_eq!(graph.edges().count(), 5);
    }

    #[test]
    fn test_new_rejects_zero_vertices() {
        let err = Graph::new(0, Vec::<(Vertex, Vertex, u32)>::new()).unwrap_err();
        assert!(matches!(err, GraphError::Format { line: 1, .. }));
    }

    #[test]
    fn test_new_rejects_out_of_range_endpoint() {
        let err = Graph::new(3, [(1, 2, 1), (2, 4, 1)]).unwrap_err();
        assert!(matches!(err, GraphError::Format { line: 3, .. }));
        assert!(err.to_string().contains("vertex 4 out of range 1..=3"));
    }

    #[test]
    fn test_new_rejects_oversized_vertex_count() {
        let none = Vec::<(Vertex, Vertex, u32)>::new();
        let err = Graph::new(MAX_VERTICES + 1, none.clone()).unwrap_err();
        assert!(matches!(err, GraphError::Format { line: 1, .. }));
        assert!(Graph::new(usize::MAX, none).is_err());
    }

    #[test]
    fn test_self_loop_is_stored_twice() {
        let graph = Graph::new(2, [(1, 1, 5)]).unwrap();
        assert_eq!(graph.degree(1), 2);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_check_vertex() {
        let graph = sample();
        assert!(graph.check_vertex(1).is_ok());
        assert!(graph.check_vertex(5).is_ok());
        assert!(matches!(
            graph.check_vertex(7),
            Err(GraphError::InvalidVertex { vertex: 7, vertex_count: 5 })
        ));
        assert!(graph.check_vertex(0).is_err());
    }

    #[test]
    fn test_algorithms_reject_out_of_range_source() {
        let graph = sample();
        assert!(matches!(
            graph.depth_first(7),
            Err(GraphError::InvalidVertex { .. })
        ));
        assert!(matches!(
            graph.breadth_first(7),
            Err(GraphError::InvalidVertex { .. })
        ));
        assert!(matches!(
            graph.minimum_spanning_tree(7),
            Err(GraphError::InvalidVertex { .. })
        ));
        assert!(matches!(
            graph.shortest_path_tree(0),
            Err(GraphError::InvalidVertex { .. })
        ));
    }
}
