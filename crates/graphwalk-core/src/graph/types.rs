use serde::{Serialize, Serializer};

/// 1-based vertex identifier, used directly as an array index
pub type Vertex = usize;

/// Key of a vertex that has not been reached
pub const INFINITY: u64 = u64::MAX;

/// One entry of a vertex's adjacency list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Neighbor {
    pub vertex: Vertex,
    pub weight: u32,
}

/// An undirected weighted edge as it appeared in the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub u: Vertex,
    pub v: Vertex,
    pub weight: u32,
}

/// Visit state of a vertex during a traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Colour {
    /// Not discovered yet
    White,
    /// Discovered, neighbours still being examined
    Grey,
    /// Finished
    Black,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalKind {
    DepthFirst,
    BreadthFirst,
}

/// Output of a depth-first or breadth-first walk.
///
/// All per-vertex vectors are indexed by vertex id and have length `V + 1`;
/// slot 0 is unused.
///
/// For depth-first walks `discovery`/`finish` hold timestamps from a single
/// clock that ticks once on entry and once on exit of each vertex. For
/// breadth-first walks `discovery` holds the distance in edges from the
/// source and `finish` is always `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraversalResult {
    pub kind: TraversalKind,
    pub source: Vertex,
    pub visit_order: Vec<Vertex>,
    pub parent: Vec<Option<Vertex>>,
    pub discovery: Vec<Option<usize>>,
    pub finish: Vec<Option<usize>>,
    pub colour: Vec<Colour>,
}

impl TraversalResult {
    pub fn vertex_count(&self) -> usize {
        self.parent.len().saturating_sub(1)
    }

    pub fn is_reached(&self, vertex: Vertex) -> bool {
        self.colour
            .get(vertex)
            .is_some_and(|&colour| colour != Colour::White)
    }

    /// Edge distance from the source (breadth-first walks only)
    pub fn distance(&self, vertex: Vertex) -> Option<usize> {
        match self.kind {
            TraversalKind::BreadthFirst => self.discovery.get(vertex).copied().flatten(),
            TraversalKind::DepthFirst => None,
        }
    }

    /// `(parent, child)` pairs of the traversal forest, ordered by child id
    pub fn tree_edges(&self) -> Vec<(Vertex, Vertex)> {
        self.parent
            .iter()
            .enumerate()
            .filter_map(|(child, parent)| parent.map(|p| (p, child)))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TreeKind {
    /// Prim minimum spanning tree; `weight[v]` is the weight of the edge attaching `v`
    #[serde(rename = "mst")]
    MinimumSpanning,
    /// Dijkstra shortest path tree; `weight[v]` is the distance from the source
    #[serde(rename = "spt")]
    ShortestPath,
}

/// A tree edge from a [`TreeResult`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TreeEdge {
    pub parent: Vertex,
    pub child: Vertex,
    pub weight: u64,
}

/// Output of Prim or Dijkstra.
///
/// `parent` and `weight` are indexed by vertex id with slot 0 unused.
/// Unreached vertices keep `parent = None` and `weight = INFINITY`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeResult {
    pub kind: TreeKind,
    pub source: Vertex,
    pub parent: Vec<Option<Vertex>>,
    #[serde(serialize_with = "serialize_weights")]
    pub weight: Vec<u64>,
}

impl TreeResult {
    pub fn vertex_count(&self) -> usize {
        self.parent.len().saturating_sub(1)
    }

    pub fn is_reached(&self, vertex: Vertex) -> bool {
        vertex != 0 && self.weight.get(vertex).is_some_and(|&w| w != INFINITY)
    }

    /// Distance (SPT) or attach weight (MST) of `vertex`, `None` if unreached
    pub fn distance(&self, vertex: Vertex) -> Option<u64> {
        if self.is_reached(vertex) {
            Some(self.weight[vertex])
        } else {
            None
        }
    }

    /// Tree edges ordered by child id, each with the weight of the graph edge it uses
    pub fn edges(&self) -> Vec<TreeEdge> {
        self.parent
            .iter()
            .enumerate()
            .filter_map(|(child, parent)| {
                let parent = (*parent)?;
                let weight = match self.kind {
                    TreeKind::MinimumSpanning => self.weight[child],
                    TreeKind::ShortestPath => self.weight[child].saturating_sub(self.weight[parent]),
                };
                Some(TreeEdge {
                    parent,
                    child,
                    weight,
                })
            })
            .collect()
    }

    /// Sum of the weights of all tree edges
    pub fn total_weight(&self) -> u64 {
        self.edges().iter().map(|edge| edge.weight).sum()
    }

    /// Vertices on the tree path from the source to `vertex`, both included
    pub fn path_to(&self, vertex: Vertex) -> Option<Vec<Vertex>> {
        if !self.is_reached(vertex) {
            return None;
        }

        let mut path = vec![vertex];
        let mut current = vertex;
        while current != self.source {
            current = self.parent.get(current).copied().flatten()?;
            path.push(current);
            if path.len() > self.parent.len() {
                return None;
            }
        }
        path.reverse();
        Some(path)
    }
}

fn serialize_weights<S: Serializer>(weights: &[u64], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(
        weights
            .iter()
            .map(|&w| if w == INFINITY { None } else { Some(w) }),
    )
}
