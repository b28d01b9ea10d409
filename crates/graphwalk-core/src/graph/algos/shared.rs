use crate::error::Result;
use crate::graph::types::{
    Colour, TraversalKind, TraversalResult, TreeKind, TreeResult, Vertex, INFINITY,
};
use crate::graph::Graph;
use crate::heap::IndexedMinHeap;
use crate::logging::HeapMetrics;

/// Per-vertex bookkeeping for depth-first and breadth-first walks
pub struct WalkState {
    pub colour: Vec<Colour>,
    pub parent: Vec<Option<Vertex>>,
    pub discovery: Vec<Option<usize>>,
    pub finish: Vec<Option<usize>>,
    pub visit_order: Vec<Vertex>,
}

impl WalkState {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            colour: vec![Colour::White; vertex_count + 1],
            parent: vec![None; vertex_count + 1],
            discovery: vec![None; vertex_count + 1],
            finish: vec![None; vertex_count + 1],
            visit_order: Vec::with_capacity(vertex_count),
        }
    }

    pub fn is_white(&self, vertex: Vertex) -> bool {
        self.colour[vertex] == Colour::White
    }

    /// Mark `vertex` grey, stamp it and append it to the visit order
    pub fn discover(&mut self, vertex: Vertex, stamp: usize, parent: Option<Vertex>) {
        self.colour[vertex] = Colour::Grey;
        self.discovery[vertex] = Some(stamp);
        self.parent[vertex] = parent;
        self.visit_order.push(vertex);
    }

    pub fn into_result(self, kind: TraversalKind, source: Vertex) -> TraversalResult {
        TraversalResult {
            kind,
            source,
            visit_order: self.visit_order,
            parent: self.parent,
            discovery: self.discovery,
            finish: self.finish,
            colour: self.colour,
        }
    }
}

/// Key array, parent array and heap for one Prim or Dijkstra run.
///
/// `dist` is the key array the heap orders by; it is owned here and lent to
/// the heap on every call.
pub struct TreeState {
    pub dist: Vec<u64>,
    pub parent: Vec<Option<Vertex>>,
    pub heap: IndexedMinHeap,
    pub metrics: HeapMetrics,
}

impl TreeState {
    /// Fresh state with every key at infinity except `source`, which is queued at 0
    pub fn seeded(graph: &Graph, source: Vertex) -> Result<Self> {
        let vertex_count = graph.vertex_count();
        let mut state = Self {
            dist: vec![INFINITY; vertex_count + 1],
            parent: vec![None; vertex_count + 1],
            heap: IndexedMinHeap::with_capacity(vertex_count),
            metrics: HeapMetrics::default(),
        };
        state.dist[source] = 0;
        state.insert(source)?;
        Ok(state)
    }

    pub fn extract_min(&mut self) -> Result<Vertex> {
        self.metrics.extractions += 1;
        self.heap.extract_min(&self.dist)
    }

    /// Set `vertex`'s key and parent, then queue it
    pub fn attach(&mut self, vertex: Vertex, key: u64, parent: Vertex) -> Result<()> {
        self.dist[vertex] = key;
        self.parent[vertex] = Some(parent);
        self.insert(vertex)
    }

    /// Lower a queued `vertex`'s key, re-parent it and restore heap order
    pub fn decrease(&mut self, vertex: Vertex, key: u64, parent: Vertex) -> Result<()> {
        self.dist[vertex] = key;
        self.parent[vertex] = Some(parent);
        self.metrics.decreases += 1;
        self.heap.notify_decreased(vertex, &self.dist)
    }

    fn insert(&mut self, vertex: Vertex) -> Result<()> {
        self.metrics.insertions += 1;
        self.heap.insert(vertex, &self.dist)
    }

    pub fn into_result(self, kind: TreeKind, source: Vertex) -> TreeResult {
        TreeResult {
            kind,
            source,
            parent: self.parent,
            weight: self.dist,
        }
    }
}
