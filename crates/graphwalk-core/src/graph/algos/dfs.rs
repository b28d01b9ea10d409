use crate::error::Result;
use crate::graph::algos::shared::WalkState;
use crate::graph::types::{Colour, TraversalKind, TraversalResult, Vertex};
use crate::graph::Graph;

/// Clocked walk state: the shared bookkeeping plus the timestamp counter
struct DfsState {
    walk: WalkState,
    time: usize,
}

impl DfsState {
    fn new(vertex_count: usize) -> Self {
        Self {
            walk: WalkState::new(vertex_count),
            time: 0,
        }
    }

    fn enter(&mut self, vertex: Vertex, parent: Option<Vertex>) {
        self.time += 1;
        self.walk.discover(vertex, self.time, parent);
        tracing::trace!(vertex, parent = ?parent, time = self.time, "dfs_enter");
    }

    fn leave(&mut self, vertex: Vertex) {
        self.time += 1;
        self.walk.colour[vertex] = Colour::Black;
        self.walk.finish[vertex] = Some(self.time);
        tracing::trace!(vertex, time = self.time, "dfs_leave");
    }

    /// Visit everything reachable from `root`.
    ///
    /// Each stack frame is a vertex and the index of the next adjacency entry
    /// to examine, which reproduces the recursive visit exactly: a vertex is
    /// finished only once its whole adjacency list has been scanned.
    fn visit(&mut self, graph: &Graph, root: Vertex) {
        let mut stack: Vec<(Vertex, usize)> = vec![(root, 0)];
        self.enter(root, None);

        while let Some(&(vertex, next)) = stack.last() {
            match graph.neighbors(vertex).get(next) {
                Some(neighbor) => {
                    let top = stack.len() - 1;
                    stack[top].1 = next + 1;
                    if self.walk.is_white(neighbor.vertex) {
                        self.enter(neighbor.vertex, Some(vertex));
                        stack.push((neighbor.vertex, 0));
                    }
                }
                None => {
                    stack.pop();
                    self.leave(vertex);
                }
            }
        }
    }
}

/// Depth-first forest of the whole graph.
///
/// The walk starts at `source` and then restarts from every vertex still
/// white, in increasing id order, so every vertex ends up black. Unlike the
/// breadth-first walk this covers components unreachable from `source`.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn dfs_traverse(graph: &Graph, source: Vertex) -> Result<TraversalResult> {
    graph.check_vertex(source)?;

    let mut state = DfsState::new(graph.vertex_count());
    state.visit(graph, source);

    for vertex in graph.vertices() {
        if state.walk.is_white(vertex) {
            tracing::trace!(vertex, "dfs_restart");
            state.visit(graph, vertex);
        }
    }

    tracing::debug!(visited = state.walk.visit_order.len(), "dfs_complete");
    Ok(state.walk.into_result(TraversalKind::DepthFirst, source))
}
