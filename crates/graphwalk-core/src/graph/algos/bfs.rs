use std::collections::VecDeque;

use crate::error::Result;
use crate::graph::algos::shared::WalkState;
use crate::graph::types::{Colour, TraversalKind, TraversalResult, Vertex};
use crate::graph::Graph;

/// Breadth-first tree of the component containing `source`.
///
/// `discovery[v]` receives the number of edges on the shortest unweighted
/// path from `source`. Vertices in other components stay white with no
/// distance; the walk does not restart elsewhere the way the depth-first
/// walk does.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn bfs_traverse(graph: &Graph, source: Vertex) -> Result<TraversalResult> {
    graph.check_vertex(source)?;

    let mut state = WalkState::new(graph.vertex_count());
    let mut queue = VecDeque::new();

    state.discover(source, 0, None);
    queue.push_back((source, 0));

    while let Some((vertex, depth)) = queue.pop_front() {
        for neighbor in graph.neighbors(vertex) {
            if state.is_white(neighbor.vertex) {
                state.discover(neighbor.vertex, depth + 1, Some(vertex));
                queue.push_back((neighbor.vertex, depth + 1));
                tracing::trace!(vertex = neighbor.vertex, parent = vertex, depth = depth + 1, "bfs_enqueue");
            }
        }
        state.colour[vertex] = Colour::Black;
    }

    tracing::debug!(visited = state.visit_order.len(), "bfs_complete");
    Ok(state.into_result(TraversalKind::BreadthFirst, source))
}
