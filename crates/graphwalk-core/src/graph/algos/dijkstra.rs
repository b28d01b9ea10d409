use crate::error::Result;
use crate::graph::algos::shared::TreeState;
use crate::graph::types::{Neighbor, TreeKind, TreeResult, Vertex};
use crate::graph::Graph;
use crate::log_heap_metrics;

/// Dijkstra shortest path tree rooted at `source`.
///
/// A vertex may be relaxed several times while queued, but once extracted
/// its distance is final: with non-negative weights no later path can be
/// shorter, so it is never queued again. Unreachable vertices keep
/// `weight = INFINITY` and no parent.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn dijkstra_spt(graph: &Graph, source: Vertex) -> Result<TreeResult> {
    graph.check_vertex(source)?;

    let mut state = TreeState::seeded(graph, source)?;

    while !state.heap.is_empty() {
        let v = state.extract_min()?;
        let base = state.dist[v];
        tracing::trace!(vertex = v, distance = base, heap = ?state.heap.as_slice(), "dijkstra_extract");

        for &Neighbor { vertex: u, weight } in graph.neighbors(v) {
            let candidate = base.saturating_add(u64::from(weight));
            if candidate >= state.dist[u] {
                continue;
            }

            tracing::trace!(vertex = u, parent = v, from = state.dist[u], to = candidate, "dijkstra_relax");
            if state.heap.contains(u) {
                state.decrease(u, candidate, v)?;
            } else {
                state.attach(u, candidate, v)?;
            }
        }
    }

    log_heap_metrics!(&state.metrics, "dijkstra_spt");
    Ok(state.into_result(TreeKind::ShortestPath, source))
}
