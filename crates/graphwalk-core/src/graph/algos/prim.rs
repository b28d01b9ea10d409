use crate::error::Result;
use crate::graph::algos::shared::TreeState;
use crate::graph::types::{Neighbor, TreeKind, TreeResult, Vertex, INFINITY};
use crate::graph::Graph;
use crate::log_heap_metrics;

/// Prim minimum spanning tree grown from `source`.
///
/// `weight[v]` ends up as the weight of the edge attaching `v` to the tree
/// (0 for the source). A neighbour is re-parented only when a strictly
/// lighter edge turns up while it is still queued, so among equal weights the
/// first edge seen wins. Vertices outside the source's component are never
/// reached and keep no parent.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn prim_mst(graph: &Graph, source: Vertex) -> Result<TreeResult> {
    graph.check_vertex(source)?;

    let mut state = TreeState::seeded(graph, source)?;

    while !state.heap.is_empty() {
        let v = state.extract_min()?;
        tracing::trace!(vertex = v, weight = state.dist[v], heap = ?state.heap.as_slice(), "prim_extract");

        for &Neighbor { vertex: u, weight } in graph.neighbors(v) {
            let weight = u64::from(weight);

            if state.heap.contains(u) && weight < state.dist[u] {
                tracing::trace!(vertex = u, parent = v, from = state.dist[u], to = weight, "prim_decrease");
                state.decrease(u, weight, v)?;
            } else if !state.heap.contains(u) && state.dist[u] == INFINITY {
                tracing::trace!(vertex = u, parent = v, weight, "prim_attach");
                state.attach(u, weight, v)?;
            }
        }
    }

    log_heap_metrics!(&state.metrics, "prim_mst");
    Ok(state.into_result(TreeKind::MinimumSpanning, source))
}
