//! Strongly-connected-component reduction.
//!
//! Delegates the component computation itself to
//! `petgraph::algo::kosaraju_scc`, then keeps only the largest component,
//! breaking ties deterministically.

use crate::graph::{EdgeWeight, Graph, NodeId};
use petgraph::algo::kosaraju_scc;

/// Compute the graph's strongly connected components and retain only the
/// largest one (ties broken by the first-encountered maximum, which is
/// deterministic given the input's node-iteration order since
/// `kosaraju_scc` itself is deterministic for a fixed graph). A no-op on an
/// empty graph. Post-condition: the graph is strongly connected, or empty.
pub fn reduce_to_largest_scc<N, E: EdgeWeight>(graph: &mut Graph<N, E>) {
    if graph.size() == 0 {
        return;
    }

    let components = kosaraju_scc(graph.inner());
    let largest = components
        .into_iter()
        .max_by_key(|component| component.len())
        .unwrap_or_default();

    let keep: std::collections::HashSet<NodeId> =
        largest.into_iter().map(|idx| graph.node_id_at(idx)).collect();

    graph.reduce(|node| keep.contains(&node.id));
}

/// Same as [`reduce_to_largest_scc`] but for a [`crate::graph::RoadGraph`],
/// which does not expose a generic `reduce` over an arbitrary inner graph
/// type directly usable by `kosaraju_scc` through the public API.
pub fn reduce_road_graph_to_largest_scc(graph: &mut crate::graph::RoadGraph) {
    if graph.size() == 0 {
        return;
    }

    let components = kosaraju_scc(graph.inner().inner());
    let largest = components
        .into_iter()
        .max_by_key(|component| component.len())
        .unwrap_or_default();

    let keep: std::collections::HashSet<NodeId> = largest
        .into_iter()
        .map(|idx| graph.inner().node_id_at(idx))
        .collect();

    graph.reduce(|node| keep.contains(&node.id));
}
