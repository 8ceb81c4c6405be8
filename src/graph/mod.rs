//! The generic graph model.
//!
//! A thin wrapper around `petgraph::graph::Graph`, keyed by a caller-assigned
//! `NodeId` rather than petgraph's own dense `NodeIndex`. An external id is
//! mapped to an internal, densely packed index, so callers never have to
//! think about petgraph's own index space.

mod road;

pub use road::{Road, RoadGraph, RoadGraphBuilder, RoadNode, RoadType};

use crate::error::RoutingError;
pub use petgraph::graph::EdgeIndex;
use petgraph::graph::{Graph as PetGraph, NodeIndex};
use petgraph::Directed;
use std::collections::HashMap;

/// A node identifier, unique within a single graph. Caller-assigned (for
/// road graphs, this is the OSM node id).
pub type NodeId = i64;

/// Anything that can report a non-negative-checked edge cost in seconds.
/// Implemented for plain `f64` (the generic graph) and for
/// [`crate::arc_flags::FlaggedEdge`] (the arc-flag-augmented graph).
pub trait EdgeWeight: Clone {
    fn cost(&self) -> f64;
}

impl EdgeWeight for f64 {
    fn cost(&self) -> f64 {
        *self
    }
}

struct NodeEntry<N> {
    id: NodeId,
    data: N,
}

/// A read-only view of a node: its id plus a reference to its payload.
#[derive(Copy, Clone, Debug)]
pub struct NodeView<'a, N> {
    pub id: NodeId,
    pub data: &'a N,
}

/// A read-only view of a directed edge: its endpoints, payload, and the
/// internal index used to address it for mutation (e.g. setting arc flags).
#[derive(Clone, Debug)]
pub struct EdgeView<E> {
    pub index: EdgeIndex,
    pub source: NodeId,
    pub target: NodeId,
    pub weight: E,
}

/// The graph data model: a set of nodes carrying arbitrary payload data,
/// connected by directed, weighted edges.
///
/// Invariants upheld by construction: every edge's endpoints are present as
/// nodes (enforced by `add_edge` rejecting unknown ids); `outgoing`/
/// `incoming` are always mutually consistent (they are derived directly
/// from petgraph's own directed adjacency, never duplicated bookkeeping).
pub struct Graph<N, E: EdgeWeight = f64> {
    inner: PetGraph<NodeEntry<N>, E, Directed>,
    index: HashMap<NodeId, NodeIndex>,
}

impl<N, E: EdgeWeight> Default for Graph<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, E: EdgeWeight> Graph<N, E> {
    pub fn new() -> Self {
        Graph {
            inner: PetGraph::new(),
            index: HashMap::new(),
        }
    }

    /// Insert a node. Returns whether the id was new (a no-op on duplicates).
    pub fn add_node(&mut self, id: NodeId, data: N) -> bool {
        if self.index.contains_key(&id) {
            return false;
        }
        let idx = self.inner.add_node(NodeEntry { id, data });
        self.index.insert(id, idx);
        true
    }

    /// Insert a directed edge. Both endpoints must already be present.
    /// Adding the same edge twice is permitted; no deduplication happens.
    pub fn add_edge(&mut self, source: NodeId, target: NodeId, weight: E) -> Result<EdgeIndex, RoutingError> {
        if weight.cost() < 0.0 {
            return Err(RoutingError::InvalidCost(weight.cost()));
        }
        let source_idx = *self
            .index
            .get(&source)
            .ok_or(RoutingError::UnknownNode(source))?;
        let target_idx = *self
            .index
            .get(&target)
            .ok_or(RoutingError::UnknownNode(target))?;
        Ok(self.inner.add_edge(source_idx, target_idx, weight))
    }

    pub fn get_node(&self, id: NodeId) -> Option<NodeView<N>> {
        let idx = *self.index.get(&id)?;
        let entry = &self.inner[idx];
        Some(NodeView {
            id: entry.id,
            data: &entry.data,
        })
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.index.contains_key(&id)
    }

    /// All node ids currently in the graph. Order is stable within one
    /// iteration but not guaranteed across mutations.
    pub fn nodes(&self) -> impl Iterator<Item = NodeView<N>> {
        self.inner
            .node_weights()
            .map(|entry| NodeView { id: entry.id, data: &entry.data })
    }

    pub fn outgoing(&self, id: NodeId) -> Vec<EdgeView<E>> {
        let Some(&idx) = self.index.get(&id) else {
            return Vec::new();
        };
        self.inner
            .edges_directed(idx, petgraph::Direction::Outgoing)
            .map(|edge| EdgeView {
                index: edge.id(),
                source: self.inner[edge.source()].id,
                target: self.inner[edge.target()].id,
                weight: edge.weight().clone(),
            })
            .collect()
    }

    pub fn incoming(&self, id: NodeId) -> Vec<EdgeView<E>> {
        let Some(&idx) = self.index.get(&id) else {
            return Vec::new();
        };
        self.inner
            .edges_directed(idx, petgraph::Direction::Incoming)
            .map(|edge| EdgeView {
                index: edge.id(),
                source: self.inner[edge.source()].id,
                target: self.inner[edge.target()].id,
                weight: edge.weight().clone(),
            })
            .collect()
    }

    pub fn size(&self) -> usize {
        self.inner.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    pub fn edge_weight_mut(&mut self, edge: EdgeIndex) -> Option<&mut E> {
        self.inner.edge_weight_mut(edge)
    }

    pub fn edge_weight(&self, edge: EdgeIndex) -> Option<&E> {
        self.inner.edge_weight(edge)
    }

    pub fn edge_endpoints(&self, edge: EdgeIndex) -> Option<(NodeId, NodeId)> {
        let (s, t) = self.inner.edge_endpoints(edge)?;
        Some((self.inner[s].id, self.inner[t].id))
    }

    /// Remove every node failing `keep` and every edge touching such a
    /// node. Used by strongly-connected-component reduction. Petgraph's `retain_nodes` may
    /// reassign internal indices; the `NodeId -> NodeIndex` map is rebuilt
    /// afterwards so callers never observe that detail.
    pub fn reduce<F: Fn(NodeView<N>) -> bool>(&mut self, keep: F) {
        self.inner.retain_nodes(|g, idx| {
            let entry = &g[idx];
            keep(NodeView { id: entry.id, data: &entry.data })
        });
        self.index.clear();
        for idx in self.inner.node_indices() {
            self.index.insert(self.inner[idx].id, idx);
        }
    }

    pub(crate) fn inner(&self) -> &PetGraph<NodeEntry<N>, E, Directed> {
        &self.inner
    }

    pub(crate) fn node_index(&self, id: NodeId) -> Option<NodeIndex> {
        self.index.get(&id).copied()
    }

    pub(crate) fn node_id_at(&self, idx: NodeIndex) -> NodeId {
        self.inner[idx].id
    }
}

impl<N: Clone, E: EdgeWeight> Graph<N, E> {
    /// Build the reverse graph: same nodes, every edge's direction flipped.
    /// Used by the ALT landmark metric and the arc-flag preprocessor, both
    /// of which run Dijkstra "backwards" from a fixed node.
    pub fn reversed(&self) -> Graph<N, E> {
        let mut reverse = Graph::new();
        for node in self.nodes() {
            reverse.add_node(node.id, node.data.clone());
        }
        for edge in self.inner.edge_references() {
            let source = self.inner[edge.source()].id;
            let target = self.inner[edge.target()].id;
            reverse
                .add_edge(target, source, edge.weight().clone())
                .expect("endpoints came from a valid graph");
        }
        reverse
    }
}

use petgraph::visit::EdgeRef;

/// Capability shared by plain graphs and road graphs: "accept a raw node or
/// edge insertion". A plain [`Graph`] implements it for real; [`RoadGraph`]
/// implements it to always fail with `UnsupportedOperation`, giving that
/// error kind a genuine, reachable meaning for code that only holds a
/// `&mut dyn GraphMutation` (see DESIGN.md for the rationale).
pub trait GraphMutation<N, E: EdgeWeight> {
    fn mutate_add_node(&mut self, id: NodeId, data: N) -> Result<bool, RoutingError>;
    fn mutate_add_edge(&mut self, source: NodeId, target: NodeId, weight: E) -> Result<EdgeIndex, RoutingError>;
}

impl<N, E: EdgeWeight> GraphMutation<N, E> for Graph<N, E> {
    fn mutate_add_node(&mut self, id: NodeId, data: N) -> Result<bool, RoutingError> {
        Ok(self.add_node(id, data))
    }

    fn mutate_add_edge(&mut self, source: NodeId, target: NodeId, weight: E) -> Result<EdgeIndex, RoutingError> {
        self.add_edge(source, target, weight)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn add_and_query() {
        let mut g: Graph<()> = Graph::new();
        assert!(g.add_node(0, ()));
        assert!(g.add_node(1, ()));
        assert!(!g.add_node(0, ())); // duplicate is a no-op
        assert_eq!(g.size(), 2);

        let e = g.add_edge(0, 1, 1.5).unwrap();
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.edge_weight(e).copied(), Some(1.5));

        assert_eq!(g.outgoing(0).len(), 1);
        assert_eq!(g.incoming(1).len(), 1);
        assert_eq!(g.outgoing(1).len(), 0);
    }

    #[test]
    fn unknown_node_rejected() {
        let mut g: Graph<()> = Graph::new();
        g.add_node(0, ());
        assert_eq!(g.add_edge(0, 99, 1.0), Err(RoutingError::UnknownNode(99)));
    }

    #[test]
    fn negative_cost_rejected() {
        let mut g: Graph<()> = Graph::new();
        g.add_node(0, ());
        g.add_node(1, ());
        assert_eq!(g.add_edge(0, 1, -1.0), Err(RoutingError::InvalidCost(-1.0)));
    }

    #[test]
    fn duplicate_edges_allowed() {
        let mut g: Graph<()> = Graph::new();
        g.add_node(0, ());
        g.add_node(1, ());
        g.add_edge(0, 1, 1.0).unwrap();
        g.add_edge(0, 1, 2.0).unwrap();
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.outgoing(0).len(), 2);
    }

    #[test]
    fn reduce_keeps_only_predicate_matches() {
        let mut g: Graph<()> = Graph::new();
        for i in 0..4 {
            g.add_node(i, ());
        }
        g.add_edge(0, 1, 1.0).unwrap();
        g.add_edge(1, 2, 1.0).unwrap();
        g.add_edge(2, 3, 1.0).unwrap();

        g.reduce(|node| node.id < 2);

        assert_eq!(g.size(), 2);
        assert_eq!(g.edge_count(), 1);
        assert!(g.contains_node(0));
        assert!(g.contains_node(1));
        assert!(!g.contains_node(2));
    }
}
