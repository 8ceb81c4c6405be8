//! Plain Dijkstra: the best-first skeleton with a zero estimator and no
//! edge filter.

use super::{best_first_search, ShortestPath};
use crate::graph::{EdgeWeight, Graph, NodeId};
use std::collections::HashMap;

pub struct Dijkstra<'a, N, E: EdgeWeight> {
    graph: &'a Graph<N, E>,
}

impl<'a, N, E: EdgeWeight> Dijkstra<'a, N, E> {
    pub fn new(graph: &'a Graph<N, E>) -> Self {
        Dijkstra { graph }
    }

    /// One-to-all: the cost map for every node reachable from `source`.
    pub fn one_to_all(&self, source: NodeId) -> HashMap<NodeId, f64> {
        best_first_search(self.graph, [(source, 0.0)], |_| 0.0, |_| true, None)
            .costs()
            .clone()
    }

    /// Multi-source: the cost map for every node reachable from any of
    /// `sources`, each with the given initial tentative cost. Used by the
    /// greedy-farthest landmark provider.
    pub fn multi_source(&self, sources: impl IntoIterator<Item = (NodeId, f64)>) -> HashMap<NodeId, f64> {
        best_first_search(self.graph, sources, |_| 0.0, |_| true, None)
            .costs()
            .clone()
    }
}

impl<'a, N, E: EdgeWeight> ShortestPath<N, E> for Dijkstra<'a, N, E> {
    fn search(&self, source: NodeId, destination: Option<NodeId>) -> super::SearchResult {
        best_first_search(self.graph, [(source, 0.0)], |_| 0.0, |_| true, destination)
    }
}
