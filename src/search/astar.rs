//! A* guided by a precomputed ALT lower bound: the best-first skeleton
//! with the landmark metric as estimator and no edge filter.

use super::{best_first_search, ShortestPath};
use crate::graph::{EdgeWeight, Graph, NodeId};
use crate::landmark::LandmarkMetric;

pub struct AStar<'a, N, E: EdgeWeight> {
    graph: &'a Graph<N, E>,
    metric: &'a LandmarkMetric,
}

impl<'a, N, E: EdgeWeight> AStar<'a, N, E> {
    pub fn new(graph: &'a Graph<N, E>, metric: &'a LandmarkMetric) -> Self {
        AStar { graph, metric }
    }
}

impl<'a, N, E: EdgeWeight> ShortestPath<N, E> for AStar<'a, N, E> {
    fn search(&self, source: NodeId, destination: Option<NodeId>) -> super::SearchResult {
        match destination {
            // Without a fixed destination there's nothing to estimate
            // distance to; fall back to an exhaustive zero-heuristic search.
            None => best_first_search(self.graph, [(source, 0.0)], |_| 0.0, |_| true, None),
            Some(destination) => best_first_search(
                self.graph,
                [(source, 0.0)],
                |node| self.metric.lower_bound(node, destination),
                |_| true,
                Some(destination),
            ),
        }
    }
}
