//! The ALT (A*, Landmarks, Triangle inequality) lower-bound metric.

use crate::graph::{EdgeWeight, Graph, NodeId};
use crate::search::dijkstra::Dijkstra;
use std::collections::HashMap;

/// Forward and backward one-to-all distance tables from each landmark,
/// combined into a triangle-inequality lower bound between any two nodes.
pub struct LandmarkMetric {
    /// `forward[i][v]` = distance from landmark `i` to `v`.
    forward: Vec<HashMap<NodeId, f64>>,
    /// `backward[i][v]` = distance from `v` to landmark `i`.
    backward: Vec<HashMap<NodeId, f64>>,
}

impl LandmarkMetric {
    /// Precompute forward and backward tables for `landmarks` against
    /// `graph`. Backward distances are computed by running Dijkstra on the
    /// reverse graph: `reverse_dijkstra.one_to_all(landmark)`
    /// gives, for each `v`, the cost from `v` to `landmark` in `graph`.
    pub fn build<N: Clone, E: EdgeWeight>(graph: &Graph<N, E>, landmarks: &[NodeId]) -> Self {
        let reverse = graph.reversed();
        let forward_search = Dijkstra::new(graph);
        let backward_search = Dijkstra::new(&reverse);

        let forward = landmarks
            .iter()
            .map(|&landmark| forward_search.one_to_all(landmark))
            .collect();
        let backward = landmarks
            .iter()
            .map(|&landmark| backward_search.one_to_all(landmark))
            .collect();

        LandmarkMetric { forward, backward }
    }

    /// A lower bound on the remaining shortest-path cost from `from` to
    /// `to`, via the triangle inequality against every landmark:
    ///
    /// - `d(from, to) >= d(landmark, to) - d(landmark, from)`
    /// - `d(from, to) >= d(from, landmark) - d(to, landmark)`
    ///
    /// The tightest (largest, clamped at zero) bound across every landmark
    /// and both directions is returned; `0.0` if a landmark's table doesn't
    /// cover one of the two nodes.
    pub fn lower_bound(&self, from: NodeId, to: NodeId) -> f64 {
        let mut best = 0.0_f64;
        for i in 0..self.forward.len() {
            if let (Some(&fwd_to), Some(&fwd_from)) =
                (self.forward[i].get(&to), self.forward[i].get(&from))
            {
                best = best.max(fwd_to - fwd_from);
            }
            if let (Some(&bwd_from), Some(&bwd_to)) =
                (self.backward[i].get(&from), self.backward[i].get(&to))
            {
                best = best.max(bwd_from - bwd_to);
            }
        }
        best.max(0.0)
    }
}
