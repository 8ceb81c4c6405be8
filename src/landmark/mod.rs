//! Landmark providers: pick a set of distinguished nodes whose distances
//! to every other node are worth precomputing.

pub mod metric;

use crate::error::RoutingError;
use crate::graph::{EdgeWeight, Graph, NodeId};
use crate::search::dijkstra::Dijkstra;
use rand::seq::SliceRandom;
use rand::thread_rng;

pub use metric::LandmarkMetric;

/// Picks *k* landmarks from a graph.
pub trait LandmarkProvider<N, E: EdgeWeight> {
    fn landmarks(&self, graph: &Graph<N, E>, k: i64) -> Result<Vec<NodeId>, RoutingError>;
}

fn validated_count<N, E: EdgeWeight>(graph: &Graph<N, E>, k: i64) -> Result<usize, RoutingError> {
    if k <= 0 {
        return Err(RoutingError::InvalidCount(k));
    }
    let k = k as usize;
    if k > graph.size() {
        return Err(RoutingError::TooFew { requested: k, available: graph.size() });
    }
    Ok(k)
}

/// Sample *k* distinct nodes uniformly without replacement.
pub struct RandomLandmarks;

impl<N, E: EdgeWeight> LandmarkProvider<N, E> for RandomLandmarks {
    fn landmarks(&self, graph: &Graph<N, E>, k: i64) -> Result<Vec<NodeId>, RoutingError> {
        let k = validated_count(graph, k)?;
        let all_ids: Vec<NodeId> = graph.nodes().map(|node| node.id).collect();
        let mut rng = thread_rng();
        Ok(all_ids.choose_multiple(&mut rng, k).copied().collect())
    }
}

/// Pick the first node uniformly at random; repeatedly run a multi-source
/// Dijkstra from the current landmark set and add the node maximising its
/// distance from the set, breaking ties by first-encountered order.
pub struct GreedyFarthestLandmarks;

impl<N, E: EdgeWeight> LandmarkProvider<N, E> for GreedyFarthestLandmarks {
    fn landmarks(&self, graph: &Graph<N, E>, k: i64) -> Result<Vec<NodeId>, RoutingError> {
        let k = validated_count(graph, k)?;
        let all_ids: Vec<NodeId> = graph.nodes().map(|node| node.id).collect();

        let mut rng = thread_rng();
        let first = *all_ids.choose(&mut rng).expect("k > 0 implies graph is non-empty");
        let mut landmarks = vec![first];

        let dijkstra = Dijkstra::new(graph);
        while landmarks.len() < k {
            let sources = landmarks.iter().map(|&l| (l, 0.0));
            let costs = dijkstra.multi_source(sources);

            let mut farthest: Option<(NodeId, f64)> = None;
            for &candidate in &all_ids {
                if landmarks.contains(&candidate) {
                    continue;
                }
                if let Some(&cost) = costs.get(&candidate) {
                    if farthest.map_or(true, |(_, best)| cost > best) {
                        farthest = Some((candidate, cost));
                    }
                }
            }

            match farthest {
                Some((node, _)) => landmarks.push(node),
                // No more nodes reachable from the current set; stop early.
                None => break,
            }
        }

        Ok(landmarks)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::graph::Graph;

    fn ring() -> Graph<()> {
        let mut g = Graph::new();
        for i in 0..4 {
            g.add_node(i, ());
        }
        g.add_edge(0, 1, 1.0).unwrap();
        g.add_edge(1, 2, 1.0).unwrap();
        g.add_edge(2, 3, 1.0).unwrap();
        g.add_edge(3, 0, 1.0).unwrap();
        g
    }

    #[test]
    fn random_returns_k_distinct_nodes() {
        let g = ring();
        let landmarks = RandomLandmarks.landmarks(&g, 2).unwrap();
        assert_eq!(landmarks.len(), 2);
        assert_ne!(landmarks[0], landmarks[1]);
    }

    #[test]
    fn random_rejects_bad_counts() {
        let g = ring();
        assert_eq!(
            RandomLandmarks.landmarks(&g, 0),
            Err(RoutingError::InvalidCount(0))
        );
        assert_eq!(
            RandomLandmarks.landmarks(&g, 10),
            Err(RoutingError::TooFew { requested: 10, available: 4 })
        );
    }

    #[test]
    fn greedy_farthest_seeding_scenario() {
        // 0<->1 (1), 1<->2 (1), 2<->3 (10): node 3 is the graph's extremum
        let mut g: Graph<()> = Graph::new();
        for i in 0..4 {
            g.add_node(i, ());
        }
        g.add_edge(0, 1, 1.0).unwrap();
        g.add_edge(1, 0, 1.0).unwrap();
        g.add_edge(1, 2, 1.0).unwrap();
        g.add_edge(2, 1, 1.0).unwrap();
        g.add_edge(2, 3, 10.0).unwrap();
        g.add_edge(3, 2, 10.0).unwrap();

        let landmarks = GreedyFarthestLandmarks.landmarks(&g, 2).unwrap();
        assert_eq!(landmarks.len(), 2);
        assert!(landmarks.contains(&3), "expected node 3 among {:?}", landmarks);
    }
}
