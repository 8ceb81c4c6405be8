//! Arc-flag preprocessing and query: for every region, reverse-Dijkstra
//! from its boundary nodes marks which edges may participate in a
//! shortest path into that region.

use crate::graph::{EdgeIndex, EdgeView, EdgeWeight, Graph, NodeId};
use crate::search::dijkstra::Dijkstra;
use crate::search::{best_first_search, SearchResult, ShortestPath};
use std::collections::{HashMap, HashSet};

/// An edge cost plus one bit per region, set when the edge may lie on a
/// shortest path into that region.
#[derive(Clone, Debug)]
pub struct FlaggedEdge {
    pub cost: f64,
    pub flags: Vec<bool>,
}

impl EdgeWeight for FlaggedEdge {
    fn cost(&self) -> f64 {
        self.cost
    }
}

/// The preprocessed structure: a graph whose edges carry region flags,
/// plus the node -> region index lookup queries need to pick a filter.
pub struct ArcFlagIndex<N> {
    graph: Graph<N, FlaggedEdge>,
    region_of: HashMap<NodeId, usize>,
    region_count: usize,
}

impl<N> ArcFlagIndex<N> {
    /// Run the arc-flag preprocessor over `graph` using the given
    /// `regions` (as produced by a [`crate::partition::Partitioning`]).
    pub fn build<E: EdgeWeight>(graph: &Graph<N, E>, regions: &[Vec<NodeId>]) -> Self
    where
        N: Clone,
    {
        let region_count = regions.len();

        let mut region_of: HashMap<NodeId, usize> = HashMap::new();
        for (idx, region) in regions.iter().enumerate() {
            for &node in region {
                region_of.insert(node, idx);
            }
        }

        let mut flags: HashMap<EdgeIndex, Vec<bool>> = HashMap::new();
        let init_flags = || vec![false; region_count];

        let reverse = graph.reversed();

        for (region_idx, region) in regions.iter().enumerate() {
            if region.is_empty() {
                continue;
            }
            let region_set: HashSet<NodeId> = region.iter().copied().collect();

            let boundary_nodes: Vec<NodeId> = region
                .iter()
                .copied()
                .filter(|&node| {
                    graph
                        .incoming(node)
                        .iter()
                        .any(|edge| !region_set.contains(&edge.source))
                })
                .collect();

            let reverse_search = Dijkstra::new(&reverse);
            for boundary in boundary_nodes {
                let result: SearchResult = reverse_search.search(boundary, None);
                // A reverse-graph tree edge (x -> y) corresponds to the
                // original forward edge (y -> x); that original edge lies
                // on a shortest path *into* `boundary`, hence into this
                // region.
                for (x, y, _cost) in result.tree_edges() {
                    for edge in graph.outgoing(y) {
                        if edge.target == x {
                            flags.entry(edge.index).or_insert_with(init_flags)[region_idx] = true;
                        }
                    }
                }
            }

            // Intra-region shortcuts: both endpoints already in this region.
            for &node in region {
                for edge in graph.outgoing(node) {
                    if region_set.contains(&edge.target) {
                        flags.entry(edge.index).or_insert_with(init_flags)[region_idx] = true;
                    }
                }
            }
        }

        let mut flagged: Graph<N, FlaggedEdge> = Graph::new();
        for node in graph.nodes() {
            flagged.add_node(node.id, node.data.clone());
        }
        for node in graph.nodes() {
            for edge in graph.outgoing(node.id) {
                let edge_flags = flags.get(&edge.index).cloned().unwrap_or_else(init_flags);
                flagged
                    .add_edge(edge.source, edge.target, FlaggedEdge { cost: edge.weight.cost(), flags: edge_flags })
                    .expect("endpoints came from a valid graph");
            }
        }

        ArcFlagIndex { graph: flagged, region_of, region_count }
    }

    pub fn region_count(&self) -> usize {
        self.region_count
    }

    pub fn region_of(&self, node: NodeId) -> Option<usize> {
        self.region_of.get(&node).copied()
    }
}

impl<N> ShortestPath<N, FlaggedEdge> for ArcFlagIndex<N> {
    fn search(&self, source: NodeId, destination: Option<NodeId>) -> SearchResult {
        match destination {
            None => best_first_search(&self.graph, [(source, 0.0)], |_| 0.0, |_| true, None),
            Some(destination) => {
                let region = self.region_of(destination);
                let filter = move |edge: &EdgeView<FlaggedEdge>| match region {
                    Some(r) => edge.weight.flags.get(r).copied().unwrap_or(false),
                    None => false,
                };
                best_first_search(&self.graph, [(source, 0.0)], |_| 0.0, filter, Some(destination))
            }
        }
    }
}
