//! The generic best-first exploration skeleton.
//!
//! One routine, parameterised by an estimator and an edge-filter closure
//! rather than by an inheritance hierarchy of search strategies. Dijkstra,
//! A*, and arc-flag-filtered search are all thin wrappers configuring this
//! one loop.

pub mod astar;
pub mod dijkstra;

use crate::graph::{EdgeWeight, Graph, NodeId};
use crate::path::{Path, PathEdge};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

/// Total ordering wrapper over `f64`, valid as long as costs and
/// estimator values are always finite and non-negative (guaranteed by
/// `Graph::add_edge`'s `InvalidCost` check and by admissible estimators).
#[derive(Copy, Clone, PartialEq)]
struct MinFloat(f64);

impl Eq for MinFloat {}

impl PartialOrd for MinFloat {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MinFloat {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.partial_cmp(&other.0).unwrap_or(Ordering::Equal)
    }
}

#[derive(Copy, Clone, PartialEq)]
struct HeapEntry {
    priority: MinFloat,
    seq: u64,
    node: NodeId,
    tentative: MinFloat,
}

impl Eq for HeapEntry {}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap, we want the smallest
        // (priority, seq) pair on top.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Copy, Clone, Debug)]
struct ParentEdge {
    from: NodeId,
    cost: f64,
}

/// The outputs available from one completed exploration.
pub struct SearchResult {
    costs: HashMap<NodeId, f64>,
    parents: HashMap<NodeId, ParentEdge>,
    /// Settled nodes, in the order they were settled.
    settled_order: Vec<NodeId>,
}

impl SearchResult {
    pub fn cost(&self, node: NodeId) -> Option<f64> {
        self.costs.get(&node).copied()
    }

    pub fn costs(&self) -> &HashMap<NodeId, f64> {
        &self.costs
    }

    pub fn search_space(&self) -> &[NodeId] {
        &self.settled_order
    }

    /// Every parent-edge relation recorded during the search, as
    /// `(from, to, cost)` triples — the shortest-path-tree edges rooted at
    /// the source(s). Used by the arc-flag preprocessor to mark which
    /// original edges lie on a reverse shortest-path tree.
    pub fn tree_edges(&self) -> impl Iterator<Item = (NodeId, NodeId, f64)> + '_ {
        self.parents
            .iter()
            .map(|(&to, parent)| (parent.from, to, parent.cost))
    }

    /// Reconstruct the path to `destination` via the parent-edge map.
    /// `None` if the destination was never settled.
    pub fn path(&self, destination: NodeId) -> Option<Path> {
        if !self.costs.contains_key(&destination) {
            return None;
        }

        let mut edges = Vec::new();
        let mut current = destination;
        while let Some(parent) = self.parents.get(&current) {
            edges.push(PathEdge {
                source: parent.from,
                target: current,
                cost: parent.cost,
            });
            current = parent.from;
        }
        edges.reverse();

        Some(Path::new(current, edges))
    }
}

/// Run the generic best-first search.
///
/// - `sources`: initial tentative costs (default 0 for a plain single
///   source).
/// - `estimator`: a lower bound on remaining cost to a destination (0 for
///   plain Dijkstra and arc-flag search, the ALT lower bound for A*).
/// - `filter`: whether to relax a given edge (always true for Dijkstra and
///   A*, an arc-flag bit test otherwise).
/// - `stop_at`: stop as soon as this node is settled, instead of
///   exhausting the whole reachable set.
pub fn best_first_search<N, E, Est, Filt>(
    graph: &Graph<N, E>,
    sources: impl IntoIterator<Item = (NodeId, f64)>,
    estimator: Est,
    filter: Filt,
    stop_at: Option<NodeId>,
) -> SearchResult
where
    E: EdgeWeight,
    Est: Fn(NodeId) -> f64,
    Filt: Fn(&crate::graph::EdgeView<E>) -> bool,
{
    let mut costs: HashMap<NodeId, f64> = HashMap::new();
    let mut parents: HashMap<NodeId, ParentEdge> = HashMap::new();
    let mut settled: std::collections::HashSet<NodeId> = std::collections::HashSet::new();
    let mut settled_order: Vec<NodeId> = Vec::new();
    let mut heap: BinaryHeap<HeapEntry> = BinaryHeap::new();
    let mut seq: u64 = 0;

    for (node, initial_cost) in sources {
        let improves = costs.get(&node).map_or(true, |&c| initial_cost < c);
        if improves {
            costs.insert(node, initial_cost);
            heap.push(HeapEntry {
                priority: MinFloat(initial_cost + estimator(node)),
                seq,
                node,
                tentative: MinFloat(initial_cost),
            });
            seq += 1;
        }
    }

    while let Some(entry) = heap.pop() {
        let HeapEntry { node, tentative, .. } = entry;

        if settled.contains(&node) {
            continue;
        }
        // Lazy invalidation: this entry is stale if a smaller cost has
        // since been recorded for `node`.
        if tentative.0 > *costs.get(&node).unwrap_or(&f64::INFINITY) {
            continue;
        }

        settled.insert(node);
        settled_order.push(node);

        if stop_at == Some(node) {
            break;
        }

        for edge in graph.outgoing(node) {
            if !filter(&edge) {
                continue;
            }
            let new_cost = tentative.0 + edge.weight.cost();
            let better = costs.get(&edge.target).map_or(true, |&c| new_cost < c);
            if better {
                costs.insert(edge.target, new_cost);
                parents.insert(
                    edge.target,
                    ParentEdge { from: node, cost: edge.weight.cost() },
                );
                heap.push(HeapEntry {
                    priority: MinFloat(new_cost + estimator(edge.target)),
                    seq,
                    node: edge.target,
                    tentative: MinFloat(new_cost),
                });
                seq += 1;
            }
        }
    }

    SearchResult { costs, parents, settled_order }
}

/// Shared capability of every query engine: Dijkstra, A*, and arc-flag
/// search all implement this the same way.
pub trait ShortestPath<N, E: EdgeWeight> {
    fn search(&self, source: NodeId, destination: Option<NodeId>) -> SearchResult;

    fn cost(&self, source: NodeId, destination: NodeId) -> Option<f64> {
        self.search(source, Some(destination)).cost(destination)
    }

    fn path(&self, source: NodeId, destination: NodeId) -> Option<Path> {
        self.search(source, Some(destination)).path(destination)
    }

    fn search_space(&self, source: NodeId, destination: NodeId) -> Vec<NodeId> {
        self.search(source, Some(destination)).settled_order
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
    fn zero_heuristic_no_filter_reaches_destination() {
        let g = ring();
        let result = best_first_search(&g, [(0, 0.0)], |_| 0.0, |_| true, Some(3));
        assert_eq!(result.cost(3), Some(3.0));
        let path = result.path(3).unwrap();
        assert_eq!(path.node_sequence(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn unreachable_destination_is_none() {
        let mut g = ring();
        g.add_node(99, ());
        let result = best_first_search(&g, [(0, 0.0)], |_| 0.0, |_| true, Some(99));
        assert_eq!(result.cost(99), None);
        assert!(result.path(99).is_none());
    }

    #[test]
    fn filter_can_block_every_edge() {
        let g = ring();
        let result = best_first_search(&g, [(0, 0.0)], |_| 0.0, |_| false, Some(3));
        assert_eq!(result.cost(3), None);
        // only the source itself is settled
        assert_eq!(result.search_space(), &[0]);
    }

    #[test]
    fn multi_source_picks_the_closer_one() {
        let g = ring();
        let result = best_first_search(&g, [(0, 0.0), (2, 0.0)], |_| 0.0, |_| true, None);
        // node 1 is reachable from 0 at cost 1, and from 2 only by going all the way around
        assert_eq!(result.cost(1), Some(1.0));
        assert_eq!(result.cost(3), Some(1.0)); // from node 2
    }
}
