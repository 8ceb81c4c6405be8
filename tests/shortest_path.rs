//! End-to-end: text ingest -> SCC reduction -> each of the three query
//! engines agreeing with one another on a small synthetic road network.

use roadrouter::arc_flags::ArcFlagIndex;
use roadrouter::landmark::{GreedyFarthestLandmarks, LandmarkMetric, LandmarkProvider};
use roadrouter::partition::{Partitioning, RectanglePartitioning};
use roadrouter::scc::reduce_road_graph_to_largest_scc;
use roadrouter::search::astar::AStar;
use roadrouter::search::dijkstra::Dijkstra;
use roadrouter::ShortestPath;

const MAP: &str = "\
    N 1 42.500 1.500\n\
    N 2 42.510 1.510\n\
    N 3 42.520 1.520\n\
    N 4 42.530 1.530\n\
    N 5 42.540 1.540\n\
    N 99 10.0 10.0\n\
    W primary 0 1 2 3\n\
    W secondary 0 3 4 5\n\
    W residential 1 1 99\n\
";

#[test]
fn engines_agree_on_a_small_road_network() {
    let (mut graph, warnings) = roadrouter::osm::parse(MAP);
    assert!(warnings.is_empty());

    reduce_road_graph_to_largest_scc(&mut graph);
    // node 99 is only reachable one-way from node 1, so it drops out of
    // the largest strongly connected component
    assert!(!graph.contains_node(99));

    let dijkstra = Dijkstra::new(graph.inner());
    let dijkstra_cost = dijkstra.cost(1, 5).expect("path should exist");

    let landmarks = GreedyFarthestLandmarks.landmarks(graph.inner(), 2).unwrap();
    let metric = LandmarkMetric::build(graph.inner(), &landmarks);
    let astar = AStar::new(graph.inner(), &metric);
    assert_eq!(astar.cost(1, 5), Some(dijkstra_cost));

    let regions = RectanglePartitioning::new(42.0, 1.0, 42.515, 1.515).regions(&graph);
    let arc_flags = ArcFlagIndex::build(graph.inner(), &regions);
    assert_eq!(arc_flags.cost(1, 5), Some(dijkstra_cost));

    let arc_space: std::collections::HashSet<_> = arc_flags.search_space(1, 5).into_iter().collect();
    let dijkstra_space: std::collections::HashSet<_> = dijkstra.search_space(1, 5).into_iter().collect();
    assert!(arc_space.is_subset(&dijkstra_space));
}

#[test]
fn one_way_road_is_not_traversable_backwards() {
    let text = "N 1 0.0 0.0\nN 2 0.0 0.1\nW primary 1 1 2\n";
    let (graph, _) = roadrouter::osm::parse(text);
    let dijkstra = Dijkstra::new(graph.inner());
    assert!(dijkstra.path(1, 2).is_some());
    assert!(dijkstra.path(2, 1).is_none());
}
