//! Positional TSV output: a pure formatter, not part of the core's
//! correctness contract.

use crate::graph::{NodeView, RoadNode};

/// Format one `<lat>\t<lon>` line per road node, separated by the host
/// platform's newline. Pure function of the iteration order it is given.
pub fn positions_tsv<'a>(nodes: impl IntoIterator<Item = NodeView<'a, RoadNode>>) -> String {
    let mut out = String::new();
    for node in nodes {
        out.push_str(&node.data.lat.to_string());
        out.push('\t');
        out.push_str(&node.data.lon.to_string());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geo::GeoPoint;
    use crate::graph::RoadGraph;

    #[test]
    fn one_line_per_node() {
        let mut graph = RoadGraph::new();
        graph.add_road_node(1, GeoPoint::new(49.20, 6.95));
        graph.add_road_node(2, GeoPoint::new(49.25, 7.05));

        let tsv = positions_tsv(graph.nodes());
        assert_eq!(tsv.lines().count(), 2);
        assert!(tsv.contains("49.2"));
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let graph = RoadGraph::new();
        assert_eq!(positions_tsv(graph.nodes()), "");
    }

    #[test]
    fn is_a_pure_function_of_input_order() {
        let mut graph = RoadGraph::new();
        graph.add_road_node(1, GeoPoint::new(1.0, 2.0));
        graph.add_road_node(2, GeoPoint::new(3.0, 4.0));

        let nodes: Vec<_> = graph.nodes().collect();
        let forward = positions_tsv(nodes.iter().copied());
        let reversed = positions_tsv(nodes.into_iter().rev());
        assert_ne!(forward, reversed);
        assert_eq!(forward.lines().count(), reversed.lines().count());
    }
}
