//! A minimal textual stand-in for an OSM reader.
//!
//! Binary `.osm.pbf` parsing is out of scope here; this module implements
//! the same contract — `add_road_node`/`add_road` in order, permissive
//! about malformed input — over a line-oriented text format so the ingest
//! path has a concrete, testable external collaborator:
//!
//! ```text
//! N <id> <lat> <lon>
//! W <highway-tag> <oneway: 0|1> <node-id> <node-id> [<node-id> ...]
//! ```
//!
//! Blank lines and lines starting with `#` are comments. Any other
//! malformed line is skipped.

use crate::graph::{NodeId, Road, RoadGraph, RoadGraphBuilder, RoadType};

/// Parse `text` into a road graph, driving [`RoadGraphBuilder`] the way a
/// real OSM reader would. Returns the built graph plus every warning
/// collected along the way (dropped roads, unknown node references).
pub fn parse(text: &str) -> (RoadGraph, Vec<String>) {
    let mut builder = RoadGraphBuilder::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some("N") => {
                if let Some((id, lat, lon)) = parse_node(&mut tokens) {
                    builder.add_road_node(id, crate::geo::GeoPoint::new(lat, lon));
                }
            }
            Some("W") => {
                if let Some(road) = parse_way(&mut tokens) {
                    builder.add_road(&road);
                }
                // an unrecognized `highway` tag is a silent drop
            }
            _ => {
                // unrecognized line kind: skipped
            }
        }
    }

    builder.build()
}

fn parse_node<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Option<(NodeId, f32, f32)> {
    let id = tokens.next()?.parse().ok()?;
    let lat = tokens.next()?.parse().ok()?;
    let lon = tokens.next()?.parse().ok()?;
    Some((id, lat, lon))
}

fn parse_way<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Option<Road> {
    let highway = tokens.next()?;
    let road_type = RoadType::from_osm_highway(highway).ok()?;
    let one_way = match tokens.next()? {
        "1" => true,
        "0" => false,
        _ => return None,
    };
    let nodes: Vec<NodeId> = tokens.map(|t| t.parse()).collect::<Result<_, _>>().ok()?;
    Some(Road { nodes, road_type, one_way })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_nodes_and_a_two_way_road() {
        let text = "\
            # a tiny two-node motorway\n\
            N 1 49.20 6.95\n\
            N 2 49.25 7.05\n\
            W motorway 0 1 2\n\
        ";
        let (graph, warnings) = parse(text);
        assert!(warnings.is_empty());
        assert_eq!(graph.size(), 2);
        assert_eq!(graph.edge_count(), 2); // expanded both directions
    }

    #[test]
    fn one_way_road_expands_a_single_direction() {
        let text = "N 1 0.0 0.0\nN 2 0.0 0.1\nW primary 1 1 2\n";
        let (graph, _) = parse(text);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.outgoing(1).len(), 1);
        assert_eq!(graph.outgoing(2).len(), 0);
    }

    #[test]
    fn unknown_highway_tag_is_silently_dropped() {
        let text = "N 1 0.0 0.0\nN 2 0.0 0.1\nW skyway 0 1 2\n";
        let (graph, warnings) = parse(text);
        assert_eq!(graph.edge_count(), 0);
        assert!(warnings.is_empty());
    }

    #[test]
    fn short_road_produces_a_warning() {
        let text = "N 1 0.0 0.0\nW residential 0 1\n";
        let (_, warnings) = parse(text);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let text = "this is not a valid line\nN 1 0.0 0.0\n";
        let (graph, warnings) = parse(text);
        assert_eq!(graph.size(), 1);
        assert!(warnings.is_empty());
    }
}
