//! Region partitioning: arc-flag preprocessing needs to split a road
//! graph's nodes into regions before it can compute per-region flags.

use crate::graph::{NodeId, RoadGraph};

/// Splits a road graph's nodes into an ordered, disjoint, exhaustive list
/// of regions. Region indices are stable flag positions, so even an empty
/// region must still appear in the output.
pub trait Partitioning {
    fn regions(&self, graph: &RoadGraph) -> Vec<Vec<NodeId>>;
}

/// Region 0 is every node strictly inside the rectangle (bounds
/// inclusive); region 1 is everything else.
pub struct RectanglePartitioning {
    min_lat: f32,
    min_lon: f32,
    max_lat: f32,
    max_lon: f32,
}

impl RectanglePartitioning {
    pub fn new(min_lat: f32, min_lon: f32, max_lat: f32, max_lon: f32) -> Self {
        RectanglePartitioning { min_lat, min_lon, max_lat, max_lon }
    }

    fn contains(&self, lat: f32, lon: f32) -> bool {
        lat >= self.min_lat && lat <= self.max_lat && lon >= self.min_lon && lon <= self.max_lon
    }
}

impl Partitioning for RectanglePartitioning {
    fn regions(&self, graph: &RoadGraph) -> Vec<Vec<NodeId>> {
        let mut inside = Vec::new();
        let mut outside = Vec::new();
        for node in graph.nodes() {
            if self.contains(node.data.lat, node.data.lon) {
                inside.push(node.id);
            } else {
                outside.push(node.id);
            }
        }
        vec![inside, outside]
    }
}
