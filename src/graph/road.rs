//! The road graph specialisation: a graph whose nodes carry geographic
//! coordinates and whose edges are derived from OSM-style polylines rather
//! than inserted one at a time.

use super::{Graph, GraphMutation, NodeId, NodeView};
use crate::error::RoutingError;
use crate::geo::GeoPoint;
use petgraph::graph::EdgeIndex;

/// A closed enumeration of OSM `highway` classifications, each carrying a
/// reference speed in km/h used to derive edge cost from geodesic distance.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RoadType {
    Motorway,
    Trunk,
    Primary,
    Secondary,
    Tertiary,
    MotorwayLink,
    TrunkLink,
    PrimaryLink,
    SecondaryLink,
    Road,
    Unclassified,
    Residential,
    Unsurfaced,
    LivingStreet,
    Service,
}

impl RoadType {
    /// Reference speed in km/h.
    pub fn reference_speed_kmh(&self) -> f64 {
        use RoadType::*;
        match self {
            Motorway => 110.0,
            Trunk => 110.0,
            Primary => 70.0,
            Secondary => 60.0,
            Tertiary => 50.0,
            MotorwayLink => 50.0,
            TrunkLink => 50.0,
            PrimaryLink => 50.0,
            SecondaryLink => 50.0,
            Road => 40.0,
            Unclassified => 40.0,
            Residential => 30.0,
            Unsurfaced => 30.0,
            LivingStreet => 10.0,
            Service => 5.0,
        }
    }

    fn reference_speed_m_per_s(&self) -> f64 {
        self.reference_speed_kmh() / 3.6
    }

    /// Map an OSM `highway` tag value to a road type by case-insensitive
    /// name match. Returns `UnknownRoadType` for anything not in the
    /// enumeration (including OSM tags this crate deliberately excludes,
    /// e.g. `footway`, `cycleway`, `steps`).
    pub fn from_osm_highway(tag: &str) -> Result<RoadType, RoutingError> {
        use RoadType::*;
        let normalized = tag.to_ascii_lowercase();
        Ok(match normalized.as_str() {
            "motorway" => Motorway,
            "trunk" => Trunk,
            "primary" => Primary,
            "secondary" => Secondary,
            "tertiary" => Tertiary,
            "motorway_link" => MotorwayLink,
            "trunk_link" => TrunkLink,
            "primary_link" => PrimaryLink,
            "secondary_link" => SecondaryLink,
            "road" => Road,
            "unclassified" => Unclassified,
            "residential" => Residential,
            "unsurfaced" => Unsurfaced,
            "living_street" => LivingStreet,
            "service" => Service,
            _ => return Err(RoutingError::UnknownRoadType("highway tag not recognized")),
        })
    }
}

/// A road node: a graph node augmented with immutable geographic
/// coordinates.
pub type RoadNode = GeoPoint;

/// An ordered polyline of >= 2 road-node ids, plus its classification and
/// direction. Callers insert roads, not raw edges.
#[derive(Clone, Debug)]
pub struct Road {
    pub nodes: Vec<NodeId>,
    pub road_type: RoadType,
    pub one_way: bool,
}

/// A graph whose nodes are all road nodes. Direct `add_node`/`add_edge`
/// calls are rejected (see [`GraphMutation`]); callers use
/// `add_road_node`/`add_road`, which expand a polyline into edges and
/// derive their cost from geodesic distance and the road type's reference
/// speed.
pub struct RoadGraph {
    graph: Graph<RoadNode, f64>,
}

impl Default for RoadGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl RoadGraph {
    pub fn new() -> Self {
        RoadGraph { graph: Graph::new() }
    }

    pub fn add_road_node(&mut self, id: NodeId, point: RoadNode) -> bool {
        self.graph.add_node(id, point)
    }

    /// Expand a road's polyline into forward edges and, when not one-way,
    /// reverse edges. Every referenced node must already be present
    /// (`UnknownNode` otherwise). Pairs of consecutive nodes at identical
    /// coordinates are silently skipped (no edge, no warning).
    pub fn add_road(&mut self, road: &Road) -> Result<(), RoutingError> {
        if road.nodes.len() < 2 {
            return Err(RoutingError::DegenerateRoad(road.nodes.len()));
        }

        let speed_m_per_s = road.road_type.reference_speed_m_per_s();

        for pair in road.nodes.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let a_point = self
                .graph
                .get_node(a)
                .ok_or(RoutingError::UnknownNode(a))?
                .data
                .clone();
            let b_point = self
                .graph
                .get_node(b)
                .ok_or(RoutingError::UnknownNode(b))?
                .data
                .clone();

            if a_point == b_point {
                continue;
            }

            let distance = a_point.equirectangular_distance(&b_point);
            let cost = distance / speed_m_per_s;

            self.graph.add_edge(a, b, cost)?;
            if !road.one_way {
                self.graph.add_edge(b, a, cost)?;
            }
        }

        Ok(())
    }

    pub fn get_node(&self, id: NodeId) -> Option<NodeView<RoadNode>> {
        self.graph.get_node(id)
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.graph.contains_node(id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeView<RoadNode>> {
        self.graph.nodes()
    }

    pub fn outgoing(&self, id: NodeId) -> Vec<super::EdgeView<f64>> {
        self.graph.outgoing(id)
    }

    pub fn incoming(&self, id: NodeId) -> Vec<super::EdgeView<f64>> {
        self.graph.incoming(id)
    }

    pub fn size(&self) -> usize {
        self.graph.size()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn reduce<F: Fn(NodeView<RoadNode>) -> bool>(&mut self, keep: F) {
        self.graph.reduce(keep)
    }

    /// Linear scan over all road nodes for the one closest to `point`,
    /// using equirectangular distance; ties are broken by first-encountered
    /// iteration order. `None` on an empty graph.
    pub fn nearest(&self, point: &GeoPoint) -> Option<NodeView<RoadNode>> {
        self.nodes()
            .min_by(|a, b| {
                let da = point.equirectangular_distance(a.data);
                let db = point.equirectangular_distance(b.data);
                da.partial_cmp(&db).unwrap()
            })
    }

    /// The underlying generic graph, for callers that want to run a
    /// [`crate::search`] algorithm directly over it (every query engine is
    /// generic over `Graph<N, E>`, not `RoadGraph` itself).
    pub fn inner(&self) -> &Graph<RoadNode, f64> {
        &self.graph
    }
}

impl GraphMutation<RoadNode, f64> for RoadGraph {
    fn mutate_add_node(&mut self, _id: NodeId, _data: RoadNode) -> Result<bool, RoutingError> {
        Err(RoutingError::UnsupportedOperation)
    }

    fn mutate_add_edge(&mut self, _source: NodeId, _target: NodeId, _weight: f64) -> Result<EdgeIndex, RoutingError> {
        Err(RoutingError::UnsupportedOperation)
    }
}

/// Accumulates road nodes and roads the way an OSM ingest pass would,
/// collecting warnings rather than failing outright.
#[derive(Default)]
pub struct RoadGraphBuilder {
    pub graph: RoadGraph,
    pub warnings: Vec<String>,
}

impl RoadGraphBuilder {
    pub fn new() -> Self {
        RoadGraphBuilder {
            graph: RoadGraph::new(),
            warnings: Vec::new(),
        }
    }

    pub fn add_road_node(&mut self, id: NodeId, point: RoadNode) {
        self.graph.add_road_node(id, point);
    }

    pub fn add_road(&mut self, road: &Road) {
        if let Err(err) = self.graph.add_road(road) {
            self.warnings.push(format!("dropped road: {}", err));
        }
    }

    pub fn build(self) -> (RoadGraph, Vec<String>) {
        (self.graph, self.warnings)
    }
}
