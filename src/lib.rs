//! A road-network shortest-path engine: a graph model shared by three
//! interchangeable query algorithms (Dijkstra, ALT-guided A\*, and
//! arc-flag-accelerated Dijkstra), plus the preprocessing each needs
//! (strongly-connected-component reduction, landmark selection, region
//! partitioning, arc-flag computation).

pub mod api;
pub mod arc_flags;
pub mod error;
pub mod geo;
pub mod graph;
pub mod landmark;
pub mod osm;
pub mod partition;
pub mod path;
pub mod scc;
pub mod search;
pub mod tsv;
pub mod utils;

pub use error::RoutingError;
pub use geo::GeoPoint;
pub use graph::{Graph, NodeId, Road, RoadGraph, RoadGraphBuilder, RoadType};
pub use path::Path;
pub use search::ShortestPath;
