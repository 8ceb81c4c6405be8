use thiserror::Error;

/// Errors surfaced synchronously at the boundary of a single offending call.
/// Nothing here is retried internally; see the crate-level docs for the
/// propagation policy.
#[derive(Error, Debug, Copy, Clone, PartialEq)]
pub enum RoutingError {
    /// An operation referenced a node id not present in the graph.
    #[error("unknown node: {0}")]
    UnknownNode(i64),

    /// Attempt to insert a negative edge cost.
    #[error("invalid cost: {0} (must be >= 0)")]
    InvalidCost(f64),

    /// Attempted a direct edge/node insertion on the road graph. Callers
    /// must use `add_road_node`/`add_road` instead.
    #[error("direct node/edge insertion is not supported on a road graph")]
    UnsupportedOperation,

    /// Requested the speed of a road type not in the enumeration, or OSM
    /// `highway` tag lookup failed.
    #[error("unknown road type: {0}")]
    UnknownRoadType(&'static str),

    /// Requested landmark count was <= 0.
    #[error("invalid landmark count: {0} (must be > 0)")]
    InvalidCount(i64),

    /// Requested more landmarks than the graph has nodes.
    #[error("requested {requested} landmarks but the graph only has {available} nodes")]
    TooFew { requested: usize, available: usize },

    /// A road had fewer than two nodes, so no edge could be derived from it.
    #[error("degenerate road: {0} node(s), need at least 2")]
    DegenerateRoad(usize),
}
