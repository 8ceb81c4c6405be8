use clap::Parser;
use roadrouter::api::AppState;
use roadrouter::graph::NodeId;
use roadrouter::landmark::{GreedyFarthestLandmarks, LandmarkMetric, LandmarkProvider};
use roadrouter::scc::reduce_road_graph_to_largest_scc;
use roadrouter::search::astar::AStar;
use roadrouter::search::dijkstra::Dijkstra;
use roadrouter::search::ShortestPath;
use roadrouter::tsv::positions_tsv;
use roadrouter::utils::DebugTime;
use std::path::PathBuf;

/// Shortest-path queries over a road network built from a text OSM-like
/// ingest file.
#[derive(Parser, Debug)]
enum Command {
    /// Start the demo HTTP API
    Serve {
        /// Input file, in this project's textual OSM stand-in format
        #[clap(short, long, parse(from_os_str))]
        input: PathBuf,

        /// Address to bind the HTTP server to
        #[clap(long, default_value = "127.0.0.1:8080")]
        bind: String,

        /// Number of ALT landmarks to precompute; omit to serve plain
        /// Dijkstra instead of A\*.
        #[clap(long)]
        landmarks: Option<i64>,
    },
    /// Run a single shortest-path query and print its cost and node sequence
    Route {
        #[clap(short, long, parse(from_os_str))]
        input: PathBuf,

        from: NodeId,
        to: NodeId,

        #[clap(long)]
        landmarks: Option<i64>,
    },
    /// Print every road node's coordinates as `<lat>\t<lon>` lines
    Tsv {
        #[clap(short, long, parse(from_os_str))]
        input: PathBuf,
    },
}

fn load_graph(input: &PathBuf) -> roadrouter::graph::RoadGraph {
    let mut timer = DebugTime::new();
    let text = std::fs::read_to_string(input).expect("failed to read input file");
    let (mut graph, warnings) = roadrouter::osm::parse(&text);
    for warning in &warnings {
        eprintln!("warning: {warning}");
    }
    timer.msg(format!("parsed {} nodes, {} edges", graph.size(), graph.edge_count()));

    reduce_road_graph_to_largest_scc(&mut graph);
    timer.msg(format!(
        "reduced to largest strongly connected component: {} nodes, {} edges",
        graph.size(),
        graph.edge_count()
    ));

    graph
}

fn build_landmark_metric(graph: &roadrouter::graph::RoadGraph, k: i64) -> LandmarkMetric {
    let landmarks = GreedyFarthestLandmarks
        .landmarks(graph.inner(), k)
        .expect("invalid landmark count");
    LandmarkMetric::build(graph.inner(), &landmarks)
}

fn main() {
    match Command::parse() {
        Command::Serve { input, bind, landmarks } => {
            let graph = load_graph(&input);
            let landmark_metric = landmarks.map(|k| build_landmark_metric(&graph, k));
            let state = AppState { graph, landmark_metric };

            actix_rt::System::new()
                .block_on(roadrouter::api::run(state, &bind))
                .expect("server failed");
        }
        Command::Route { input, from, to, landmarks } => {
            let graph = load_graph(&input);
            let path = match landmarks {
                Some(k) => {
                    let metric = build_landmark_metric(&graph, k);
                    AStar::new(graph.inner(), &metric).path(from, to)
                }
                None => Dijkstra::new(graph.inner()).path(from, to),
            };
            match path {
                Some(path) => println!("cost={} nodes={:?}", path.total_cost(), path.node_sequence()),
                None => println!("no path found"),
            }
        }
        Command::Tsv { input } => {
            let graph = load_graph(&input);
            print!("{}", positions_tsv(graph.nodes()));
        }
    }
}
