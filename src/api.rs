//! The demo HTTP endpoint. Builds its shortest-path engine fresh per
//! request from the shared, read-only graph and (optional) landmark
//! metric: both are immutable once the server starts, so there's
//! nothing to lock.

use crate::geo::GeoPoint;
use crate::graph::{NodeId, RoadGraph};
use crate::landmark::LandmarkMetric;
use crate::search::astar::AStar;
use crate::search::dijkstra::Dijkstra;
use crate::search::ShortestPath;
use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use serde::{Deserialize, Serialize};

pub struct AppState {
    pub graph: RoadGraph,
    /// When present, `/route` is answered by A\* guided by this metric;
    /// otherwise by plain Dijkstra.
    pub landmark_metric: Option<LandmarkMetric>,
}

#[derive(Deserialize)]
struct RouteQuery {
    from: NodeId,
    to: NodeId,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct RouteResponse {
    cost: Option<f64>,
    nodes: Vec<NodeId>,
}

async fn route(state: web::Data<AppState>, query: web::Query<RouteQuery>) -> impl Responder {
    let path = match &state.landmark_metric {
        Some(metric) => AStar::new(state.graph.inner(), metric).path(query.from, query.to),
        None => Dijkstra::new(state.graph.inner()).path(query.from, query.to),
    };
    match path {
        Some(path) => HttpResponse::Ok().json(RouteResponse {
            cost: Some(path.total_cost()),
            nodes: path.node_sequence(),
        }),
        None => HttpResponse::Ok().json(RouteResponse { cost: None, nodes: Vec::new() }),
    }
}

#[derive(Deserialize)]
struct NearestQuery {
    lat: f32,
    lon: f32,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct NearestResponse {
    node: Option<NodeId>,
}

async fn nearest(state: web::Data<AppState>, query: web::Query<NearestQuery>) -> impl Responder {
    let point = GeoPoint::new(query.lat, query.lon);
    let node = state.graph.nearest(&point).map(|view| view.id);
    HttpResponse::Ok().json(NearestResponse { node })
}

pub async fn run(state: AppState, bind: &str) -> std::io::Result<()> {
    let state = web::Data::new(state);
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/route", web::get().to(route))
            .route("/nearest", web::get().to(nearest))
    })
    .bind(bind)?
    .run()
    .await
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::graph::{Road, RoadType};
    use actix_web::test;

    fn two_node_graph() -> RoadGraph {
        let mut graph = RoadGraph::new();
        graph.add_road_node(1, GeoPoint::new(0.0, 0.0));
        graph.add_road_node(2, GeoPoint::new(0.0, 0.01));
        graph
            .add_road(&Road { nodes: vec![1, 2], road_type: RoadType::Residential, one_way: false })
            .unwrap();
        graph
    }

    #[actix_web::test]
    async fn route_endpoint_finds_a_path() {
        let state = web::Data::new(AppState { graph: two_node_graph(), landmark_metric: None });
        let app = test::init_service(
            App::new().app_data(state.clone()).route("/route", web::get().to(route)),
        )
        .await;

        let req = test::TestRequest::get().uri("/route?from=1&to=2").to_request();
        let body: RouteResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.nodes, vec![1, 2]);
        assert!(body.cost.unwrap() > 0.0);
    }

    #[actix_web::test]
    async fn route_endpoint_reports_no_path() {
        let state = web::Data::new(AppState { graph: two_node_graph(), landmark_metric: None });
        let app = test::init_service(
            App::new().app_data(state.clone()).route("/route", web::get().to(route)),
        )
        .await;

        let req = test::TestRequest::get().uri("/route?from=2&to=99").to_request();
        let body: RouteResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, RouteResponse { cost: None, nodes: Vec::new() });
    }

    #[actix_web::test]
    async fn nearest_endpoint_finds_the_closest_node() {
        let state = web::Data::new(AppState { graph: two_node_graph(), landmark_metric: None });
        let app = test::init_service(
            App::new().app_data(state.clone()).route("/nearest", web::get().to(nearest)),
        )
        .await;

        let req = test::TestRequest::get().uri("/nearest?lat=0.0&lon=0.0").to_request();
        let body: NearestResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.node, Some(1));
    }
}
