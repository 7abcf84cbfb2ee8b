use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use searoute_core::PortDirectory;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use crate::{api, config::Config, state::AppState};

fn setup_app() -> axum::Router {
    let state = AppState::new(Config::default()).expect("default config is valid");
    api::routes().with_state(Arc::new(state))
}

fn setup_app_with(directory: PortDirectory) -> axum::Router {
    let state = AppState::with_directory(directory, Config::default()).expect("valid state");
    api::routes().with_state(Arc::new(state))
}

async fn read_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("parse json")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn lists_whole_catalog_and_filters_by_region() {
    let app = setup_app();

    let res = app.clone().oneshot(get("/v1/ports")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = read_json(res).await;
    assert_eq!(
        body.as_array().unwrap().len(),
        PortDirectory::builtin().len()
    );

    let res = app.oneshot(get("/v1/ports?region=europe")).await.unwrap();
    let body = read_json(res).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Rotterdam", "Hamburg", "Antwerp", "Felixstowe"]);
}

#[tokio::test]
async fn nearest_port_honors_exclusions() {
    let app = setup_app();

    let res = app
        .clone()
        .oneshot(get("/v1/ports/nearest?lon=121.5&lat=31.2"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = read_json(res).await;
    assert_eq!(body["port"]["name"], "Shanghai");
    assert!(body["distance_km"].as_f64().unwrap() < 10.0);

    let res = app
        .oneshot(get("/v1/ports/nearest?lon=121.5&lat=31.2&exclude=Shanghai,%20Busan"))
        .await
        .unwrap();
    let body = read_json(res).await;
    let name = body["port"]["name"].as_str().unwrap();
    assert_ne!(name, "Shanghai");
    assert_ne!(name, "Busan");
}

#[tokio::test]
async fn nearest_port_rejects_out_of_range_coordinates() {
    let res = setup_app()
        .oneshot(get("/v1/ports/nearest?lon=10&lat=95"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = read_json(res).await;
    assert_eq!(body["error"], "Invalid coordinate");
}

#[tokio::test]
async fn nearest_port_with_everything_excluded_is_a_client_error() {
    let directory = PortDirectory::new(vec![
        searoute_core::Port {
            code: "AAAAA".to_string(),
            name: "Alpha".to_string(),
            country: "Testland".to_string(),
            coordinates: searoute_core::Coordinate::new(0.0, 0.0),
            region: "R".to_string(),
        },
        searoute_core::Port {
            code: "BBBBB".to_string(),
            name: "Beta".to_string(),
            country: "Testland".to_string(),
            coordinates: searoute_core::Coordinate::new(5.0, 5.0),
            region: "R".to_string(),
        },
    ])
    .unwrap();
    let res = setup_app_with(directory)
        .oneshot(get("/v1/ports/nearest?lon=1&lat=1&exclude=Alpha,Beta"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_json(res).await["error"], "Every port is excluded");
}

#[tokio::test]
async fn looks_up_ports_by_code_or_name() {
    let app = setup_app();

    let res = app.clone().oneshot(get("/v1/ports/cnsha")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(read_json(res).await["name"], "Shanghai");

    let res = app.clone().oneshot(get("/v1/ports/Hamburg")).await.unwrap();
    assert_eq!(read_json(res).await["code"], "DEHAM");

    let res = app.oneshot(get("/v1/ports/Atlantis")).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn shanghai_to_hamburg_returns_curated_routes() {
    let res = setup_app()
        .oneshot(post_json(
            "/v1/routes/compute",
            json!({
                "origin": [121.48, 31.22],
                "destination": [10.0, 53.55],
                "include_segments": true
            }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().contains_key("x-request-id"));

    let body = read_json(res).await;
    assert_eq!(body["mode"], "curated");
    assert_eq!(body["origin"]["name"], "Shanghai");
    assert_eq!(body["destination"]["name"], "Hamburg");
    assert!(body["computed_at"].is_string());

    let routes = body["routes"].as_array().unwrap();
    let risks: Vec<&str> = routes
        .iter()
        .map(|r| r["risk_level"].as_str().unwrap())
        .collect();
    assert_eq!(risks, ["low", "high", "medium", "high"]);

    let segments = body["segments"].as_object().unwrap();
    assert_eq!(segments.len(), 4);
    let panama = routes.iter().find(|r| r["id"] == "panama-canal").unwrap();
    let panama_points = panama["waypoints"].as_array().unwrap().len();
    // One extra segment for the Pacific crossing.
    assert_eq!(segments["panama-canal"].as_array().unwrap().len(), panama_points);
}

#[tokio::test]
async fn other_pairs_get_three_synthesized_routes() {
    let res = setup_app()
        .oneshot(post_json(
            "/v1/routes/compute",
            json!({ "origin": [-118.27, 33.74], "destination": [4.48, 51.92] }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = read_json(res).await;
    assert_eq!(body["mode"], "synthesized");
    assert!(body.get("segments").is_none());

    let routes = body["routes"].as_array().unwrap();
    assert_eq!(routes.len(), 3);
    for route in routes {
        let waypoints = route["waypoints"].as_array().unwrap();
        let names = route["waypoint_names"].as_array().unwrap();
        assert_eq!(waypoints.len(), names.len());
        assert_eq!(names.first().unwrap(), "Los Angeles");
        assert_eq!(names.last().unwrap(), "Rotterdam");
        assert!(route["distance_km"].as_u64().unwrap() > 0);
    }
}

#[tokio::test]
async fn compute_rejects_invalid_coordinates() {
    let res = setup_app()
        .oneshot(post_json(
            "/v1/routes/compute",
            json!({ "origin": [200.0, 0.0], "destination": [4.48, 51.92] }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = read_json(res).await;
    assert_eq!(body["error"], "Invalid coordinate");
    assert!(body["details"].is_string());
}

#[tokio::test]
async fn compute_rejects_points_resolving_to_one_port() {
    let res = setup_app()
        .oneshot(post_json(
            "/v1/routes/compute",
            json!({ "origin": [4.40, 51.90], "destination": [4.55, 51.95] }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = read_json(res).await;
    assert_eq!(body["error"], "Origin and destination resolve to the same port");
}

#[tokio::test]
async fn empty_catalog_reports_server_error() {
    let app = setup_app_with(PortDirectory::new(Vec::new()).unwrap());
    let res = app
        .oneshot(post_json(
            "/v1/routes/compute",
            json!({ "origin": [0.0, 0.0], "destination": [10.0, 10.0] }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(read_json(res).await["error"], "no route could be computed");
}

#[tokio::test]
async fn between_accepts_codes_and_names_in_either_direction() {
    let app = setup_app();

    let res = app
        .clone()
        .oneshot(post_json(
            "/v1/routes/between",
            json!({ "origin": "CNSHA", "destination": "hamburg" }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = read_json(res).await;
    assert_eq!(body["mode"], "curated");
    assert_eq!(body["routes"].as_array().unwrap().len(), 4);

    let res = app
        .oneshot(post_json(
            "/v1/routes/between",
            json!({ "origin": "DEHAM", "destination": "Shanghai" }),
        ))
        .await
        .unwrap();
    let body = read_json(res).await;
    assert_eq!(body["mode"], "curated");
    let first = &body["routes"][0];
    assert_eq!(first["waypoint_names"][0], "Hamburg");
    assert_eq!(first["waypoints"][0], json!([9.9937, 53.5511]));
}

#[tokio::test]
async fn between_reports_unknown_ports() {
    let res = setup_app()
        .oneshot(post_json(
            "/v1/routes/between",
            json!({ "origin": "Atlantis", "destination": "Hamburg" }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(read_json(res).await["error"], "Unknown port");
}

#[tokio::test]
async fn render_segments_splits_at_the_antimeridian() {
    let res = setup_app()
        .oneshot(post_json(
            "/v1/render/segments",
            json!({ "waypoints": [[170.0, 10.0], [-170.0, 20.0]] }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = read_json(res).await;
    let segments = body["segments"].as_array().unwrap();
    assert_eq!(segments.len(), 2);
    let exit = segments[0]["to"].as_array().unwrap();
    assert!((exit[0].as_f64().unwrap() - 180.1).abs() < 1e-9);
    assert!((exit[1].as_f64().unwrap() - 15.0).abs() < 1e-9);
}

#[tokio::test]
async fn render_segments_needs_two_waypoints() {
    let res = setup_app()
        .oneshot(post_json(
            "/v1/render/segments",
            json!({ "waypoints": [[170.0, 10.0]] }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn echoes_caller_request_id() {
    let req = Request::builder()
        .uri("/v1/ports/SGSIN")
        .header("x-request-id", "trace-me")
        .body(Body::empty())
        .unwrap();
    let res = setup_app().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()["x-request-id"], "trace-me");
}
