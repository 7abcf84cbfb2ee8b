//! Route API integration tests.
//!
//! Run with: cargo test --test routes_test -- --ignored
//! Requires a running Searoute server.

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

fn base_url() -> String {
    std::env::var("SEAROUTE_TEST_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

#[tokio::test]
#[ignore]
async fn test_health() {
    let resp = reqwest::get(format!("{}/health", base_url())).await.unwrap();
    assert!(resp.status().is_success());
    assert_eq!(resp.text().await.unwrap(), "OK");
}

/// Shanghai to Hamburg always comes back with the four curated corridors.
#[tokio::test]
#[ignore]
async fn test_curated_plan_over_http() {
    let client = Client::new();
    let resp = client
        .post(format!("{}/v1/routes/compute", base_url()))
        .json(&json!({ "origin": [121.47, 31.23], "destination": [9.99, 53.55] }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key("x-request-id"));

    let plan: Value = resp.json().await.unwrap();
    assert_eq!(plan["mode"], "curated");
    let ids: Vec<&str> = plan["routes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap())
        .collect();
    assert_eq!(
        ids,
        ["cape-of-good-hope", "suez-canal", "panama-canal", "northern-sea-route"]
    );
}

/// Synthesized plans are stable across repeated calls.
#[tokio::test]
#[ignore]
async fn test_synthesized_plan_is_deterministic() {
    let client = Client::new();
    let request = json!({ "origin": "Sydney", "destination": "USNYC" });

    let mut plans = Vec::new();
    for _ in 0..2 {
        let resp = client
            .post(format!("{}/v1/routes/between", base_url()))
            .json(&request)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let mut plan: Value = resp.json().await.unwrap();
        plan.as_object_mut().unwrap().remove("computed_at");
        plans.push(plan);
    }
    assert_eq!(plans[0]["mode"], "synthesized");
    assert_eq!(plans[0], plans[1]);
}

#[tokio::test]
#[ignore]
async fn test_unknown_port_is_not_found() {
    let resp = reqwest::get(format!("{}/v1/ports/ZZZZZ", base_url()))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
