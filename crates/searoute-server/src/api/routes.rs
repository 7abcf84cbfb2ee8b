//! Route computation and render-preparation endpoints.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use searoute_core::{split_path, Coordinate, RoutePlan, Segment};
use serde::{Deserialize, Serialize};

use crate::api::{bad_request, route_error, ApiError};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ComputeRoutesRequest {
    pub origin: Coordinate,
    pub destination: Coordinate,
    /// Attach seam-safe segments for every route.
    #[serde(default)]
    pub include_segments: bool,
}

#[derive(Debug, Deserialize)]
pub struct RoutesBetweenRequest {
    /// Port name or UN/LOCODE.
    pub origin: String,
    pub destination: String,
    #[serde(default)]
    pub include_segments: bool,
}

#[derive(Debug, Serialize)]
pub struct RoutePlanResponse {
    #[serde(flatten)]
    pub plan: RoutePlan,
    pub computed_at: DateTime<Utc>,
    /// Render segments keyed by route id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segments: Option<BTreeMap<String, Vec<Segment>>>,
}

#[derive(Debug, Deserialize)]
pub struct SegmentsRequest {
    pub waypoints: Vec<Coordinate>,
    /// Falls back to the server's configured overshoot.
    pub overshoot_deg: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct SegmentsResponse {
    pub segments: Vec<Segment>,
}

pub async fn compute_routes(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ComputeRoutesRequest>,
) -> Result<Json<RoutePlanResponse>, ApiError> {
    let origin = req.origin.validate().map_err(|err| reject(&err, "origin"))?;
    let destination = req
        .destination
        .validate()
        .map_err(|err| reject(&err, "destination"))?;

    let engine = state.engine().map_err(|err| route_error(&err))?;
    let plan = engine
        .compute(origin, destination)
        .map_err(|err| reject(&err, "compute"))?;

    Ok(Json(respond(&state, plan, req.include_segments)))
}

pub async fn routes_between(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RoutesBetweenRequest>,
) -> Result<Json<RoutePlanResponse>, ApiError> {
    let directory = state.directory();
    let origin = directory
        .find(&req.origin)
        .map_err(|err| reject(&err, "origin"))?;
    let destination = directory
        .find(&req.destination)
        .map_err(|err| reject(&err, "destination"))?;

    let engine = state.engine().map_err(|err| route_error(&err))?;
    let plan = engine
        .plan_between(origin, destination)
        .map_err(|err| reject(&err, "between"))?;

    Ok(Json(respond(&state, plan, req.include_segments)))
}

pub async fn render_segments(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SegmentsRequest>,
) -> Result<Json<SegmentsResponse>, ApiError> {
    if req.waypoints.len() < 2 {
        return Err(bad_request(
            "Not enough waypoints",
            "at least two waypoints are required",
        ));
    }
    let overshoot = req
        .overshoot_deg
        .unwrap_or(state.config().seam_overshoot_deg);
    if !overshoot.is_finite() || overshoot < 0.0 {
        return Err(bad_request(
            "Invalid overshoot",
            "overshoot_deg must be a non-negative finite number",
        ));
    }
    for waypoint in &req.waypoints {
        waypoint.validate().map_err(|err| route_error(&err))?;
    }

    Ok(Json(SegmentsResponse {
        segments: split_path(&req.waypoints, overshoot),
    }))
}

fn reject(err: &searoute_core::RouteError, stage: &str) -> ApiError {
    tracing::warn!(stage, error = %err, "route request rejected");
    route_error(err)
}

fn respond(state: &AppState, plan: RoutePlan, include_segments: bool) -> RoutePlanResponse {
    tracing::info!(
        origin = %plan.origin.name,
        destination = %plan.destination.name,
        mode = ?plan.mode,
        routes = plan.routes.len(),
        "computed route plan"
    );
    let segments = include_segments.then(|| {
        let overshoot = state.config().seam_overshoot_deg;
        plan.routes
            .iter()
            .map(|route| (route.id.clone(), split_path(&route.waypoints, overshoot)))
            .collect()
    });
    RoutePlanResponse {
        plan,
        computed_at: Utc::now(),
        segments,
    }
}
