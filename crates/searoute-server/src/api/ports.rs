//! Port catalog endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use searoute_core::{distance_km, Coordinate, ExclusionSet, Port, RouteError};
use serde::{Deserialize, Serialize};

use crate::api::{bad_request, route_error, ApiError};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListPortsQuery {
    /// Only return ports in this region (case-insensitive).
    pub region: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NearestPortQuery {
    pub lon: f64,
    pub lat: f64,
    /// Comma-separated port names to skip.
    pub exclude: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct NearestPortResponse {
    pub port: Port,
    pub distance_km: f64,
}

pub async fn list_ports(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListPortsQuery>,
) -> Json<Vec<Port>> {
    let directory = state.directory();
    let ports = match query.region.as_deref().map(str::trim) {
        Some(region) if !region.is_empty() => directory.in_region(region).cloned().collect(),
        _ => directory.iter().cloned().collect(),
    };
    Json(ports)
}

pub async fn nearest_port(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NearestPortQuery>,
) -> Result<Json<NearestPortResponse>, ApiError> {
    let coordinate = Coordinate::new(query.lon, query.lat)
        .validate()
        .map_err(|err| route_error(&err))?;
    let excluded: ExclusionSet = query
        .exclude
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect();

    let port = state
        .directory()
        .nearest_port(coordinate, &excluded)
        .map_err(|err| match err {
            // The caller's own exclusions emptied the pool.
            RouteError::NoPortAvailable { .. } if !excluded.is_empty() => {
                bad_request("Every port is excluded", err.to_string())
            }
            err => route_error(&err),
        })?;

    Ok(Json(NearestPortResponse {
        distance_km: distance_km(coordinate, port.coordinates),
        port: port.clone(),
    }))
}

pub async fn get_port(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> Result<Json<Port>, ApiError> {
    state
        .directory()
        .find(&key)
        .cloned()
        .map(Json)
        .map_err(|err| route_error(&err))
}
