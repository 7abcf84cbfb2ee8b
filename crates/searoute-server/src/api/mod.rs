//! API routes for the route server.

pub mod ports;
pub mod request_id;
pub mod routes;

use std::sync::Arc;

use axum::{
    http::StatusCode,
    middleware,
    routing::{get, post},
    Json, Router,
};
use searoute_core::RouteError;
use serde_json::{json, Value};

use crate::state::AppState;

/// Error half of every fallible handler.
pub type ApiError = (StatusCode, Json<Value>);

/// Create the API router.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/v1/ports", get(ports::list_ports))
        .route("/v1/ports/nearest", get(ports::nearest_port))
        .route("/v1/ports/:key", get(ports::get_port))
        .route("/v1/routes/compute", post(routes::compute_routes))
        .route("/v1/routes/between", post(routes::routes_between))
        .route("/v1/render/segments", post(routes::render_segments))
        .layer(middleware::from_fn(request_id::ensure_request_id))
}

pub(crate) fn bad_request(message: &str, details: impl Into<String>) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": message, "details": details.into() })),
    )
}

/// Map a core failure onto a status code and JSON body.
pub(crate) fn route_error(err: &RouteError) -> ApiError {
    let (status, message) = match err {
        RouteError::InvalidCoordinate { .. } | RouteError::MalformedCoordinate(_) => {
            (StatusCode::BAD_REQUEST, "Invalid coordinate")
        }
        RouteError::SamePort { .. } => (
            StatusCode::BAD_REQUEST,
            "Origin and destination resolve to the same port",
        ),
        RouteError::UnknownPort(_) => (StatusCode::NOT_FOUND, "Unknown port"),
        RouteError::NoPortAvailable { .. } => {
            tracing::error!(error = %err, "port directory exhausted");
            (StatusCode::INTERNAL_SERVER_ERROR, "no route could be computed")
        }
        RouteError::DuplicatePort(_) | RouteError::InvalidConfig(_) => {
            tracing::error!(error = %err, "server misconfigured");
            (StatusCode::INTERNAL_SERVER_ERROR, "no route could be computed")
        }
    };
    (
        status,
        Json(json!({ "error": message, "details": err.to_string() })),
    )
}

#[cfg(test)]
mod tests;
