//! Searoute CLI - Command line tools over the route engine.
//!
//! Binaries:
//! - compute_routes: route plan between two coordinates or ports
//! - nearest_port: resolve a coordinate to a catalog port
//! - split_path: seam-safe render segments for a waypoint list

pub mod endpoint;
pub mod report;

pub use endpoint::{plan, Endpoint};
