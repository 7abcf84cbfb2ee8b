pub mod curated;
pub mod engine;
pub mod error;
pub mod geo;
pub mod models;
pub mod ports;
pub mod render;

pub use engine::{select_intermediates, CorridorConfig, RouteEngine, SynthesisConfig};
pub use error::RouteError;
pub use geo::{distance_km, haversine_km, path_length_km};
pub use models::{Coordinate, PlanMode, Port, RiskLevel, Route, RoutePlan};
pub use ports::{ExclusionSet, PortDirectory};
pub use render::{
    crosses_antimeridian, split_path, split_segment, Segment, DEFAULT_SEAM_OVERSHOOT_DEG,
};
