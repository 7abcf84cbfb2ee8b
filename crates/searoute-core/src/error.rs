//! Error type shared by the resolver, engine and catalog.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    /// Every port was excluded (or the catalog is empty).
    #[error("no port available after excluding {excluded} candidate(s)")]
    NoPortAvailable { excluded: usize },

    #[error("origin and destination both resolve to {port}")]
    SamePort { port: String },

    #[error("invalid coordinate ({lon}, {lat})")]
    InvalidCoordinate { lon: f64, lat: f64 },

    #[error("malformed coordinate '{0}', expected LON,LAT")]
    MalformedCoordinate(String),

    #[error("unknown port: {0}")]
    UnknownPort(String),

    #[error("duplicate port in catalog: {0}")]
    DuplicatePort(String),

    #[error("invalid synthesis config: {0}")]
    InvalidConfig(String),
}
