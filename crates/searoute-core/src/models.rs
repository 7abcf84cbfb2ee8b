//! Core data models for maritime route computation.

use serde::{Deserialize, Serialize};

use crate::error::RouteError;

/// A (longitude, latitude) pair in decimal degrees.
///
/// Serialized as a `[lon, lat]` array, matching the order map renderers expect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Coordinate {
    pub lon: f64,
    pub lat: f64,
}

impl Coordinate {
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Reject non-finite or out-of-range values.
    ///
    /// Geo math itself accepts anything; this is for request boundaries.
    pub fn validate(self) -> Result<Self, RouteError> {
        let finite = self.lon.is_finite() && self.lat.is_finite();
        if finite
            && (-180.0..=180.0).contains(&self.lon)
            && (-90.0..=90.0).contains(&self.lat)
        {
            Ok(self)
        } else {
            Err(RouteError::InvalidCoordinate {
                lon: self.lon,
                lat: self.lat,
            })
        }
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lon, lat): (f64, f64)) -> Self {
        Self { lon, lat }
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(c: Coordinate) -> Self {
        (c.lon, c.lat)
    }
}

impl std::str::FromStr for Coordinate {
    type Err = RouteError;

    /// Parse `"lon,lat"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || RouteError::MalformedCoordinate(s.to_string());
        let (lon, lat) = s.split_once(',').ok_or_else(invalid)?;
        let lon: f64 = lon.trim().parse().map_err(|_| invalid())?;
        let lat: f64 = lat.trim().parse().map_err(|_| invalid())?;
        Coordinate::new(lon, lat).validate()
    }
}

/// A named port in the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Port {
    /// UN/LOCODE, e.g. `CNSHA`.
    pub code: String,
    pub name: String,
    pub country: String,
    pub coordinates: Coordinate,
    pub region: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        };
        f.write_str(label)
    }
}

/// A candidate shipping route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub id: String,
    pub name: String,
    pub risk_level: RiskLevel,
    pub waypoints: Vec<Coordinate>,
    /// Parallel to `waypoints`.
    pub waypoint_names: Vec<String>,
    /// Kilometers, rounded once over the whole path.
    pub distance_km: u32,
    pub estimated_hours: u32,
    pub description: String,
}

/// How the routes of a plan were produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanMode {
    /// Hand-authored corridors for a designated port pair.
    Curated,
    /// Generated from intermediate ports along the origin-destination line.
    Synthesized,
}

/// Result of a single route computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePlan {
    pub origin: Port,
    pub destination: Port,
    pub mode: PlanMode,
    pub routes: Vec<Route>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_serializes_as_lon_lat_array() {
        let json = serde_json::to_string(&Coordinate::new(121.47, 31.23)).unwrap();
        assert_eq!(json, "[121.47,31.23]");

        let parsed: Coordinate = serde_json::from_str("[-74.0, 40.7]").unwrap();
        assert_eq!(parsed, Coordinate::new(-74.0, 40.7));
    }

    #[test]
    fn coordinate_validation_rejects_out_of_range() {
        assert!(Coordinate::new(180.0, 90.0).validate().is_ok());
        assert!(Coordinate::new(-180.0, -90.0).validate().is_ok());
        assert!(Coordinate::new(180.5, 0.0).validate().is_err());
        assert!(Coordinate::new(0.0, -91.0).validate().is_err());
        assert!(Coordinate::new(f64::NAN, 0.0).validate().is_err());
    }

    #[test]
    fn coordinate_parses_from_cli_pair() {
        let c: Coordinate = "9.99, 53.55".parse().unwrap();
        assert_eq!(c, Coordinate::new(9.99, 53.55));
        assert_eq!(
            "9.99".parse::<Coordinate>(),
            Err(RouteError::MalformedCoordinate("9.99".into()))
        );
        let err = "abc,1".parse::<Coordinate>().unwrap_err();
        assert_eq!(err, RouteError::MalformedCoordinate("abc,1".into()));
        assert!(err.to_string().contains("abc,1"));
        assert!(matches!(
            "200,1".parse::<Coordinate>(),
            Err(RouteError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn risk_level_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&RiskLevel::Medium).unwrap(), "\"medium\"");
        assert_eq!(RiskLevel::High.to_string(), "high");
    }
}
