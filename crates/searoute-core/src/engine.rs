//! Route synthesis: curated corridors for designated pairs, generated
//! corridors through intermediate ports for everything else.

use serde::{Deserialize, Serialize};

use crate::curated;
use crate::error::RouteError;
use crate::geo::{interpolate, path_length_km};
use crate::models::{Coordinate, PlanMode, Port, RiskLevel, Route, RoutePlan};
use crate::ports::{ExclusionSet, PortDirectory};

/// Parameters for one generated corridor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorridorConfig {
    pub id: String,
    pub name: String,
    pub risk_level: RiskLevel,
    /// Number of intermediate ports to insert.
    pub intermediates: usize,
    /// Regions tried first when choosing intermediates. Empty means no preference.
    pub preferred_regions: Vec<String>,
    pub speed_kmh: f64,
}

/// Corridors generated for a non-curated pair, in output order.
///
/// Each corridor excludes every intermediate chosen by the ones before it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisConfig {
    pub standard: CorridorConfig,
    pub alternative: CorridorConfig,
    pub express: CorridorConfig,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            standard: CorridorConfig {
                id: "standard".to_string(),
                name: "Standard Corridor".to_string(),
                risk_level: RiskLevel::Low,
                intermediates: 3,
                preferred_regions: [
                    "East Asia",
                    "Southeast Asia",
                    "South Asia",
                    "Europe",
                    "Mediterranean",
                    "North America",
                ]
                .map(String::from)
                .to_vec(),
                speed_kmh: 26.0,
            },
            alternative: CorridorConfig {
                id: "alternative".to_string(),
                name: "Alternative Corridor".to_string(),
                risk_level: RiskLevel::Low,
                intermediates: 2,
                preferred_regions: ["Africa", "Oceania", "South America", "Central America"]
                    .map(String::from)
                    .to_vec(),
                speed_kmh: 28.0,
            },
            express: CorridorConfig {
                id: "express".to_string(),
                name: "Express Route".to_string(),
                risk_level: RiskLevel::Medium,
                intermediates: 1,
                preferred_regions: Vec::new(),
                speed_kmh: 33.0,
            },
        }
    }
}

impl SynthesisConfig {
    pub fn corridors(&self) -> [&CorridorConfig; 3] {
        [&self.standard, &self.alternative, &self.express]
    }

    pub fn validate(&self) -> Result<(), RouteError> {
        let mut ids = Vec::new();
        for corridor in self.corridors() {
            if !(corridor.speed_kmh.is_finite() && corridor.speed_kmh > 0.0) {
                return Err(RouteError::InvalidConfig(format!(
                    "corridor '{}' speed must be positive, got {}",
                    corridor.id, corridor.speed_kmh
                )));
            }
            if corridor.intermediates == 0 {
                return Err(RouteError::InvalidConfig(format!(
                    "corridor '{}' needs at least one intermediate",
                    corridor.id
                )));
            }
            if corridor.id.trim().is_empty() {
                return Err(RouteError::InvalidConfig("corridor id must not be empty".into()));
            }
            if ids.contains(&corridor.id.as_str()) {
                return Err(RouteError::InvalidConfig(format!(
                    "duplicate corridor id '{}'",
                    corridor.id
                )));
            }
            ids.push(corridor.id.as_str());
        }
        Ok(())
    }
}

/// Build a `Route`, computing distance and ETA from the waypoints.
///
/// Distance is rounded once over the whole path; the ETA divides the rounded
/// distance by `speed_kmh`.
pub(crate) fn assemble_route(
    id: &str,
    name: &str,
    risk_level: RiskLevel,
    waypoints: Vec<Coordinate>,
    waypoint_names: Vec<String>,
    speed_kmh: f64,
    description: &str,
) -> Route {
    debug_assert_eq!(waypoints.len(), waypoint_names.len());
    debug_assert!(waypoints.len() >= 2, "route '{id}' needs two waypoints");

    let distance_km = path_length_km(&waypoints).round();
    let estimated_hours = (distance_km / speed_kmh).round();
    Route {
        id: id.to_string(),
        name: name.to_string(),
        risk_level,
        waypoints,
        waypoint_names,
        distance_km: distance_km as u32,
        estimated_hours: estimated_hours as u32,
        description: description.to_string(),
    }
}

/// Pick up to `count` intermediate ports spread along the origin-destination line.
///
/// Slot `i` targets the point at fraction `i / (count + 1)` of the straight
/// lon/lat line. The candidate pool is fixed before the first slot: the
/// non-excluded ports in `preferred_regions` if there are any, otherwise every
/// non-excluded port. Each pick leaves the pool for later slots. Stops early
/// once the pool is empty.
pub fn select_intermediates<'a>(
    directory: &'a PortDirectory,
    origin: Coordinate,
    destination: Coordinate,
    count: usize,
    preferred_regions: &[String],
    excluded: &ExclusionSet,
) -> Vec<&'a Port> {
    let in_preferred = |p: &Port| preferred_regions.iter().any(|r| *r == p.region);
    let restricted = directory
        .iter()
        .any(|p| !excluded.contains(&p.name) && in_preferred(p));

    let mut used = excluded.clone();
    let mut chosen = Vec::with_capacity(count);

    for slot in 1..=count {
        let target = interpolate(origin, destination, slot as f64 / (count + 1) as f64);
        let pick = directory.nearest_where(target, |p| {
            !used.contains(&p.name) && (!restricted || in_preferred(p))
        });

        let Some(port) = pick else {
            tracing::debug!(slot, count, restricted, "candidate pool exhausted");
            break;
        };
        used.insert(port.name.clone());
        chosen.push(port);
    }

    chosen
}

/// Computes route plans against a port directory.
#[derive(Debug, Clone)]
pub struct RouteEngine<'a> {
    directory: &'a PortDirectory,
    config: SynthesisConfig,
}

impl<'a> RouteEngine<'a> {
    pub fn new(directory: &'a PortDirectory) -> Self {
        Self {
            directory,
            config: SynthesisConfig::default(),
        }
    }

    pub fn with_config(
        directory: &'a PortDirectory,
        config: SynthesisConfig,
    ) -> Result<Self, RouteError> {
        config.validate()?;
        Ok(Self { directory, config })
    }

    pub fn directory(&self) -> &'a PortDirectory {
        self.directory
    }

    pub fn config(&self) -> &SynthesisConfig {
        &self.config
    }

    /// Resolve both coordinates independently to their nearest ports.
    ///
    /// Two coordinates landing on the same port is reported as
    /// [`RouteError::SamePort`] rather than yielding a zero-length route.
    pub fn resolve(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<(&'a Port, &'a Port), RouteError> {
        let none = ExclusionSet::new();
        let origin_port = self.directory.nearest_port(origin, &none)?;
        let destination_port = self.directory.nearest_port(destination, &none)?;
        if origin_port.name == destination_port.name {
            return Err(RouteError::SamePort {
                port: origin_port.name.clone(),
            });
        }
        Ok((origin_port, destination_port))
    }

    /// Resolve two raw coordinates and compute every candidate route.
    pub fn compute(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<RoutePlan, RouteError> {
        let (origin_port, destination_port) = self.resolve(origin, destination)?;
        self.plan_between(origin_port, destination_port)
    }

    /// Compute routes for two already-resolved ports.
    pub fn plan_between(&self, origin: &Port, destination: &Port) -> Result<RoutePlan, RouteError> {
        if origin.name == destination.name {
            return Err(RouteError::SamePort {
                port: origin.name.clone(),
            });
        }

        let (mode, routes) = match curated::lookup(&origin.name, &destination.name) {
            Some(pair) => {
                tracing::debug!(origin = %origin.name, destination = %destination.name, "using curated routes");
                (PlanMode::Curated, pair.build(&origin.name))
            }
            None => (PlanMode::Synthesized, self.synthesize(origin, destination)),
        };

        Ok(RoutePlan {
            origin: origin.clone(),
            destination: destination.clone(),
            mode,
            routes,
        })
    }

    /// Generate one route per configured corridor.
    pub fn synthesize(&self, origin: &Port, destination: &Port) -> Vec<Route> {
        let mut excluded = ExclusionSet::new();
        excluded.insert(origin.name.clone());
        excluded.insert(destination.name.clone());

        let mut routes = Vec::with_capacity(3);
        for corridor in self.config.corridors() {
            let intermediates = select_intermediates(
                self.directory,
                origin.coordinates,
                destination.coordinates,
                corridor.intermediates,
                &corridor.preferred_regions,
                &excluded,
            );
            if intermediates.len() < corridor.intermediates {
                tracing::debug!(
                    corridor = %corridor.id,
                    requested = corridor.intermediates,
                    found = intermediates.len(),
                    "corridor built with fewer intermediates than requested"
                );
            }
            excluded.extend(intermediates.iter().map(|p| p.name.clone()));
            routes.push(build_corridor(corridor, origin, destination, &intermediates));
        }
        routes
    }
}

fn build_corridor(
    corridor: &CorridorConfig,
    origin: &Port,
    destination: &Port,
    intermediates: &[&Port],
) -> Route {
    let stops: Vec<&Port> = std::iter::once(origin)
        .chain(intermediates.iter().copied())
        .chain(std::iter::once(destination))
        .collect();

    let description = if intermediates.is_empty() {
        format!("Direct passage from {} to {}", origin.name, destination.name)
    } else {
        let via: Vec<&str> = intermediates.iter().map(|p| p.name.as_str()).collect();
        format!("{} to {} via {}", origin.name, destination.name, via.join(", "))
    };

    assemble_route(
        &corridor.id,
        &corridor.name,
        corridor.risk_level,
        stops.iter().map(|p| p.coordinates).collect(),
        stops.iter().map(|p| p.name.clone()).collect(),
        corridor.speed_kmh,
        &description,
    )
}
