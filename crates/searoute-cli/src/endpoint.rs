//! Origin/destination arguments that may name a port or a raw position.

use anyhow::{bail, Result};
use searoute_core::{Coordinate, ExclusionSet, Port, PortDirectory, RouteEngine, RoutePlan};

#[derive(Debug, Clone, PartialEq)]
pub enum Endpoint {
    At(Coordinate),
    Port(String),
}

impl Endpoint {
    /// Build from the mutually exclusive `--from`/`--from-port` style flags.
    pub fn from_args(coordinate: Option<Coordinate>, port: Option<String>, flag: &str) -> Result<Self> {
        match (coordinate, port) {
            (Some(coordinate), None) => Ok(Endpoint::At(coordinate)),
            (None, Some(key)) => Ok(Endpoint::Port(key)),
            (Some(_), Some(_)) => bail!("--{flag} and --{flag}-port cannot be combined"),
            (None, None) => bail!("one of --{flag} or --{flag}-port is required"),
        }
    }

    pub fn resolve<'a>(&self, directory: &'a PortDirectory) -> Result<&'a Port> {
        let port = match self {
            Endpoint::At(coordinate) => directory.nearest_port(*coordinate, &ExclusionSet::new())?,
            Endpoint::Port(key) => directory.find(key)?,
        };
        Ok(port)
    }
}

/// Compute a plan for two endpoints of either kind.
pub fn plan(engine: &RouteEngine<'_>, origin: &Endpoint, destination: &Endpoint) -> Result<RoutePlan> {
    let plan = match (origin, destination) {
        (Endpoint::At(from), Endpoint::At(to)) => engine.compute(*from, *to)?,
        _ => {
            let directory = engine.directory();
            engine.plan_between(origin.resolve(directory)?, destination.resolve(directory)?)?
        }
    };
    Ok(plan)
}
