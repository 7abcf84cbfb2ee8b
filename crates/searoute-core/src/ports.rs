//! Port directory and nearest-port resolver.
//!
//! The directory is built once and never mutated, so a single instance can be
//! shared across threads behind an `Arc`.

use std::collections::HashSet;

use crate::error::RouteError;
use crate::geo::distance_km;
use crate::models::{Coordinate, Port};

/// Port names barred from selection in a given search.
pub type ExclusionSet = HashSet<String>;

struct PortRecord {
    code: &'static str,
    name: &'static str,
    country: &'static str,
    lon: f64,
    lat: f64,
    region: &'static str,
}

const fn port(
    code: &'static str,
    name: &'static str,
    country: &'static str,
    lon: f64,
    lat: f64,
    region: &'static str,
) -> PortRecord {
    PortRecord {
        code,
        name,
        country,
        lon,
        lat,
        region,
    }
}

// Catalog order is significant: equidistant candidates resolve to the earlier entry.
const BUILTIN_PORTS: &[PortRecord] = &[
    // East Asia
    port("CNSHA", "Shanghai", "China", 121.4737, 31.2304, "East Asia"),
    port("HKHKG", "Hong Kong", "Hong Kong SAR", 114.1694, 22.3193, "East Asia"),
    port("KRPUS", "Busan", "South Korea", 129.0756, 35.1796, "East Asia"),
    port("JPYOK", "Yokohama", "Japan", 139.6380, 35.4437, "East Asia"),
    // Southeast Asia
    port("SGSIN", "Singapore", "Singapore", 103.8198, 1.3521, "Southeast Asia"),
    port("MYPKG", "Port Klang", "Malaysia", 101.3929, 3.0000, "Southeast Asia"),
    port("VNSGN", "Ho Chi Minh City", "Vietnam", 106.7009, 10.7769, "Southeast Asia"),
    port("IDJKT", "Jakarta", "Indonesia", 106.8833, -6.1000, "Southeast Asia"),
    port("PHMNL", "Manila", "Philippines", 120.9842, 14.5995, "Southeast Asia"),
    // South Asia
    port("LKCMB", "Colombo", "Sri Lanka", 79.8612, 6.9271, "South Asia"),
    port("INNSA", "Mumbai", "India", 72.9500, 18.9500, "South Asia"),
    // Middle East
    port("AEJEA", "Jebel Ali", "United Arab Emirates", 55.0272, 24.9857, "Middle East"),
    port("OMSLL", "Salalah", "Oman", 54.0924, 17.0151, "Middle East"),
    port("SAJED", "Jeddah", "Saudi Arabia", 39.1925, 21.4858, "Middle East"),
    // Europe
    port("NLRTM", "Rotterdam", "Netherlands", 4.4792, 51.9225, "Europe"),
    port("DEHAM", "Hamburg", "Germany", 9.9937, 53.5511, "Europe"),
    port("BEANR", "Antwerp", "Belgium", 4.4025, 51.2194, "Europe"),
    port("GBFXT", "Felixstowe", "United Kingdom", 1.3510, 51.9540, "Europe"),
    // Mediterranean
    port("GRPIR", "Piraeus", "Greece", 23.6470, 37.9420, "Mediterranean"),
    port("ESVLC", "Valencia", "Spain", -0.3763, 39.4699, "Mediterranean"),
    port("ITGOA", "Genoa", "Italy", 8.9463, 44.4056, "Mediterranean"),
    // Africa
    port("ZACPT", "Cape Town", "South Africa", 18.4241, -33.9249, "Africa"),
    port("ZADUR", "Durban", "South Africa", 31.0218, -29.8587, "Africa"),
    port("KEMBA", "Mombasa", "Kenya", 39.6682, -4.0435, "Africa"),
    port("NGLOS", "Lagos", "Nigeria", 3.3792, 6.5244, "Africa"),
    port("SNDKR", "Dakar", "Senegal", -17.4677, 14.7167, "Africa"),
    // North America
    port("USLAX", "Los Angeles", "United States", -118.2700, 33.7400, "North America"),
    port("USNYC", "New York", "United States", -74.0060, 40.7128, "North America"),
    port("CAVAN", "Vancouver", "Canada", -123.1207, 49.2827, "North America"),
    // Central America
    port("JMKIN", "Kingston", "Jamaica", -76.7936, 17.9714, "Central America"),
    // South America
    port("BRSSZ", "Santos", "Brazil", -46.3336, -23.9608, "South America"),
    port("ARBUE", "Buenos Aires", "Argentina", -58.3816, -34.6037, "South America"),
    port("PECLL", "Callao", "Peru", -77.1181, -12.0464, "South America"),
    // Oceania
    port("AUSYD", "Sydney", "Australia", 151.2093, -33.8688, "Oceania"),
    port("NZAKL", "Auckland", "New Zealand", 174.7633, -36.8485, "Oceania"),
    port("USHNL", "Honolulu", "United States", -157.8583, 21.3069, "Oceania"),
    // Strategic passages
    port("EGPSD", "Port Said", "Egypt", 32.3019, 31.2653, "Strategic Passage"),
    port("DJJIB", "Djibouti", "Djibouti", 43.1450, 11.5890, "Strategic Passage"),
    port("GIGIB", "Gibraltar", "Gibraltar", -5.3536, 36.1408, "Strategic Passage"),
    port("PABLB", "Balboa", "Panama", -79.5667, 8.9500, "Strategic Passage"),
];

impl PortRecord {
    fn to_port(&self) -> Port {
        Port {
            code: self.code.to_string(),
            name: self.name.to_string(),
            country: self.country.to_string(),
            coordinates: Coordinate::new(self.lon, self.lat),
            region: self.region.to_string(),
        }
    }
}

/// Immutable catalog of named ports.
#[derive(Debug, Clone)]
pub struct PortDirectory {
    ports: Vec<Port>,
}

impl PortDirectory {
    /// Build a directory from a custom catalog.
    ///
    /// Names and codes must be unique (codes compared case-insensitively).
    pub fn new(ports: Vec<Port>) -> Result<Self, RouteError> {
        let mut names = HashSet::new();
        let mut codes = HashSet::new();
        for port in &ports {
            if !names.insert(port.name.as_str()) {
                return Err(RouteError::DuplicatePort(port.name.clone()));
            }
            if !codes.insert(port.code.to_ascii_uppercase()) {
                return Err(RouteError::DuplicatePort(port.code.clone()));
            }
        }
        Ok(Self { ports })
    }

    /// The built-in world catalog.
    pub fn builtin() -> Self {
        Self {
            ports: BUILTIN_PORTS.iter().map(PortRecord::to_port).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.ports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }

    /// Ports in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Port> {
        self.ports.iter()
    }

    /// Exact lookup by port name.
    pub fn get(&self, name: &str) -> Option<&Port> {
        self.ports.iter().find(|p| p.name == name)
    }

    pub fn by_code(&self, code: &str) -> Option<&Port> {
        self.ports.iter().find(|p| p.code.eq_ignore_ascii_case(code))
    }

    /// Lookup by UN/LOCODE or by name, both case-insensitive.
    pub fn find(&self, key: &str) -> Result<&Port, RouteError> {
        let key = key.trim();
        self.by_code(key)
            .or_else(|| self.ports.iter().find(|p| p.name.eq_ignore_ascii_case(key)))
            .ok_or_else(|| RouteError::UnknownPort(key.to_string()))
    }

    pub fn in_region<'a>(&'a self, region: &'a str) -> impl Iterator<Item = &'a Port> + 'a {
        self.ports
            .iter()
            .filter(move |p| p.region.eq_ignore_ascii_case(region))
    }

    /// Distinct regions in first-seen order.
    pub fn regions(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for port in &self.ports {
            if !seen.contains(&port.region.as_str()) {
                seen.push(port.region.as_str());
            }
        }
        seen
    }

    /// Resolve a coordinate to the closest port whose name is not excluded.
    ///
    /// Equidistant candidates resolve to the first one in catalog order.
    /// Non-finite coordinates are rejected rather than matched arbitrarily.
    pub fn nearest_port(
        &self,
        coordinate: Coordinate,
        excluded: &ExclusionSet,
    ) -> Result<&Port, RouteError> {
        if !(coordinate.lon.is_finite() && coordinate.lat.is_finite()) {
            return Err(RouteError::InvalidCoordinate {
                lon: coordinate.lon,
                lat: coordinate.lat,
            });
        }
        self.nearest_where(coordinate, |p| !excluded.contains(&p.name))
            .ok_or(RouteError::NoPortAvailable {
                excluded: excluded.len(),
            })
    }

    /// Closest port satisfying `accept`, or `None` if nothing qualifies.
    pub fn nearest_where<F>(&self, coordinate: Coordinate, accept: F) -> Option<&Port>
    where
        F: Fn(&Port) -> bool,
    {
        let mut best: Option<(&Port, f64)> = None;
        for port in self.ports.iter().filter(|p| accept(p)) {
            let dist = distance_km(coordinate, port.coordinates);
            if dist.is_nan() {
                continue;
            }
            // Strict comparison keeps the earlier entry on ties.
            match best {
                Some((_, best_dist)) if dist >= best_dist => {}
                _ => best = Some((port, dist)),
            }
        }
        best.map(|(port, _)| port)
    }
}

impl Default for PortDirectory {
    fn default() -> Self {
        Self::builtin()
    }
}
