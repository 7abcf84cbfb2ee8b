//! Hand-authored corridors for designated port pairs.
//!
//! Geometry here is fixed; distances and ETAs are still computed from the
//! waypoints so the numbers stay consistent with synthesized routes.

use crate::engine::assemble_route;
use crate::models::{Coordinate, RiskLevel, Route};

/// A named, pre-authored waypoint.
#[derive(Debug, Clone, Copy)]
pub struct NamedPoint {
    pub name: &'static str,
    pub lon: f64,
    pub lat: f64,
}

const fn at(name: &'static str, lon: f64, lat: f64) -> NamedPoint {
    NamedPoint { name, lon, lat }
}

#[derive(Debug, Clone, Copy)]
pub struct CuratedRoute {
    pub id: &'static str,
    pub name: &'static str,
    pub risk_level: RiskLevel,
    /// Nominal transit speed in km/h used for the ETA.
    pub speed_kmh: f64,
    pub description: &'static str,
    /// Authored from `CuratedPair::from` to `CuratedPair::to`.
    pub waypoints: &'static [NamedPoint],
}

impl CuratedRoute {
    /// Materialize the route, reversing the authored geometry when the
    /// request runs from the pair's `to` port back to its `from` port.
    pub fn build(&self, reversed: bool) -> Route {
        let mut points: Vec<&NamedPoint> = self.waypoints.iter().collect();
        if reversed {
            points.reverse();
        }
        let waypoints = points.iter().map(|p| Coordinate::new(p.lon, p.lat)).collect();
        let names = points.iter().map(|p| p.name.to_string()).collect();
        assemble_route(
            self.id,
            self.name,
            self.risk_level,
            waypoints,
            names,
            self.speed_kmh,
            self.description,
        )
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CuratedPair {
    pub from: &'static str,
    pub to: &'static str,
    pub routes: &'static [CuratedRoute],
}

impl CuratedPair {
    /// Order-independent lookup key.
    pub fn key(&self) -> (&'static str, &'static str) {
        canonical_pair(self.from, self.to)
    }

    pub fn build(&self, origin: &str) -> Vec<Route> {
        let reversed = origin != self.from;
        self.routes.iter().map(|r| r.build(reversed)).collect()
    }
}

/// Sort a port-name pair so (a, b) and (b, a) share one key.
pub fn canonical_pair<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Find the curated entry for two port names, in either order.
pub fn lookup(origin: &str, destination: &str) -> Option<&'static CuratedPair> {
    let key = canonical_pair(origin, destination);
    CURATED_PAIRS.iter().find(|pair| pair.key() == key)
}

pub fn pairs() -> &'static [CuratedPair] {
    CURATED_PAIRS
}

const CAPE_OF_GOOD_HOPE: &[NamedPoint] = &[
    at("Shanghai", 121.4737, 31.2304),
    at("Taiwan Strait", 119.5, 24.5),
    at("South China Sea", 113.0, 14.0),
    at("Singapore Strait", 104.0, 1.2),
    at("Strait of Malacca", 95.5, 5.8),
    at("Dondra Head", 80.5, 5.5),
    at("Central Indian Ocean", 65.0, -5.0),
    at("Mozambique Channel", 42.0, -24.0),
    at("Off Durban", 33.0, -31.0),
    at("Cape of Good Hope", 18.47, -34.8),
    at("Walvis Bay Offing", 10.0, -20.0),
    at("Gulf of Guinea", 3.0, -8.0),
    at("Off Dakar", -19.0, 14.0),
    at("Canary Islands", -16.0, 28.0),
    at("Cape Finisterre", -10.5, 43.5),
    at("Ushant", -5.5, 48.8),
    at("English Channel", 1.5, 50.9),
    at("North Sea", 4.5, 53.5),
    at("Elbe Estuary", 8.5, 54.0),
    at("Hamburg", 9.9937, 53.5511),
];

const SUEZ_CANAL: &[NamedPoint] = &[
    at("Shanghai", 121.4737, 31.2304),
    at("Taiwan Strait", 119.5, 24.5),
    at("South China Sea", 113.0, 14.0),
    at("Singapore Strait", 104.0, 1.2),
    at("Strait of Malacca", 95.5, 5.8),
    at("Dondra Head", 80.5, 5.5),
    at("Arabian Sea", 62.0, 13.0),
    at("Gulf of Aden", 48.0, 12.3),
    at("Bab-el-Mandeb", 43.4, 12.6),
    at("Red Sea", 38.5, 20.5),
    at("Gulf of Suez", 33.0, 28.5),
    at("Suez Canal", 32.35, 30.5),
    at("Port Said", 32.3, 31.4),
    at("Eastern Mediterranean", 25.0, 34.0),
    at("Strait of Sicily", 12.0, 37.2),
    at("Strait of Gibraltar", -5.6, 35.95),
    at("Cape St. Vincent", -9.5, 37.0),
    at("Cape Finisterre", -10.0, 43.5),
    at("Ushant", -5.5, 48.8),
    at("English Channel", 1.5, 50.9),
    at("North Sea", 4.5, 53.5),
    at("Elbe Estuary", 8.5, 54.0),
    at("Hamburg", 9.9937, 53.5511),
];

const PANAMA_CANAL: &[NamedPoint] = &[
    at("Shanghai", 121.4737, 31.2304),
    at("Osumi Strait", 131.0, 31.0),
    at("Northwest Pacific", 150.0, 36.0),
    at("Emperor Seamounts", 170.0, 40.0),
    at("Central North Pacific", -165.0, 36.0),
    at("Off California", -125.0, 28.0),
    at("Off Baja California", -112.0, 20.0),
    at("Gulf of Panama", -79.5, 7.5),
    at("Panama Canal", -79.7, 9.1),
    at("Windward Passage", -74.0, 20.0),
    at("Sargasso Sea", -60.0, 30.0),
    at("Mid-Atlantic", -35.0, 42.0),
    at("Western Approaches", -10.0, 49.0),
    at("English Channel", 1.5, 50.9),
    at("North Sea", 4.5, 53.5),
    at("Elbe Estuary", 8.5, 54.0),
    at("Hamburg", 9.9937, 53.5511),
];

const NORTHERN_SEA_ROUTE: &[NamedPoint] = &[
    at("Shanghai", 121.4737, 31.2304),
    at("Korea Strait", 129.5, 34.5),
    at("Sea of Japan", 135.0, 40.0),
    at("La Perouse Strait", 142.0, 45.7),
    at("Sea of Okhotsk", 150.0, 50.0),
    at("Off Kamchatka", 163.0, 53.0),
    at("Bering Sea", 175.0, 60.0),
    at("Bering Strait", -169.0, 65.8),
    at("Chukchi Sea", -175.0, 69.5),
    at("East Siberian Sea", 165.0, 72.0),
    at("Laptev Sea", 125.0, 76.5),
    at("Vilkitsky Strait", 104.0, 77.8),
    at("Kara Sea", 75.0, 74.5),
    at("Kara Gate", 58.5, 70.4),
    at("Barents Sea", 40.0, 71.0),
    at("North Cape", 25.8, 71.5),
    at("Norwegian Sea", 8.0, 64.0),
    at("Skagerrak Approach", 6.0, 57.0),
    at("Elbe Estuary", 8.5, 54.0),
    at("Hamburg", 9.9937, 53.5511),
];

const SHANGHAI_HAMBURG: &[CuratedRoute] = &[
    CuratedRoute {
        id: "cape-of-good-hope",
        name: "Cape of Good Hope Route",
        risk_level: RiskLevel::Low,
        speed_kmh: 26.0,
        description: "Long-haul detour around southern Africa avoiding the Red Sea",
        waypoints: CAPE_OF_GOOD_HOPE,
    },
    CuratedRoute {
        id: "suez-canal",
        name: "Suez Canal Route",
        risk_level: RiskLevel::High,
        speed_kmh: 30.0,
        description: "Shortest corridor through Bab-el-Mandeb and the Suez Canal",
        waypoints: SUEZ_CANAL,
    },
    CuratedRoute {
        id: "panama-canal",
        name: "Trans-Pacific Panama Route",
        risk_level: RiskLevel::Medium,
        speed_kmh: 28.0,
        description: "Eastbound across the Pacific and through the Panama Canal",
        waypoints: PANAMA_CANAL,
    },
    CuratedRoute {
        id: "northern-sea-route",
        name: "Northern Sea Route",
        risk_level: RiskLevel::High,
        speed_kmh: 22.0,
        description: "Seasonal Arctic shortcut along the Siberian coast",
        waypoints: NORTHERN_SEA_ROUTE,
    },
];

const CURATED_PAIRS: &[CuratedPair] = &[CuratedPair {
    from: "Shanghai",
    to: "Hamburg",
    routes: SHANGHAI_HAMBURG,
}];
