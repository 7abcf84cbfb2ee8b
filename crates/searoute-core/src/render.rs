//! Seam-safe segment preparation for cylindrical map projections.
//!
//! A straight line between two waypoints whose longitudes differ by more than
//! 180° would be drawn the long way around the map. Such segments are split at
//! the antimeridian, with the crossing latitude found by linear interpolation.

use serde::{Deserialize, Serialize};

use crate::models::Coordinate;

/// How far past ±180° the split points are pushed so renderers leave no gap.
pub const DEFAULT_SEAM_OVERSHOOT_DEG: f64 = 0.1;

/// A drawable line segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub from: Coordinate,
    pub to: Coordinate,
}

impl Segment {
    pub const fn new(from: Coordinate, to: Coordinate) -> Self {
        Self { from, to }
    }
}

/// True when the shorter path between `a` and `b` wraps across ±180°.
pub fn crosses_antimeridian(a: Coordinate, b: Coordinate) -> bool {
    (b.lon - a.lon).abs() > 180.0
}

/// Split one segment at the antimeridian if it crosses it.
///
/// Returns the input unchanged as a single segment when no crossing occurs,
/// otherwise two segments meeting the seam at the interpolated latitude.
pub fn split_segment(a: Coordinate, b: Coordinate, overshoot_deg: f64) -> Vec<Segment> {
    if !crosses_antimeridian(a, b) {
        return vec![Segment::new(a, b)];
    }

    let delta = b.lon - a.lon;
    // A negative raw delta past 180° means the short way heads east over the seam.
    let going_east = delta < 0.0;
    let total = 360.0 - delta.abs();
    let to_edge = if going_east { 180.0 - a.lon } else { a.lon + 180.0 };
    let ratio = to_edge / total;
    let crossing_lat = a.lat + (b.lat - a.lat) * ratio;

    let edge = 180.0 + overshoot_deg;
    let (exit_lon, entry_lon) = if going_east { (edge, -edge) } else { (-edge, edge) };

    vec![
        Segment::new(a, Coordinate::new(exit_lon, crossing_lat)),
        Segment::new(Coordinate::new(entry_lon, crossing_lat), b),
    ]
}

/// Seam-safe segments for a whole waypoint sequence.
pub fn split_path(waypoints: &[Coordinate], overshoot_deg: f64) -> Vec<Segment> {
    waypoints
        .windows(2)
        .flat_map(|pair| split_segment(pair[0], pair[1], overshoot_deg))
        .collect()
}
