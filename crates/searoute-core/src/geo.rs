//! Great-circle distance math over port and waypoint coordinates.

use crate::models::Coordinate;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6_371.0;

/// Calculate distance between two points in kilometers using the Haversine formula.
///
/// # Arguments
/// * `lat1`, `lon1` - First point coordinates in decimal degrees
/// * `lat2`, `lon2` - Second point coordinates in decimal degrees
///
/// NaN inputs propagate to a NaN result.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let dphi = (lat2 - lat1).to_radians();
    let dlambda = (lon2 - lon1).to_radians();
    let a = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Great-circle distance between two coordinates in kilometers.
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    haversine_km(a.lat, a.lon, b.lat, b.lon)
}

/// Sum of great-circle distances over consecutive waypoints.
///
/// Returns 0 for empty or single-point input.
pub fn path_length_km(waypoints: &[Coordinate]) -> f64 {
    waypoints
        .windows(2)
        .map(|pair| distance_km(pair[0], pair[1]))
        .sum()
}

/// Linear interpolation in lon/lat space (not along the great circle).
pub fn interpolate(a: Coordinate, b: Coordinate, fraction: f64) -> Coordinate {
    Coordinate {
        lon: a.lon + (b.lon - a.lon) * fraction,
        lat: a.lat + (b.lat - a.lat) * fraction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_known_distance() {
        // ~111km between these points (1 degree latitude)
        let dist = haversine_km(0.0, 0.0, 1.0, 0.0);
        assert!((dist - 111.195).abs() < 0.01);
    }

    #[test]
    fn test_haversine_same_point() {
        let shanghai = Coordinate::new(121.4737, 31.2304);
        assert_eq!(distance_km(shanghai, shanghai), 0.0);
    }

    #[test]
    fn distance_is_symmetric_and_positive() {
        let pairs = [
            (Coordinate::new(121.4737, 31.2304), Coordinate::new(9.9937, 53.5511)),
            (Coordinate::new(-118.27, 33.74), Coordinate::new(151.2, -33.86)),
            (Coordinate::new(170.0, 10.0), Coordinate::new(-170.0, 20.0)),
            (Coordinate::new(0.0, 89.9), Coordinate::new(180.0, -89.9)),
        ];
        for (a, b) in pairs {
            let ab = distance_km(a, b);
            let ba = distance_km(b, a);
            assert_eq!(ab, ba, "asymmetric distance for {a:?} / {b:?}");
            assert!(ab > 0.0);
        }
    }

    #[test]
    fn shanghai_to_hamburg_is_roughly_8500_km() {
        let dist = distance_km(
            Coordinate::new(121.4737, 31.2304),
            Coordinate::new(9.9937, 53.5511),
        );
        assert!((dist - 8_520.0).abs() < 50.0, "got {dist}");
    }

    #[test]
    fn path_length_handles_degenerate_input() {
        assert_eq!(path_length_km(&[]), 0.0);
        assert_eq!(path_length_km(&[Coordinate::new(10.0, 10.0)]), 0.0);
    }

    #[test]
    fn path_length_sums_segments() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 1.0);
        let c = Coordinate::new(1.0, 1.0);
        let total = path_length_km(&[a, b, c]);
        assert!((total - (distance_km(a, b) + distance_km(b, c))).abs() < 1e-9);
    }

    #[test]
    fn nan_propagates() {
        assert!(haversine_km(f64::NAN, 0.0, 1.0, 1.0).is_nan());
    }

    #[test]
    fn interpolate_hits_endpoints_and_midpoint() {
        let a = Coordinate::new(10.0, -20.0);
        let b = Coordinate::new(30.0, 20.0);
        assert_eq!(interpolate(a, b, 0.0), a);
        assert_eq!(interpolate(a, b, 1.0), b);
        assert_eq!(interpolate(a, b, 0.5), Coordinate::new(20.0, 0.0));
    }
}
