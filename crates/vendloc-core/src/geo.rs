//! Great-circle geometry helpers.
//!
//! Distances use the Haversine formula on a 6371 km sphere. Bounding
//! boxes use the flat 111 km-per-degree approximation; the longitude
//! delta divides by `cos(latitude)` and blows up near the poles, so
//! boxes are unusable near ±90° latitude. Callers treat boxes as a
//! pre-filter only — the exact distance is always the inclusion test.

use crate::types::{BoundingBox, Coordinate};

pub const EARTH_RADIUS_KM: f64 = 6371.0;

const KM_PER_LAT_DEGREE: f64 = 111.0;

/// Range check plus non-finite rejection. Fails closed on NaN/Infinity.
#[must_use]
pub fn is_valid_coordinate(latitude: f64, longitude: f64) -> bool {
    latitude.is_finite()
        && longitude.is_finite()
        && (-90.0..=90.0).contains(&latitude)
        && (-180.0..=180.0).contains(&longitude)
}

/// Great-circle distance between two points, in kilometers.
///
/// Symmetric in its arguments; zero (within floating-point tolerance)
/// for identical points.
#[must_use]
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

/// Box of `radius_km` around `center` using the 111 km/degree
/// approximation. Longitude width widens with latitude; degenerates as
/// `cos(latitude)` approaches zero near the poles (known limitation,
/// inherited behavior — not special-cased).
#[must_use]
pub fn bounding_box(center: Coordinate, radius_km: f64) -> BoundingBox {
    let lat_delta = radius_km / KM_PER_LAT_DEGREE;
    let lon_delta = radius_km / (KM_PER_LAT_DEGREE * center.latitude.to_radians().cos());
    BoundingBox {
        north: center.latitude + lat_delta,
        south: center.latitude - lat_delta,
        east: center.longitude + lon_delta,
        west: center.longitude - lon_delta,
    }
}

/// Min/max containment test. Pre-filter only, never the sole radius test.
#[must_use]
pub fn is_within_bounds(point: Coordinate, bounds: &BoundingBox) -> bool {
    point.latitude >= bounds.south
        && point.latitude <= bounds.north
        && point.longitude >= bounds.west
        && point.longitude <= bounds.east
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).expect("test coordinate must be valid")
    }

    #[test]
    fn distance_is_symmetric() {
        let delhi = coord(28.6139, 77.2090);
        let mumbai = coord(19.0760, 72.8777);
        let ab = distance_km(delhi, mumbai);
        let ba = distance_km(mumbai, delhi);
        assert!((ab - ba).abs() < 1e-9, "ab={ab} ba={ba}");
    }

    #[test]
    fn distance_to_self_is_zero() {
        let p = coord(12.9716, 77.5946);
        assert!(distance_km(p, p).abs() < 1e-9);
    }

    #[test]
    fn delhi_to_mumbai_is_about_1150_km() {
        let d = distance_km(coord(28.6139, 77.2090), coord(19.0760, 72.8777));
        assert!((1150.0..=1160.0).contains(&d), "got {d} km");
    }

    #[test]
    fn coordinate_validation_truth_table() {
        assert!(is_valid_coordinate(0.0, 0.0));
        assert!(is_valid_coordinate(-90.0, 180.0));
        assert!(!is_valid_coordinate(91.0, 0.0));
        assert!(!is_valid_coordinate(45.0, 200.0));
        assert!(!is_valid_coordinate(f64::NAN, 0.0));
        assert!(!is_valid_coordinate(0.0, f64::NEG_INFINITY));
    }

    #[test]
    fn bounding_box_contains_center_and_nearby_point() {
        let center = coord(18.5204, 73.8567);
        let bounds = bounding_box(center, 10.0);
        assert!(is_within_bounds(center, &bounds));

        // ~5 km east of center
        let nearby = coord(18.5204, 73.9040);
        assert!(is_within_bounds(nearby, &bounds));
    }

    #[test]
    fn bounding_box_excludes_far_point() {
        let center = coord(18.5204, 73.8567);
        let bounds = bounding_box(center, 10.0);
        // Mumbai, ~120 km away
        assert!(!is_within_bounds(coord(19.0760, 72.8777), &bounds));
    }

    #[test]
    fn bounding_box_lon_span_widens_with_latitude() {
        let near_equator = bounding_box(coord(1.0, 10.0), 50.0);
        let far_north = bounding_box(coord(60.0, 10.0), 50.0);
        let span = |b: &BoundingBox| b.east - b.west;
        assert!(span(&far_north) > span(&near_equator));
    }
}
