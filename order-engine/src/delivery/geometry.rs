//! Geometry utilities for delivery zones
//!
//! Coordinates are (latitude, longitude) treated as planar (x, y).

use shared::models::LatLng;

/// Kilometres per degree used by the flat-Earth area estimate
const KM_PER_DEGREE: f64 = 111.0;

/// Even-odd ray-casting point-in-polygon test
///
/// The polygon is implicitly closed: the last vertex connects back to the
/// first, so stored zones need not repeat their first vertex. Polygons with
/// fewer than 3 vertices never contain anything. A point exactly on an edge
/// gets a deterministic but unspecified answer.
pub fn point_in_polygon(point: LatLng, polygon: &[LatLng]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }

    let (x, y) = (point.latitude, point.longitude);
    let mut inside = false;

    let mut j = n - 1;
    for i in 0..n {
        let (xi, yi) = (polygon[i].latitude, polygon[i].longitude);
        let (xj, yj) = (polygon[j].latitude, polygon[j].longitude);

        if ((yi > y) != (yj > y)) && (x < (xj - xi) * (y - yi) / (yj - yi) + xi) {
            inside = !inside;
        }
        j = i;
    }

    inside
}

/// Approximate polygon area in km²
///
/// Shoelace formula in squared degrees, scaled by 111 km per degree on both
/// axes and corrected by `cos(reference_latitude)`. Only valid for
/// city-scale regions. Rounded to 2 decimals.
pub fn polygon_area(polygon: &[LatLng], reference_latitude: f64) -> f64 {
    let n = polygon.len();
    if n < 3 {
        return 0.0;
    }

    let mut twice_area = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        twice_area += polygon[i].latitude * polygon[j].longitude;
        twice_area -= polygon[j].latitude * polygon[i].longitude;
    }
    let area_deg2 = twice_area.abs() / 2.0;

    let km2 = area_deg2 * KM_PER_DEGREE * KM_PER_DEGREE * reference_latitude.to_radians().cos();
    (km2 * 100.0).round() / 100.0
}

/// Mean vertex latitude, used as the reference latitude for [`polygon_area`]
pub fn mean_latitude(polygon: &[LatLng]) -> f64 {
    if polygon.is_empty() {
        return 0.0;
    }
    polygon.iter().map(|p| p.latitude).sum::<f64>() / polygon.len() as f64
}
