//! Geographic primitives: coordinate types, search-area projection, and the
//! planar route-length approximation.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in meters, used by the spherical destination-point
/// projection.
const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Kilometers-to-miles factor applied to route lengths.
const KM_TO_MILES: f64 = 0.621_371;

/// A WGS84 coordinate in signed decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Rectangular lat/lon region scoping a network search query.
///
/// Derived from a center and radius via [`bounding_box`]; never mutated
/// afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub southwest: GeoPoint,
    pub northeast: GeoPoint,
}

/// Projects a center point and radius into a search bounding box.
///
/// The corners are spherical destination points from the center at bearings
/// 225° (southwest) and 45° (northeast). Because each corner sits at
/// distance `radius_meters` along the diagonal, the box approximates the
/// circle's bounding square rather than circumscribing it exactly — an
/// accepted approximation at search-radius scale.
///
/// A radius of zero collapses the box onto the center. For any positive
/// radius the southwest corner's latitude and longitude are less than or
/// equal to the northeast corner's.
#[must_use]
pub fn bounding_box(center: GeoPoint, radius_meters: f64) -> BoundingBox {
    BoundingBox {
        southwest: destination_point(center, 225.0, radius_meters),
        northeast: destination_point(center, 45.0, radius_meters),
    }
}

/// Spherical "destination point given distance and bearing" formula.
fn destination_point(origin: GeoPoint, bearing_degrees: f64, distance_meters: f64) -> GeoPoint {
    let angular = distance_meters / EARTH_RADIUS_METERS;
    let bearing = bearing_degrees.to_radians();
    let lat1 = origin.latitude.to_radians();
    let lon1 = origin.longitude.to_radians();

    let lat2 = (lat1.sin() * angular.cos() + lat1.cos() * angular.sin() * bearing.cos()).asin();
    let lon2 = lon1
        + (bearing.sin() * angular.sin() * lat1.cos())
            .atan2(angular.cos() - lat1.sin() * lat2.sin());

    GeoPoint::new(lat2.to_degrees(), lon2.to_degrees())
}

/// Straight-line distance between two points in raw degree space.
///
/// Not a geodesic: latitude and longitude are treated as flat 2-D
/// coordinates. The route optimizer only compares these values against each
/// other over a small area, where the shared distortion does not change
/// which neighbor is nearest.
#[must_use]
pub fn planar_distance(a: GeoPoint, b: GeoPoint) -> f64 {
    (a.latitude - b.latitude).hypot(a.longitude - b.longitude)
}

/// Total length of a path in miles.
///
/// Sums consecutive [`planar_distance`] values over raw degree pairs, then
/// scales by the kilometers→miles constant. Degree-space lengths are not
/// kilometers, so the figure understates true road distance at real-world
/// scale; downstream consumers expect exactly this formula, so it is kept
/// as-is rather than replaced with a geodesic. Paths with fewer than two
/// points have length zero.
#[must_use]
pub fn total_distance_miles(path: &[GeoPoint]) -> f64 {
    path.windows(2)
        .map(|pair| planar_distance(pair[0], pair[1]))
        .sum::<f64>()
        * KM_TO_MILES
}
