//! Distance from a point to a route polyline.

use geo::{Closest, ClosestPoint, Coord, LineString, Point};
use saferoute_core::LatLng;

/// Mean Earth radius in metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Smallest cosine used when scaling longitudes, so the projection stays
/// finite at the poles.
const MIN_COS_LAT: f64 = 1e-9;

/// Great-circle distance between two coordinates in metres.
#[must_use]
#[expect(clippy::float_arithmetic, reason = "haversine formula")]
pub fn haversine_m(a: LatLng, b: LatLng) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * h.sqrt().min(1.0).asin()
}

/// Flat metric plane tangent to the globe at `origin`.
struct LocalPlane {
    origin: LatLng,
    cos_lat: f64,
}

impl LocalPlane {
    fn at(origin: LatLng) -> Self {
        Self {
            origin,
            cos_lat: origin.lat.to_radians().cos().max(MIN_COS_LAT),
        }
    }

    #[expect(clippy::float_arithmetic, reason = "equirectangular projection")]
    fn project(&self, coord: Coord<f64>) -> Coord<f64> {
        Coord {
            x: (coord.x - self.origin.lng).to_radians() * self.cos_lat * EARTH_RADIUS_M,
            y: (coord.y - self.origin.lat).to_radians() * EARTH_RADIUS_M,
        }
    }

    #[expect(clippy::float_arithmetic, reason = "equirectangular projection")]
    fn unproject(&self, point: Point<f64>) -> LatLng {
        LatLng::new(
            self.origin.lat + (point.y() / EARTH_RADIUS_M).to_degrees(),
            self.origin.lng + (point.x() / (EARTH_RADIUS_M * self.cos_lat)).to_degrees(),
        )
    }
}

/// Distance in metres from `target` to the nearest point of `path`.
///
/// The nearest point is found in a local plane centred on `target` and the
/// distance to it is measured along the great circle. Returns `None` for an
/// empty path.
#[must_use]
pub fn distance_to_path(target: LatLng, path: &LineString<f64>) -> Option<f64> {
    let plane = LocalPlane::at(target);
    let projected: LineString<f64> = path.coords().map(|c| plane.project(*c)).collect();
    let nearest = match projected.0.as_slice() {
        [] => return None,
        [only] => Point::from(*only),
        _ => match projected.closest_point(&Point::new(0.0, 0.0)) {
            Closest::Intersection(point) | Closest::SinglePoint(point) => point,
            Closest::Indeterminate => return None,
        },
    };
    Some(haversine_m(target, plane.unproject(nearest)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn close(actual: f64, expected: f64, tolerance: f64) -> bool {
        #[expect(clippy::float_arithmetic, reason = "tolerance check")]
        let diff = (actual - expected).abs();
        diff <= tolerance
    }

    #[rstest]
    fn haversine_of_identical_points_is_zero() {
        let p = LatLng::new(28.6315, 77.2167);
        assert!(close(haversine_m(p, p), 0.0, 1e-9));
    }

    #[rstest]
    fn one_degree_of_latitude() {
        let d = haversine_m(LatLng::new(0.0, 0.0), LatLng::new(1.0, 0.0));
        assert!(close(d, 111_195.0, 1.0), "got {d}");
    }

    #[rstest]
    fn vertex_on_path_has_zero_distance() {
        let path = LineString::from(vec![(77.2167, 28.6315), (77.2431, 28.5665)]);
        let d = distance_to_path(LatLng::new(28.6315, 77.2167), &path).expect("non-empty path");
        assert!(close(d, 0.0, 1e-6), "got {d}");
    }

    #[rstest]
    fn perpendicular_offset_from_segment() {
        // An east-west segment on the equator; a point 0.001° north of its middle.
        let path = LineString::from(vec![(0.0, 0.0), (0.01, 0.0)]);
        let d = distance_to_path(LatLng::new(0.001, 0.005), &path).expect("non-empty path");
        assert!(close(d, 111.2, 0.5), "got {d}");
    }

    #[rstest]
    fn single_vertex_path() {
        let path = LineString::from(vec![(77.2167, 28.6433)]);
        let d = distance_to_path(LatLng::new(28.6315, 77.2167), &path).expect("non-empty path");
        assert!(close(d, 1312.1, 1.0), "got {d}");
    }

    #[rstest]
    fn empty_path_has_no_distance() {
        let path: LineString<f64> = LineString::new(Vec::new());
        assert_eq!(distance_to_path(LatLng::new(0.0, 0.0), &path), None);
    }
}
