use geo::Coord;

/// A resolved stop on a route.
///
/// Coordinates are WGS84 degrees. Points are produced by address resolution
/// or supplied directly as coordinates and are never mutated afterwards.
///
/// # Examples
/// ```
/// use saferoute_core::RoutePoint;
///
/// let point = RoutePoint::new(28.6315, 77.2167, "Connaught Place");
/// assert_eq!(point.name, "Connaught Place");
/// assert_eq!(point.coord().x, 77.2167);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutePoint {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
    /// Human-readable label, usually the geocoder's formatted address.
    pub name: String,
}

impl RoutePoint {
    /// Construct a point from latitude, longitude and a label.
    pub fn new(lat: f64, lng: f64, name: impl Into<String>) -> Self {
        Self {
            lat,
            lng,
            name: name.into(),
        }
    }

    /// Geometry view of the point with `x = longitude` and `y = latitude`.
    #[must_use]
    pub const fn coord(&self) -> Coord<f64> {
        Coord {
            x: self.lng,
            y: self.lat,
        }
    }

    /// The bare coordinate pair without the label.
    #[must_use]
    pub const fn lat_lng(&self) -> LatLng {
        LatLng {
            lat: self.lat,
            lng: self.lng,
        }
    }
}

/// A bare latitude/longitude pair, used for map centres and device locations.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatLng {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

impl LatLng {
    /// Construct a coordinate pair.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Whether both components are finite and inside the WGS84 ranges.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

impl From<LatLng> for Coord<f64> {
    fn from(value: LatLng) -> Self {
        Self {
            x: value.lng,
            y: value.lat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn coord_swaps_axis_order() {
        let point = RoutePoint::new(12.9, 77.6, "Bengaluru");
        assert_eq!(point.coord(), Coord { x: 77.6, y: 12.9 });
        assert_eq!(point.lat_lng(), LatLng::new(12.9, 77.6));
    }

    #[rstest]
    #[case(LatLng::new(28.6139, 77.2090), true)]
    #[case(LatLng::new(90.0, -180.0), true)]
    #[case(LatLng::new(91.0, 0.0), false)]
    #[case(LatLng::new(0.0, 180.5), false)]
    #[case(LatLng::new(f64::NAN, 0.0), false)]
    fn validates_ranges(#[case] value: LatLng, #[case] expected: bool) {
        assert_eq!(value.is_valid(), expected);
    }
}
