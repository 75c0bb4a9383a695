//! OSRM Route and Trip service response types.
//!
//! Both services are requested with `geometries=geojson`, so route
//! geometry arrives as `[lon, lat]` pairs rather than an encoded polyline.
//!
//! See: <http://project-osrm.org/docs/v5.24.0/api/#route-service>

use serde::Deserialize;

/// Status code OSRM returns for a successful request.
const OK_CODE: &str = "Ok";

/// OSRM Route API response.
#[derive(Debug, Deserialize)]
pub struct RouteResponse {
    /// Status code from OSRM.
    ///
    /// Common values:
    /// - `"Ok"` - Request was successful
    /// - `"NoRoute"` - No route between the coordinates
    /// - `"InvalidQuery"` - Invalid query parameters
    pub code: String,

    /// Optional error message when `code` is not `"Ok"`.
    pub message: Option<String>,

    /// Routes, best first. Later entries are alternatives.
    pub routes: Option<Vec<OsrmRoute>>,
}

impl RouteResponse {
    /// Check if the response indicates success.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.code == OK_CODE
    }
}

/// OSRM Trip API response.
#[derive(Debug, Deserialize)]
pub struct TripResponse {
    /// Status code from OSRM; `"NoTrips"` when no trip can be built.
    pub code: String,

    /// Optional error message when `code` is not `"Ok"`.
    pub message: Option<String>,

    /// Computed trips. With `roundtrip=false` there is at most one.
    pub trips: Option<Vec<OsrmRoute>>,

    /// Snapped input coordinates, in input order.
    pub waypoints: Option<Vec<TripWaypoint>>,
}

impl TripResponse {
    /// Check if the response indicates success.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.code == OK_CODE
    }
}

/// One route or trip.
#[derive(Debug, Clone, Deserialize)]
pub struct OsrmRoute {
    /// Length in metres.
    pub distance: f64,
    /// Travel time in seconds.
    pub duration: f64,
    /// Full-overview geometry.
    pub geometry: GeoJsonLine,
}

/// GeoJSON `LineString` geometry.
#[derive(Debug, Clone, Deserialize)]
pub struct GeoJsonLine {
    /// `[lon, lat]` pairs.
    pub coordinates: Vec<[f64; 2]>,
}

/// Placement of one input coordinate within a trip.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TripWaypoint {
    /// Position of this input within the trip's visiting order.
    pub waypoint_index: usize,
    /// Which trip the input belongs to.
    pub trips_index: usize,
}
